//! The 64 hexagrams (六十四卦).
//!
//! A hexagram is keyed by the pair `(upper, lower)` of trigram indices. The
//! table is total over `[1,8] x [1,8]`; a lookup that misses anyway returns
//! the explicit [`Hexagram::UNKNOWN`] sentinel rather than plausible content.

use std::sync::LazyLock;

use serde::Serialize;

use crate::trigram::{Line, Trigram};

/// One hexagram of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// Upper trigram index (1-8), or 0 for the sentinel.
    pub upper: u8,
    /// Lower trigram index (1-8), or 0 for the sentinel.
    pub lower: u8,
    /// Short name, e.g. 泰.
    pub name: &'static str,
    /// Unicode hexagram glyph.
    pub symbol: &'static str,
    /// Composite label, e.g. 地天泰.
    pub nature: &'static str,
    /// Short prose description.
    pub description: &'static str,
    /// Classical judgment text (卦辞).
    pub judgment: &'static str,
}

const fn hex(
    upper: u8,
    lower: u8,
    name: &'static str,
    symbol: &'static str,
    nature: &'static str,
    description: &'static str,
    judgment: &'static str,
) -> Hexagram {
    Hexagram {
        upper,
        lower,
        name,
        symbol,
        nature,
        description,
        judgment,
    }
}

/// All 64 hexagrams in King Wen order.
static HEXAGRAMS: [Hexagram; 64] = [
    hex(1, 1, "乾", "䷀", "乾为天", "刚健中正，自强不息。", "元，亨，利，贞。"),
    hex(8, 8, "坤", "䷁", "坤为地", "厚德载物，柔顺伸展。", "元，亨，利牝马之贞。"),
    hex(6, 4, "屯", "䷂", "水雷屯", "万物始生，艰难险阻。", "元，亨，利，贞。勿用有攸往，利建侯。"),
    hex(7, 6, "蒙", "䷃", "山水蒙", "启蒙发智，去愚存明。", "亨。匪我求童蒙，童蒙求我。初筮告，再三渎，渎则不告。利贞。"),
    hex(6, 1, "需", "䷄", "水天需", "守正待机，饮食宴乐。", "有孚，光亨，贞吉。利涉大川。"),
    hex(1, 6, "讼", "䷅", "天水讼", "慎争戒讼，止讼为贵。", "有孚，窒。惕中吉。终凶。利见大人，不利涉大川。"),
    hex(8, 6, "师", "䷆", "地水师", "兴师动众，统领大众。", "贞，丈人，吉无咎。"),
    hex(6, 8, "比", "䷇", "水地比", "亲密比辅，和睦相处。", "吉。原筮元永贞，无咎。不宁方来，后夫凶。"),
    hex(5, 1, "小畜", "䷈", "风天小畜", "积蓄力量，蓄养待进。", "亨。密云不雨，自我西郊。"),
    hex(1, 2, "履", "䷉", "天泽履", "脚踏实地，如履薄冰。", "履虎尾，不咥人，亨。"),
    hex(8, 1, "泰", "䷊", "地天泰", "阴阳交泰，通达吉祥。", "小往大来，吉亨。"),
    hex(1, 8, "否", "䷋", "天地否", "阴阳不交，闭塞不通。", "否之匪人，不利君子贞，大往小来。"),
    hex(1, 3, "同人", "䷌", "天火同人", "上下和同，与人同心。", "同人于野，亨。利涉大川，利君子贞。"),
    hex(3, 1, "大有", "䷍", "火天大有", "顺天依时，大有所成。", "元亨。"),
    hex(8, 7, "谦", "䷎", "地山谦", "内高外低，谦虚受益。", "亨，君子有终。"),
    hex(4, 8, "豫", "䷏", "雷地豫", "顺时依势，安乐喜悦。", "利建侯行师。"),
    hex(2, 4, "随", "䷐", "泽雷随", "顺从随和，随机应变。", "元亨利贞，无咎。"),
    hex(7, 5, "蛊", "䷑", "山风蛊", "整饬内部，除弊治乱。", "元亨，利涉大川。先甲三日，后甲三日。"),
    hex(8, 2, "临", "䷒", "地泽临", "以上临下，亲临统御。", "元，亨，利，贞。至于八月有凶。"),
    hex(5, 8, "观", "䷓", "风地观", "瞻仰观察，诚信威严。", "盥而不荐，有孚颙若。"),
    hex(3, 4, "噬嗑", "䷔", "火雷噬嗑", "咬合亨通，刑罚公正。", "亨。利用狱。"),
    hex(7, 3, "贲", "䷕", "山火贲", "文饰美化，光明通达。", "亨。小利有攸往。"),
    hex(7, 8, "剥", "䷖", "山地剥", "剥落衰退，顺势而止。", "不利有攸往。"),
    hex(8, 4, "复", "䷗", "地雷复", "否极泰来，万物更新。", "亨。出入无疾，朋来无咎。反复其道，七日来复，利有攸往。"),
    hex(1, 4, "无妄", "䷘", "天雷无妄", "真实无妄，顺其自然。", "元，亨，利，贞。其匪正有眚，不利有攸往。"),
    hex(7, 1, "大畜", "䷙", "山天大畜", "既富且贵，积蓄大成。", "利贞，不家食吉，利涉大川。"),
    hex(7, 4, "颐", "䷚", "山雷颐", "颐养天年，饮食起居。", "贞吉。观颐，自求口实。"),
    hex(2, 5, "大过", "䷛", "泽风大过", "非常时期，大有过越。", "栋桡，利有攸往，亨。"),
    hex(6, 6, "坎", "䷜", "坎为水", "重重险陷，流转不穷。", "习坎，有孚，维心亨，行有尚。"),
    hex(3, 3, "离", "䷝", "离为火", "光明依附，柔顺中正。", "利贞，亨。畜牝牛，吉。"),
    hex(2, 7, "咸", "䷞", "泽山咸", "感应沟通，两情相悦。", "亨，利贞，取女吉。"),
    hex(4, 5, "恒", "䷟", "雷风恒", "恒久不止，持之以恒。", "亨，无咎，利贞，利有攸往。"),
    hex(1, 7, "遯", "䷠", "天山遯", "退避隐藏，明哲保身。", "亨，小利贞。"),
    hex(4, 1, "大壮", "䷡", "雷天大壮", "壮大强盛，止其所当止。", "利贞。"),
    hex(3, 8, "晋", "䷢", "火地晋", "旭日东升，进取向前。", "康侯用锡马蕃庶，昼日三接。"),
    hex(8, 3, "明夷", "䷣", "地火明夷", "晦暗不明，韬光养晦。", "利艰贞。"),
    hex(5, 3, "家人", "䷤", "风火家人", "家庭和睦，各正其位。", "利女贞。"),
    hex(3, 2, "睽", "䷥", "火泽睽", "背离乖异，求同存异。", "小事吉。"),
    hex(6, 7, "蹇", "䷦", "水山蹇", "艰难险阻，止于当止。", "利西南，不利东北；利见大人，贞吉。"),
    hex(4, 6, "解", "䷧", "雷水解", "缓解困难，解除险阻。", "利西南，无所往，其来复吉。有攸往，夙吉。"),
    hex(7, 2, "损", "䷨", "山泽损", "减损私欲，惩忿窒欲。", "有孚，元吉，无咎，可贞，利有攸往。曷之用，二簋可用享。"),
    hex(5, 4, "益", "䷩", "风雷益", "损上益下，增益获利。", "利有攸往，利涉大川。"),
    hex(2, 1, "夬", "䷪", "泽天夬", "决断决绝，刚决柔也。", "扬于王庭，孚号，有厉，告自邑，不利即戎，利有攸往。"),
    hex(1, 5, "姤", "䷫", "天风姤", "天下有风，阴阳相遇。", "女壮，勿用取女。"),
    hex(2, 8, "萃", "䷬", "泽地萃", "聚集汇合，顺天应人。", "亨。王假有庙，利见大人，亨，利贞。用大牲吉，利有攸往。"),
    hex(8, 5, "升", "䷭", "地风升", "柔顺上升，积小成大。", "元亨，用见大人，勿恤，南征吉。"),
    hex(2, 6, "困", "䷮", "泽水困", "穷困之时，致命遂志。", "亨，贞，大人吉，无咎，有言不信。"),
    hex(6, 5, "井", "䷯", "水风井", "养民无穷，井德互通。", "改邑不改井，无丧无得，往来井井。汔至，亦未繘井，羸其瓶，凶。"),
    hex(2, 3, "革", "䷰", "泽火革", "变革改旧，顺天应人。", "已日乃孚，元亨利贞，悔亡。"),
    hex(3, 5, "鼎", "䷱", "火风鼎", "稳重图变，去故取新。", "元吉，亨。"),
    hex(4, 4, "震", "䷲", "震为雷", "临危不乱，从容不迫。", "亨。震来虩虩，笑言哑哑。震惊百里，不丧匕鬯。"),
    hex(7, 7, "艮", "䷳", "艮为山", "动静适时，安分守己。", "艮其背，不获其身，行其庭，不见其人，无咎。"),
    hex(5, 7, "渐", "䷴", "风山渐", "循序渐进，稳步高升。", "女归吉，利贞。"),
    hex(4, 2, "归妹", "䷵", "雷泽归妹", "感情冲动，未必长久。", "征凶，无攸利。"),
    hex(4, 3, "丰", "䷶", "雷火丰", "丰大盛满，日中则昃。", "亨，王假之，勿忧，宜日中。"),
    hex(3, 7, "旅", "䷷", "火山旅", "羁旅在外，不安定之象。", "小亨，旅贞吉。"),
    hex(5, 5, "巽", "䷸", "巽为风", "谦逊受益，柔顺推广。", "小亨，利有攸往，利见大人。"),
    hex(2, 2, "兑", "䷹", "兑为泽", "喜悦沟通，外柔内刚。", "亨，利贞。"),
    hex(5, 6, "涣", "䷺", "风水涣", "离散化解，顺势而行。", "亨。王假有庙，利涉大川，利贞。"),
    hex(6, 2, "节", "䷻", "水泽节", "节制有度，苦乐均平。", "亨。苦节，不可贞。"),
    hex(5, 2, "中孚", "䷼", "风泽中孚", "诚信立身，虚心纳谏。", "豚鱼吉，利涉大川，利贞。"),
    hex(4, 7, "小过", "䷽", "雷山小过", "小有过越，因应变通。", "亨，利贞。可小事，不可大事。飞鸟遗之音，不宜上，宜下，大吉。"),
    hex(6, 3, "既济", "䷾", "水火既济", "初吉终乱，盛极必衰。", "亨，小利贞，初吉终乱。"),
    hex(3, 6, "未济", "䷿", "火水未济", "谋事未成，充满希望。", "亨，小狐讫济，濡其尾，无攸利。"),
];

/// `GRID[upper - 1][lower - 1]` holds the King Wen position of that pair.
static GRID: LazyLock<[[Option<usize>; 8]; 8]> = LazyLock::new(|| {
    let mut grid = [[None; 8]; 8];
    for (pos, h) in HEXAGRAMS.iter().enumerate() {
        grid[usize::from(h.upper - 1)][usize::from(h.lower - 1)] = Some(pos);
    }
    grid
});

impl Hexagram {
    /// Sentinel returned when a key does not resolve to a table entry.
    pub const UNKNOWN: Hexagram = hex(0, 0, "未知", "?", "未知", "卦象未能确定。", "");

    /// Whether this is the [`Hexagram::UNKNOWN`] sentinel.
    pub fn is_unknown(&self) -> bool {
        self.upper == 0 || self.lower == 0
    }

    /// 1-based position in the King Wen sequence, or `None` for the sentinel.
    pub fn king_wen_number(&self) -> Option<usize> {
        find_position(self.upper, self.lower).map(|pos| pos + 1)
    }

    /// The upper trigram, or `None` for the sentinel.
    pub fn upper_trigram(&self) -> Option<Trigram> {
        Trigram::from_index(self.upper).ok()
    }

    /// The lower trigram, or `None` for the sentinel.
    pub fn lower_trigram(&self) -> Option<Trigram> {
        Trigram::from_index(self.lower).ok()
    }

    /// The six lines bottom to top (lower trigram first).
    pub fn lines(&self) -> Option<[Line; 6]> {
        let lower = self.lower_trigram()?.lines();
        let upper = self.upper_trigram()?.lines();
        Some([lower[0], lower[1], lower[2], upper[0], upper[1], upper[2]])
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol, self.name, self.nature)
    }
}

pub(crate) fn normalize(index: u8) -> u8 {
    if index == 0 { 8 } else { index }
}

fn find_position(upper: u8, lower: u8) -> Option<usize> {
    if !(1..=8).contains(&upper) || !(1..=8).contains(&lower) {
        return None;
    }
    GRID[usize::from(upper - 1)][usize::from(lower - 1)]
}

/// Strict lookup by trigram pair, `None` when the key is out of range.
pub fn find_hexagram(upper: u8, lower: u8) -> Option<&'static Hexagram> {
    find_position(upper, lower).map(|pos| &HEXAGRAMS[pos])
}

/// Look up a hexagram by `(upper, lower)` trigram indices.
///
/// A literal 0 is read as 8 (坤). Keys outside the table yield
/// [`Hexagram::UNKNOWN`] and are logged as defects.
pub fn hexagram(upper: u8, lower: u8) -> &'static Hexagram {
    let (upper, lower) = (normalize(upper), normalize(lower));
    match find_hexagram(upper, lower) {
        Some(h) => h,
        None => {
            tracing::error!(upper, lower, "hexagram key outside the table");
            &Hexagram::UNKNOWN
        }
    }
}

/// All 64 hexagrams in King Wen order.
pub fn all_hexagrams() -> &'static [Hexagram] {
    &HEXAGRAMS
}
