//! Xiao Liu Ren (小六壬): the six-palace finger count.
//!
//! Counting starts at 大安 on the lunar month, continues through the day and
//! the hour, and here also steps once per character of the object name.

use serde::Serialize;

use crate::fortune::Fortune;

/// One of the six palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palace {
    /// Position in the count, 1-5, with 0 for 空亡.
    pub index: u8,
    /// Palace title.
    pub title: &'static str,
    /// Traditional verse.
    pub description: &'static str,
    /// Element, colour and direction line.
    pub poem: &'static str,
    /// Tone of the palace.
    #[serde(rename = "type")]
    pub fortune: Fortune,
    /// Plain-language advice.
    pub suggestion: &'static str,
}

/// Palaces indexed by `count mod 6`.
static PALACES: [Palace; 6] = [
    Palace {
        index: 0,
        title: "空亡 (Kong Wang)",
        description: "空亡事不长，阴人小乖张。求财无利益，行人有灾殃。",
        poem: "音信稀时，五行属土，颜色勾陈，方位中央。",
        fortune: Fortune::Bad,
        suggestion: "时机似乎尚未成熟，当下的困惑是黎明前的等待。与其强求结果，不如养精蓄锐，静待花开。",
    },
    Palace {
        index: 1,
        title: "大安 (Da An)",
        description: "大安事事昌，求财在坤方。失物去不远，宅舍保安康。",
        poem: "身不动时，五行属木，颜色青龙，方位正东。",
        fortune: Fortune::Good,
        suggestion: "万事大吉，心想事成。目前状态稳定，适合静守或按计划行事。",
    },
    Palace {
        index: 2,
        title: "留连 (Liu Lian)",
        description: "留连事难成，求谋日未明。官事只宜缓，去者未回程。",
        poem: "卒未归时，五行属水，颜色玄武，方位北方。",
        fortune: Fortune::Neutral,
        suggestion: "事情可能会有拖延，需要耐心等待，不宜急进。",
    },
    Palace {
        index: 3,
        title: "速喜 (Su Xi)",
        description: "速喜喜来临，求财向南行。失物申未午，逢人路上寻。",
        poem: "人即至时，五行属火，颜色朱雀，方位南方。",
        fortune: Fortune::Good,
        suggestion: "好消息马上就会到来，事情进展迅速，会有惊喜。",
    },
    Palace {
        index: 4,
        title: "赤口 (Chi Kou)",
        description: "赤口主口舌，官非切要防。失物速速讨，行人有惊慌。",
        poem: "官事凶时，五行属金，颜色白虎，方位西方。",
        fortune: Fortune::Bad,
        suggestion: "近期气场稍显驳杂，可能会遇到一些意见分歧。请保持平和的心态，以柔克刚，退一步海阔天空，一切自会化解。",
    },
    Palace {
        index: 5,
        title: "小吉 (Xiao Ji)",
        description: "小吉最吉昌，路上好商量。阴人来报喜，失物在坤方。",
        poem: "人来喜时，五行属木，颜色六合，方位东方。",
        fortune: Fortune::Good,
        suggestion: "会有小确幸，事情发展顺利，有贵人相助。",
    },
];

impl Palace {
    /// All palaces in counting order, 大安 first.
    pub fn all() -> impl Iterator<Item = &'static Palace> {
        PALACES[1..].iter().chain(PALACES[..1].iter())
    }

    /// Chinese name without the romanisation, e.g. 大安.
    pub fn name(&self) -> &'static str {
        self.title.split(' ').next().unwrap_or(self.title)
    }

    /// Lines of the poem, split on the full-width comma.
    pub fn poem_lines(&self) -> impl Iterator<Item = &'static str> {
        self.poem.split('，').filter(|l| !l.is_empty())
    }
}

/// Cast the palace for a lunar month and day, an hour number (子 = 1) and
/// an object name.
///
/// A leap month counts as its ordinary number.
pub fn cast(lunar_month: u8, lunar_day: u8, hour: u8, object_name: &str) -> &'static Palace {
    let entropy = object_name.trim().chars().count();
    let count = usize::from(lunar_month) + usize::from(lunar_day) + usize::from(hour) + entropy;
    let palace = &PALACES[count.saturating_sub(2) % 6];
    tracing::debug!(lunar_month, lunar_day, hour, entropy, palace = palace.name(), "palace cast");
    palace
}
