//! Day spirits (神煞) and the activity lists they produce.
//!
//! A day's 宜 and 忌 start from its officer and are then adjusted by the
//! spirits in attendance, each of which is fixed by the solar month branch
//! and the day's sexagenary term. Hostile spirits add to 忌 and strike the
//! same items from 宜. Kind spirits add to 宜 anything not forbidden.
//! A 破 day keeps its 诸事不宜 untouched.

use serde::{Deserialize, Serialize};

use crate::ganzhi::GanZhi;
use crate::officer::Officer;

/// A spirit that can attend a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayGod {
    /// 天德.
    TianDe,
    /// 月德.
    YueDe,
    /// 天赦.
    TianShe,
    /// 天恩.
    TianEn,
    /// 母仓.
    MuCang,
    /// 月厌.
    YueYan,
    /// 受死.
    ShouSi,
    /// 四废.
    SiFei,
    /// 归忌.
    GuiJi,
}

/// What 天德 looks for in each month, indexed from the 子 month.
#[derive(Clone, Copy)]
enum Mark {
    Stem(u8),
    Branch(u8),
}

static TIAN_DE: [Mark; 12] = [
    Mark::Branch(5),
    Mark::Stem(6),
    Mark::Stem(3),
    Mark::Branch(8),
    Mark::Stem(8),
    Mark::Stem(7),
    Mark::Branch(11),
    Mark::Stem(0),
    Mark::Stem(9),
    Mark::Branch(2),
    Mark::Stem(2),
    Mark::Stem(1),
];

/// 月德 stem by three-harmony group (month branch mod 4).
static YUE_DE: [u8; 4] = [8, 6, 2, 0];

/// 天赦 (stem, branch) by season, spring first.
static TIAN_SHE: [(u8, u8); 4] = [(4, 2), (0, 6), (4, 8), (0, 0)];

/// 母仓 branches by season.
static MU_CANG: [&[u8]; 4] = [&[11, 0], &[2, 3], &[4, 10, 1, 7], &[8, 9]];

/// 受死 branch, indexed from the 子 month.
static SHOU_SI: [u8; 12] = [3, 9, 10, 4, 11, 5, 0, 6, 1, 7, 2, 8];

/// 四废 (stem, branch) pairs by season.
static SI_FEI: [[(u8, u8); 2]; 4] = [
    [(6, 8), (7, 9)],
    [(8, 0), (9, 11)],
    [(0, 2), (1, 3)],
    [(2, 6), (3, 5)],
];

/// 归忌 branch by month branch mod 3.
static GUI_JI: [u8; 3] = [2, 0, 1];

/// Season of a month branch: 0 spring (寅卯辰) through 3 winter (亥子丑).
fn season(month_branch: u8) -> usize {
    usize::from((month_branch % 12 + 10) % 12 / 3)
}

fn is_tian_en(day: GanZhi) -> bool {
    matches!(day.index(), 0..=4 | 15..=19 | 45..=49)
}

impl DayGod {
    /// All spirits, kind ones first.
    pub fn all() -> &'static [Self] {
        &[
            Self::TianDe,
            Self::YueDe,
            Self::TianShe,
            Self::TianEn,
            Self::MuCang,
            Self::YueYan,
            Self::ShouSi,
            Self::SiFei,
            Self::GuiJi,
        ]
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TianDe => "天德",
            Self::YueDe => "月德",
            Self::TianShe => "天赦",
            Self::TianEn => "天恩",
            Self::MuCang => "母仓",
            Self::YueYan => "月厌",
            Self::ShouSi => "受死",
            Self::SiFei => "四废",
            Self::GuiJi => "归忌",
        }
    }

    /// Whether the spirit is kind (吉神) rather than hostile (凶煞).
    pub fn is_kind(self) -> bool {
        matches!(
            self,
            Self::TianDe | Self::YueDe | Self::TianShe | Self::TianEn | Self::MuCang
        )
    }

    /// Activities the spirit favours (kind) or forbids (hostile).
    pub fn activities(self) -> &'static [&'static str] {
        match self {
            Self::TianDe => &["祭祀", "祈福", "上表章", "嫁娶", "修造"],
            Self::YueDe => &["祭祀", "祈福", "宴会", "修造", "动土"],
            Self::TianShe => &["祭祀", "祈福", "解除", "施恩"],
            Self::TianEn => &["施恩", "恤孤", "布政"],
            Self::MuCang => &["纳畜", "牧养", "栽种"],
            Self::YueYan => &["嫁娶", "出行", "移徙", "远回"],
            Self::ShouSi => &["嫁娶", "求医", "出行", "上任"],
            Self::SiFei => &["开市", "嫁娶", "修造", "动土", "出军"],
            Self::GuiJi => &["归家", "移徙", "远回", "嫁娶"],
        }
    }

    /// Whether the spirit attends `day` in the solar month `month_branch`.
    pub fn attends(self, month_branch: u8, day: GanZhi) -> bool {
        let m = month_branch % 12;
        let (stem, branch) = (day.stem(), day.branch());
        match self {
            Self::TianDe => match TIAN_DE[usize::from(m)] {
                Mark::Stem(s) => stem == s,
                Mark::Branch(b) => branch == b,
            },
            Self::YueDe => stem == YUE_DE[usize::from(m % 4)],
            Self::TianShe => (stem, branch) == TIAN_SHE[season(m)],
            Self::TianEn => is_tian_en(day),
            Self::MuCang => MU_CANG[season(m)].contains(&branch),
            Self::YueYan => branch == (12 - m) % 12,
            Self::ShouSi => branch == SHOU_SI[usize::from(m)],
            Self::SiFei => SI_FEI[season(m)].contains(&(stem, branch)),
            Self::GuiJi => branch == GUI_JI[usize::from(m % 3)],
        }
    }

    /// The spirits attending a day, in [`all`](Self::all) order.
    pub fn on(month_branch: u8, day: GanZhi) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|g| g.attends(month_branch, day))
            .collect()
    }
}

impl std::fmt::Display for DayGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The 宜 and 忌 lists of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivities {
    /// Favoured activities.
    pub yi: Vec<&'static str>,
    /// Activities to avoid.
    pub ji: Vec<&'static str>,
}

impl DayActivities {
    /// Combine the officer rows with the attending spirits.
    pub fn resolve(officer: Officer, gods: &[DayGod]) -> Self {
        let mut yi = officer.yi().to_vec();
        let mut ji = officer.ji().to_vec();
        if officer == Officer::Po {
            return Self { yi, ji };
        }

        for god in gods.iter().filter(|g| !g.is_kind()) {
            for item in god.activities() {
                if !ji.contains(item) {
                    ji.push(*item);
                }
            }
        }
        yi.retain(|item| !ji.contains(item));

        for god in gods.iter().filter(|g| g.is_kind()) {
            for item in god.activities() {
                if !yi.contains(item) && !ji.contains(item) {
                    yi.push(*item);
                }
            }
        }

        Self { yi, ji }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gz(name: &str) -> GanZhi {
        (0..60)
            .map(GanZhi::from_index)
            .find(|g| g.to_string() == name)
            .unwrap()
    }

    fn names(gods: &[DayGod]) -> Vec<&'static str> {
        gods.iter().map(|g| g.name()).collect()
    }

    #[test]
    fn seasons() {
        let got: Vec<_> = (0..12).map(season).collect();
        assert_eq!(got, [3, 3, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn jiazi_in_the_zi_month() {
        assert_eq!(names(&DayGod::on(0, gz("甲子"))), ["天赦", "天恩", "月厌"]);
    }

    #[test]
    fn renzi_in_the_zi_month() {
        assert_eq!(names(&DayGod::on(0, gz("壬子"))), ["月德", "天恩", "月厌"]);
    }

    #[test]
    fn tian_de_by_stem_and_by_branch() {
        // 寅 month looks for 丁, 卯 month for the 申 branch.
        assert!(DayGod::TianDe.attends(2, gz("丁卯")));
        assert!(!DayGod::TianDe.attends(2, gz("丙寅")));
        assert!(DayGod::TianDe.attends(3, gz("壬申")));
        assert!(DayGod::TianDe.attends(3, gz("甲申")));
    }

    #[test]
    fn tian_she_once_per_season() {
        assert!(DayGod::TianShe.attends(2, gz("戊寅")));
        assert!(DayGod::TianShe.attends(6, gz("甲午")));
        assert!(DayGod::TianShe.attends(9, gz("戊申")));
        assert!(DayGod::TianShe.attends(11, gz("甲子")));
        assert!(!DayGod::TianShe.attends(2, gz("甲子")));
    }

    #[test]
    fn hostile_spirits() {
        assert!(DayGod::YueYan.attends(2, gz("甲戌")));
        assert!(DayGod::ShouSi.attends(2, gz("甲戌")));
        assert!(DayGod::SiFei.attends(3, gz("庚申")));
        assert!(DayGod::GuiJi.attends(2, gz("乙丑")));
        assert!(DayGod::GuiJi.attends(0, gz("丙寅")));
        assert!(DayGod::GuiJi.attends(1, gz("丙子")));
    }

    #[test]
    fn kindness_split() {
        let kind: Vec<_> = DayGod::all().iter().filter(|g| g.is_kind()).collect();
        assert_eq!(kind.len(), 5);
    }

    #[test]
    fn same_officer_different_days() {
        let jiazi = DayActivities::resolve(Officer::Jian, &DayGod::on(0, gz("甲子")));
        let bingzi = DayActivities::resolve(Officer::Jian, &DayGod::on(0, gz("丙子")));
        assert_ne!(jiazi, bingzi);
        assert!(jiazi.yi.contains(&"祭祀"));
        assert!(!bingzi.yi.contains(&"祭祀"));
    }

    #[test]
    fn hostile_items_leave_yi() {
        // 月厌 forbids 出行, which 建 would otherwise favour.
        let acts = DayActivities::resolve(Officer::Jian, &[DayGod::YueYan]);
        assert!(!acts.yi.contains(&"出行"));
        assert!(acts.ji.contains(&"出行"));
    }

    #[test]
    fn kind_items_never_override_ji() {
        // 月德 favours 动土 but 建 forbids it.
        let acts = DayActivities::resolve(Officer::Jian, &[DayGod::YueDe]);
        assert!(acts.ji.contains(&"动土"));
        assert!(!acts.yi.contains(&"动土"));
        assert!(acts.yi.contains(&"宴会"));
    }

    #[test]
    fn po_days_stay_closed() {
        let acts = DayActivities::resolve(Officer::Po, &[DayGod::TianDe, DayGod::ShouSi]);
        assert_eq!(acts.ji, ["诸事不宜"]);
        assert_eq!(acts.yi, Officer::Po.yi());
    }

    #[test]
    fn no_spirits_means_officer_rows() {
        for o in Officer::all() {
            let acts = DayActivities::resolve(*o, &[]);
            assert_eq!(acts.yi, o.yi());
            assert_eq!(acts.ji, o.ji());
        }
    }
}
