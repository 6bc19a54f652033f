//! The twelve day officers (建除十二值星).
//!
//! The officer of a day is fixed by how far the day's branch has moved past
//! the branch of its solar month: on the month's own branch the day is 建,
//! one step on it is 除, and so on.

use serde::{Deserialize, Serialize};

/// A day officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Officer {
    /// 建, establish.
    Jian,
    /// 除, remove.
    Chu,
    /// 满, full.
    Man,
    /// 平, balance.
    Ping,
    /// 定, settle.
    Ding,
    /// 执, hold.
    Zhi,
    /// 破, break.
    Po,
    /// 危, danger.
    Wei,
    /// 成, success.
    Cheng,
    /// 收, receive.
    Shou,
    /// 开, open.
    Kai,
    /// 闭, close.
    Bi,
}

struct Activities {
    yi: &'static [&'static str],
    ji: &'static [&'static str],
}

static ACTIVITIES: [Activities; 12] = [
    Activities {
        yi: &["出行", "上任", "会友", "上书", "见工"],
        ji: &["动土", "开仓", "掘井", "乘船"],
    },
    Activities {
        yi: &["除服", "疗病", "出行", "拆卸", "入宅"],
        ji: &["求官", "上任", "开张", "搬家", "探病"],
    },
    Activities {
        yi: &["祈福", "祭祀", "结亲", "开市", "交易"],
        ji: &["服药", "求医", "栽种", "动土", "迁移"],
    },
    Activities {
        yi: &["祭祀", "修填", "涂泥", "余事勿取"],
        ji: &["移徙", "入宅", "嫁娶", "开市", "安葬"],
    },
    Activities {
        yi: &["交易", "立券", "会友", "签约", "纳畜"],
        ji: &["种植", "置业", "诉讼", "出行", "求医"],
    },
    Activities {
        yi: &["造屋", "装修", "嫁娶", "收购", "立契"],
        ji: &["开市", "求财", "出行", "搬迁"],
    },
    Activities {
        yi: &["治病", "破屋", "坏垣", "余事勿取"],
        ji: &["诸事不宜"],
    },
    Activities {
        yi: &["祭祀", "祈福", "安床", "拆卸", "破土"],
        ji: &["登山", "乘船", "出行", "嫁娶", "远行"],
    },
    Activities {
        yi: &["结婚", "开市", "修造", "动土", "安床", "交易", "求财", "出行", "立契"],
        ji: &["诉讼"],
    },
    Activities {
        yi: &["祈福", "求嗣", "上任", "修造", "纳财", "移徙", "嫁娶"],
        ji: &["放债", "破土", "安葬"],
    },
    Activities {
        yi: &["祭祀", "祈福", "入学", "上任", "修造", "开市", "交易", "出行"],
        ji: &["放债", "诉讼", "安葬"],
    },
    Activities {
        yi: &["祭祀", "祈福", "筑堤", "埋池", "填补", "修屋"],
        ji: &["开市", "出行", "求医", "手术", "嫁娶"],
    },
];

impl Officer {
    /// All officers in cycle order, 建 first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Jian,
            Self::Chu,
            Self::Man,
            Self::Ping,
            Self::Ding,
            Self::Zhi,
            Self::Po,
            Self::Wei,
            Self::Cheng,
            Self::Shou,
            Self::Kai,
            Self::Bi,
        ]
    }

    /// The officer for a day branch within a month branch (both 0-11).
    pub fn from_branches(day_branch: u8, month_branch: u8) -> Self {
        let step = (12 + day_branch % 12 - month_branch % 12) % 12;
        Self::all()[usize::from(step)]
    }

    /// Parse from the single-character name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.name() == s.trim())
    }

    fn index(self) -> usize {
        match self {
            Self::Jian => 0,
            Self::Chu => 1,
            Self::Man => 2,
            Self::Ping => 3,
            Self::Ding => 4,
            Self::Zhi => 5,
            Self::Po => 6,
            Self::Wei => 7,
            Self::Cheng => 8,
            Self::Shou => 9,
            Self::Kai => 10,
            Self::Bi => 11,
        }
    }

    /// Single-character name.
    pub fn name(self) -> &'static str {
        ["建", "除", "满", "平", "定", "执", "破", "危", "成", "收", "开", "闭"][self.index()]
    }

    /// Base activities favoured on this officer's days (宜), before the
    /// day spirits adjust them.
    pub fn yi(self) -> &'static [&'static str] {
        ACTIVITIES[self.index()].yi
    }

    /// Base activities to avoid on this officer's days (忌).
    pub fn ji(self) -> &'static [&'static str] {
        ACTIVITIES[self.index()].ji
    }

    /// 破 and 危 days call for extra care.
    pub fn is_dangerous(self) -> bool {
        matches!(self, Self::Po | Self::Wei)
    }
}

impl std::fmt::Display for Officer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_branch_is_jian() {
        for b in 0..12 {
            assert_eq!(Officer::from_branches(b, b), Officer::Jian);
        }
    }

    #[test]
    fn cycle_wraps() {
        // 寅 month: 寅 day 建, 申 day 破, 丑 day 闭.
        assert_eq!(Officer::from_branches(2, 2), Officer::Jian);
        assert_eq!(Officer::from_branches(8, 2), Officer::Po);
        assert_eq!(Officer::from_branches(1, 2), Officer::Bi);
    }

    #[test]
    fn exactly_two_dangerous() {
        let dangerous: Vec<_> = Officer::all()
            .iter()
            .filter(|o| o.is_dangerous())
            .map(|o| o.name())
            .collect();
        assert_eq!(dangerous, ["破", "危"]);
    }

    #[test]
    fn every_officer_has_lists() {
        for o in Officer::all() {
            assert!(!o.yi().is_empty(), "{o}");
            assert!(!o.ji().is_empty(), "{o}");
            assert_eq!(Officer::parse(o.name()), Some(*o));
        }
        assert_eq!(Officer::parse("吉"), None);
    }
}
