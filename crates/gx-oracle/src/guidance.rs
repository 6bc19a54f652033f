//! Mantras and warnings attached to a reading.

use gx_almanac::AlmanacInfo;
use serde::Serialize;

use crate::context::QuestionType;
use crate::fortune::Fortune;

/// Shown under every reading.
pub const DISCLAIMER: &str = "占卜结果仅供参考，命运掌控在自己手中。";

/// Shown when the day officer is 破 or 危.
pub const DANGER_WARNING: &str = "今日值日凶险，诸事小心";

/// A protective mantra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mantra {
    /// 灵宝天尊安慰身形, for illness.
    Health,
    /// 太上台星应变无停, for unrest of mind.
    Mental,
}

impl Mantra {
    /// The mantra for a question category, if it has one.
    pub fn for_question(question_type: QuestionType) -> Option<Self> {
        match question_type {
            QuestionType::Health => Some(Self::Health),
            QuestionType::Mental => Some(Self::Mental),
            _ => None,
        }
    }

    /// Full text.
    pub fn text(self) -> &'static str {
        match self {
            Self::Health => {
                "灵宝天尊，安慰身形。弟子魂魄，五脏玄冥。青龙白虎，队仗纷纭。朱雀玄武，侍卫身形。"
            }
            Self::Mental => {
                "太上台星，应变无停。驱邪缚魅，保命护身。智慧明净，心神安宁。三魂永久，魄无丧倾。"
            }
        }
    }

    /// Couplets, split on the full stop.
    pub fn lines(self) -> impl Iterator<Item = &'static str> {
        self.text().split('。').filter(|l| !l.is_empty())
    }
}

/// Extra text rendered beneath a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    /// Heading above the mantra.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    /// Mantra to recite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mantra: Option<Mantra>,
    /// Set on 破 and 危 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    /// Always [`DISCLAIMER`].
    pub disclaimer: &'static str,
}

impl Guidance {
    /// Pick the guidance for a reading.
    ///
    /// A mantra is offered only when the reading is not good and the
    /// question is about health or state of mind.
    pub fn select(fortune: Fortune, question_type: QuestionType, almanac: &AlmanacInfo) -> Self {
        let mantra = match fortune {
            Fortune::Good => None,
            Fortune::Bad | Fortune::Neutral => Mantra::for_question(question_type),
        };
        let heading = mantra.map(|_| match fortune {
            Fortune::Bad => "静心化解",
            _ => "祈福心咒",
        });
        let warning = almanac.is_dangerous_day().then_some(DANGER_WARNING);
        Self {
            heading,
            mantra,
            warning,
            disclaimer: DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn almanac(zhi_xing: &str) -> AlmanacInfo {
        AlmanacInfo {
            lunar_str: "二〇二三年冬月二十".into(),
            zhi_xing: zhi_xing.into(),
            chong: "(戊午)马".into(),
            sha: "南".into(),
            yi: vec![],
            ji: vec![],
            shen_sha: vec![],
            lunar_year: 2023,
            lunar_month: 11,
            lunar_day: 20,
            leap_month: false,
            day_gan_zhi: "甲子".into(),
            time_branch: "巳".into(),
        }
    }

    #[test]
    fn good_readings_get_no_mantra() {
        let g = Guidance::select(Fortune::Good, QuestionType::Health, &almanac("建"));
        assert_eq!(g.mantra, None);
        assert_eq!(g.heading, None);
        assert_eq!(g.disclaimer, DISCLAIMER);
    }

    #[test]
    fn bad_health_reading() {
        let g = Guidance::select(Fortune::Bad, QuestionType::Health, &almanac("建"));
        assert_eq!(g.mantra, Some(Mantra::Health));
        assert_eq!(g.heading, Some("静心化解"));
    }

    #[test]
    fn neutral_mental_reading() {
        let g = Guidance::select(Fortune::Neutral, QuestionType::Mental, &almanac("建"));
        assert_eq!(g.mantra, Some(Mantra::Mental));
        assert_eq!(g.heading, Some("祈福心咒"));
    }

    #[test]
    fn other_categories_never_get_a_mantra() {
        for qt in [QuestionType::General, QuestionType::Career, QuestionType::Love] {
            assert_eq!(Guidance::select(Fortune::Bad, qt, &almanac("建")).mantra, None);
        }
    }

    #[test]
    fn danger_days_warn() {
        assert_eq!(
            Guidance::select(Fortune::Good, QuestionType::General, &almanac("破")).warning,
            Some(DANGER_WARNING)
        );
        assert_eq!(
            Guidance::select(Fortune::Good, QuestionType::General, &almanac("成")).warning,
            None
        );
    }

    #[test]
    fn mantras_are_four_couplets() {
        for m in [Mantra::Health, Mantra::Mental] {
            assert_eq!(m.lines().count(), 4);
            assert_eq!(m.text().split(['，', '。']).filter(|s| !s.is_empty()).count(), 8);
        }
    }
}
