//! The divination engine.
//!
//! The cast uses three numbers: the upper trigram from the object, the
//! lower trigram from the hour, and the moving line from their sum. Only one
//! trigram changes, so the change is modelled as a tagged [`LineChange`].

use gx_almanac::time_branch_index;
use gx_core::{Element, Hexagram, LinePosition, Trigram, hexagram};
use serde::Serialize;

use crate::classifier::classify;
use crate::context::DivinationContext;
use crate::fortune::Fortune;
use crate::narrative::{Analysis, Inputs, assemble};

/// The moving line, 1 (bottom) to 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovingLine(u8);

impl MovingLine {
    /// Reduce a sum mod 6, with 0 meaning the top line.
    pub fn from_sum(sum: u32) -> Self {
        match sum % 6 {
            0 => Self(6),
            n => Self(n as u8),
        }
    }

    /// Line number in `1..=6`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Which trigram this line belongs to, and where inside it.
    pub fn change(self) -> LineChange {
        if self.0 <= 3 {
            LineChange::ChangesLower(line_position(self.0))
        } else {
            LineChange::ChangesUpper(line_position(self.0 - 3))
        }
    }
}

fn line_position(n: u8) -> LinePosition {
    match n {
        1 => LinePosition::Bottom,
        2 => LinePosition::Middle,
        _ => LinePosition::Top,
    }
}

/// The single trigram flip a moving line causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "trigram", content = "line")]
pub enum LineChange {
    /// Moving line 1-3 flips a line of the lower trigram.
    #[serde(rename = "lower")]
    ChangesLower(LinePosition),
    /// Moving line 4-6 flips a line of the upper trigram.
    #[serde(rename = "upper")]
    ChangesUpper(LinePosition),
}

impl LineChange {
    /// Position of the flipped line within its trigram.
    pub fn position(self) -> LinePosition {
        match self {
            Self::ChangesLower(p) | Self::ChangesUpper(p) => p,
        }
    }

    /// Apply the flip to an `(upper, lower)` pair.
    pub fn apply(self, upper: Trigram, lower: Trigram) -> (Trigram, Trigram) {
        match self {
            Self::ChangesLower(p) => (upper, lower.flip(p)),
            Self::ChangesUpper(p) => (upper.flip(p), lower),
        }
    }
}

/// A computed reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// The main hexagram.
    pub hexagram: Hexagram,
    /// The hexagram after the moving line flips.
    pub changed_hexagram: Hexagram,
    /// Tone judged from the main hexagram's description.
    #[serde(rename = "type")]
    pub fortune: Fortune,
    /// Narrative text.
    pub analysis: Analysis,
    /// Upper trigram, from the object.
    pub upper_trigram: Trigram,
    /// Lower trigram, from the hour.
    pub lower_trigram: Trigram,
    /// Hour number `1..=12`, 子 = 1.
    pub hour: u8,
    /// The moving line.
    pub moving_line: MovingLine,
    /// Which trigram the moving line flips.
    pub line_change: LineChange,
    /// Element of the object.
    pub element: Element,
}

/// Compute a reading. Pure: equal contexts give equal results.
pub fn compute(ctx: &DivinationContext) -> PredictionResult {
    let hour = time_branch_index(ctx.date.time()) + 1;
    let object_name = ctx.object_name.trim();
    let classification = classify(object_name);

    let upper = classification.trigram;
    let lower = Trigram::from_remainder(u32::from(hour));
    let moving_line =
        MovingLine::from_sum(u32::from(upper.index()) + u32::from(lower.index()) + u32::from(hour));
    let change = moving_line.change();

    let main = hexagram(upper.index(), lower.index());
    let (changed_upper, changed_lower) = change.apply(upper, lower);
    let changed = hexagram(changed_upper.index(), changed_lower.index());
    let fortune = Fortune::from_description(main.description);

    tracing::debug!(
        hour,
        upper = upper.index(),
        lower = lower.index(),
        moving_line = moving_line.number(),
        main = main.name,
        changed = changed.name,
        %fortune,
        "reading computed"
    );

    let analysis = assemble(&Inputs {
        object_name,
        question_type: ctx.question_type,
        classification,
        lower,
        hour,
        moving_line,
        change,
        hexagram: main,
        changed,
        fortune,
    });

    PredictionResult {
        hexagram: *main,
        changed_hexagram: *changed,
        fortune,
        analysis,
        upper_trigram: upper,
        lower_trigram: lower,
        hour,
        moving_line,
        line_change: change,
        element: classification.element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::QuestionType;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn red_sun() -> PredictionResult {
        compute(&DivinationContext::new(
            at(2024, 1, 1, 9, 0),
            "一轮红日",
            QuestionType::Career,
        ))
    }

    #[test]
    fn red_sun_derivation() {
        let r = red_sun();
        assert_eq!(r.upper_trigram, Trigram::Li);
        assert_eq!(r.hour, 6);
        assert_eq!(r.lower_trigram, Trigram::Kan);
        assert_eq!(r.moving_line.number(), 3);
        assert_eq!(r.line_change, LineChange::ChangesLower(LinePosition::Top));
        assert_eq!(r.element, Element::Fire);
    }

    #[test]
    fn red_sun_hexagrams() {
        let r = red_sun();
        // (3, 6) is fire over water.
        assert_eq!(r.hexagram.name, "未济");
        assert_eq!(r.hexagram.nature, "火水未济");
        // 坎 with its top line flipped is 巽.
        assert_eq!((r.changed_hexagram.upper, r.changed_hexagram.lower), (3, 5));
        assert_eq!(r.changed_hexagram.name, "鼎");
        // 谋事未成 carries 成.
        assert_eq!(r.fortune, Fortune::Good);
    }

    #[test]
    fn red_sun_narrative() {
        let a = red_sun().analysis;
        assert!(a.object_analysis.contains("一轮红日"));
        assert!(a.object_analysis.contains("离"));
        assert!(a.time_analysis.contains("巳时"));
        assert!(a.changed_hexagram.meaning.contains("第3爻"));
        assert!(a.comprehensive.contains("事业"));
        assert!(a.comprehensive.contains("热情但勿急躁"));
        assert!(a.hexagram_analysis.shao_yong.is_some());
        assert!(a.hexagram_analysis.traditional.is_some());
        insta::assert_snapshot!(
            a.comprehensive,
            @"问事业之事，得未济之鼎。卦象吉利，顺势而为可成。物象属火，行事宜热情但勿急躁。"
        );
    }

    #[test]
    fn moving_line_zero_maps_to_six() {
        // 雷 gives 震 (4); just after midnight is hour 1, lower 乾 (1).
        // 4 + 1 + 1 = 6, so the remainder is 0.
        let r = compute(&DivinationContext::new(
            at(2024, 1, 1, 0, 30),
            "雷",
            QuestionType::General,
        ));
        assert_eq!(r.hour, 1);
        assert_eq!(r.moving_line.number(), 6);
        assert_eq!(r.line_change, LineChange::ChangesUpper(LinePosition::Top));
        assert_eq!(r.hexagram.name, "大壮");
        // 震 with its top line flipped is 离.
        assert_eq!(r.changed_hexagram.name, "大有");
    }

    #[test]
    fn upper_line_changes_leave_lower_alone() {
        // 雷 at 23:00: hour 1 again, same as above.
        let r = compute(&DivinationContext::new(
            at(2024, 1, 1, 23, 0),
            "雷",
            QuestionType::General,
        ));
        assert_eq!(r.changed_hexagram.lower, r.hexagram.lower);
        assert_ne!(r.changed_hexagram.upper, r.hexagram.upper);
    }

    #[test]
    fn hour_eight_gives_kun_below() {
        // 13:00 is 未, the eighth hour.
        let r = compute(&DivinationContext::new(
            at(2024, 1, 1, 13, 0),
            "xxxxxxxxx",
            QuestionType::General,
        ));
        assert_eq!(r.hour, 8);
        assert_eq!(r.lower_trigram, Trigram::Kun);
        assert_eq!(r.upper_trigram, Trigram::Qian);
        assert_eq!(r.hexagram.name, "否");
        assert_eq!(r.fortune, Fortune::Bad);
    }

    #[test]
    fn empty_object_is_kun() {
        let r = compute(&DivinationContext::new(
            at(2024, 1, 1, 9, 0),
            "   ",
            QuestionType::General,
        ));
        assert_eq!(r.upper_trigram, Trigram::Kun);
    }

    #[test]
    fn moving_line_mapping() {
        assert_eq!(MovingLine::from_sum(6).number(), 6);
        assert_eq!(MovingLine::from_sum(7).number(), 1);
        assert_eq!(
            MovingLine::from_sum(4).change(),
            LineChange::ChangesUpper(LinePosition::Bottom)
        );
        assert_eq!(
            MovingLine::from_sum(2).change(),
            LineChange::ChangesLower(LinePosition::Middle)
        );
    }

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(red_sun()).unwrap();
        assert_eq!(json["type"], "good");
        assert_eq!(json["hexagram"]["name"], "未济");
        assert_eq!(json["changedHexagram"]["name"], "鼎");
        assert_eq!(json["movingLine"], 3);
        assert_eq!(json["upperTrigram"], 3);
        assert_eq!(json["lineChange"]["trigram"], "lower");
        assert!(json["analysis"]["hexagramAnalysis"]["traditional"].is_string());
        assert!(json["analysis"]["timeAnalysis"].is_string());
    }

    proptest! {
        #[test]
        fn compute_is_deterministic(
            minutes in 0i64..(60 * 24 * 366),
            text in ".{0,12}",
            qt in 0usize..5,
        ) {
            let date = at(2024, 1, 1, 0, 0) + Duration::minutes(minutes);
            let ctx = DivinationContext::new(date, text, QuestionType::all()[qt]);
            prop_assert_eq!(compute(&ctx), compute(&ctx.clone()));
        }

        #[test]
        fn derived_numbers_stay_in_range(minutes in 0i64..(60 * 24), text in ".{0,12}") {
            let date = at(2024, 1, 1, 0, 0) + Duration::minutes(minutes);
            let r = compute(&DivinationContext::new(date, text, QuestionType::General));
            prop_assert!((1..=12).contains(&r.hour));
            prop_assert!((1..=6).contains(&r.moving_line.number()));
            prop_assert!(!r.hexagram.is_unknown());
            prop_assert!(!r.changed_hexagram.is_unknown());
            prop_assert_ne!(r.hexagram, r.changed_hexagram);
        }
    }
}
