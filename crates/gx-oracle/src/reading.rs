//! A full reading: hexagrams, almanac, palace and guidance together.

use gx_almanac::{AlmanacInfo, AlmanacProvider};
use serde::Serialize;

use crate::context::DivinationContext;
use crate::engine::{PredictionResult, compute};
use crate::error::OracleResult;
use crate::guidance::Guidance;
use crate::xiaoliuren::{self, Palace};

/// Everything shown for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// The hexagram reading.
    pub prediction: PredictionResult,
    /// Almanac for the question's timestamp.
    pub almanac: AlmanacInfo,
    /// Xiao Liu Ren palace for the same moment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palace: Option<&'static Palace>,
    /// Mantra, warning and disclaimer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
}

impl Reading {
    /// Drop the palace.
    pub fn without_palace(mut self) -> Self {
        self.palace = None;
        self
    }

    /// Drop the guidance.
    pub fn without_guidance(mut self) -> Self {
        self.guidance = None;
        self
    }
}

/// Cast a full reading.
///
/// The almanac is queried first; if it fails nothing else is computed.
pub fn divine<P: AlmanacProvider>(ctx: &DivinationContext, provider: &P) -> OracleResult<Reading> {
    let almanac = provider.lunar_almanac(ctx.date).inspect_err(|e| {
        tracing::warn!(date = %ctx.date, error = %e, "almanac query failed");
    })?;
    let prediction = compute(ctx);
    let palace = xiaoliuren::cast(
        almanac.lunar_month,
        almanac.lunar_day,
        prediction.hour,
        &ctx.object_name,
    );
    let guidance = Guidance::select(prediction.fortune, ctx.question_type, &almanac);

    tracing::info!(
        object = ctx.object_name.trim(),
        question_type = %ctx.question_type,
        hexagram = prediction.hexagram.name,
        changed = prediction.changed_hexagram.name,
        palace = palace.name(),
        "divination complete"
    );

    Ok(Reading {
        prediction,
        almanac,
        palace: Some(palace),
        guidance: Some(guidance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::QuestionType;
    use crate::error::OracleError;
    use crate::fortune::Fortune;
    use chrono::{NaiveDate, NaiveDateTime};
    use gx_almanac::{AlmanacError, AlmanacResult, ChineseCalendar};

    struct Offline;

    impl AlmanacProvider for Offline {
        fn lunar_almanac(&self, _at: NaiveDateTime) -> AlmanacResult<AlmanacInfo> {
            Err(AlmanacError::Unavailable("offline".to_string()))
        }
    }

    fn red_sun() -> DivinationContext {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        DivinationContext::new(date, "一轮红日", QuestionType::Career)
    }

    #[test]
    fn full_reading() {
        let r = divine(&red_sun(), &ChineseCalendar).unwrap();
        assert_eq!(r.almanac.lunar_str, "二〇二三年冬月二十");
        assert_eq!(r.almanac.zhi_xing, "建");
        assert_eq!(r.almanac.time_branch, "巳");
        assert_eq!(r.prediction.hexagram.name, "未济");
        assert_eq!(r.palace.map(Palace::name), Some("速喜"));
        let guidance = r.guidance.unwrap();
        assert_eq!(guidance.mantra, None);
        assert_eq!(guidance.warning, None);
    }

    #[test]
    fn prediction_matches_pure_engine() {
        let ctx = red_sun();
        let r = divine(&ctx, &ChineseCalendar).unwrap();
        assert_eq!(r.prediction, compute(&ctx));
    }

    #[test]
    fn almanac_failure_aborts() {
        let err = divine(&red_sun(), &Offline).unwrap_err();
        assert!(matches!(err, OracleError::AlmanacUnavailable(_)));
    }

    #[test]
    fn out_of_range_date_aborts() {
        let date = NaiveDate::from_ymd_opt(1850, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let ctx = DivinationContext::new(date, "山", QuestionType::General);
        assert!(matches!(
            divine(&ctx, &ChineseCalendar),
            Err(OracleError::AlmanacUnavailable(AlmanacError::OutOfRange(_)))
        ));
    }

    #[test]
    fn bad_health_reading_gets_mantra() {
        // 13:00 with nine characters gives 否.
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        let ctx = DivinationContext::new(date, "xxxxxxxxx", QuestionType::Health);
        let r = divine(&ctx, &ChineseCalendar).unwrap();
        assert_eq!(r.prediction.fortune, Fortune::Bad);
        let guidance = r.guidance.unwrap();
        assert_eq!(guidance.heading, Some("静心化解"));
        assert!(guidance.mantra.is_some());
    }

    #[test]
    fn trimmed_reading_serializes_without_extras() {
        let r = divine(&red_sun(), &ChineseCalendar)
            .unwrap()
            .without_palace()
            .without_guidance();
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("palace").is_none());
        assert!(json.get("guidance").is_none());
        assert_eq!(json["almanac"]["zhiXing"], "建");
        assert_eq!(json["prediction"]["type"], "good");
    }
}
