//! Explanatory text assembled from fixed templates.

use gx_almanac::ganzhi::branch_name;
use gx_core::{Element, Hexagram, Trigram, hexagram_detail};
use serde::Serialize;

use crate::classifier::Classification;
use crate::context::QuestionType;
use crate::engine::{LineChange, MovingLine};
use crate::fortune::Fortune;

/// Commentary on the main hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramAnalysis {
    /// Hexagram name.
    pub name: String,
    /// Composite label, e.g. 地天泰.
    pub nature: String,
    /// How the two trigrams combine.
    pub meaning: String,
    /// Description and judgment text.
    pub description: String,
    /// Shao Yong's verse, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shao_yong: Option<String>,
    /// Image commentary, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional: Option<String>,
}

/// Commentary on the changed hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedAnalysis {
    /// Hexagram name.
    pub name: String,
    /// Which line moved and what it turned into.
    pub meaning: String,
    /// Description and judgment text.
    pub description: String,
    /// Shao Yong's verse, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shao_yong: Option<String>,
    /// Image commentary, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional: Option<String>,
}

/// All narrative parts of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// How the hour gave the lower trigram.
    pub time_analysis: String,
    /// How the object gave the upper trigram.
    pub object_analysis: String,
    /// Main hexagram commentary.
    pub hexagram_analysis: HexagramAnalysis,
    /// Changed hexagram commentary.
    pub changed_hexagram: ChangedAnalysis,
    /// Overall judgment with advice.
    pub comprehensive: String,
}

/// Everything the templates draw on.
pub(crate) struct Inputs<'a> {
    pub object_name: &'a str,
    pub question_type: QuestionType,
    pub classification: Classification,
    pub lower: Trigram,
    pub hour: u8,
    pub moving_line: MovingLine,
    pub change: LineChange,
    pub hexagram: &'a Hexagram,
    pub changed: &'a Hexagram,
    pub fortune: Fortune,
}

/// Advice phrase for an element name. Anything unrecognised reads as earth.
pub fn element_advice(element: &str) -> &'static str {
    match element {
        "火" => "热情但勿急躁",
        "水" => "灵动且顺势",
        "木" => "仁爱且向上",
        "金" => "果断且刚毅",
        _ => "稳重且包容",
    }
}

fn judgment(h: &Hexagram) -> String {
    if h.judgment.is_empty() {
        h.description.to_string()
    } else {
        format!("{}卦辞曰：{}", h.description, h.judgment)
    }
}

fn time_analysis(hour: u8, lower: Trigram) -> String {
    format!(
        "起卦于{}时，时数为{}，以时数除八取余，得下卦{}（{}），五行属{}。",
        branch_name(hour.saturating_sub(1)),
        hour,
        lower.name(),
        lower.nature(),
        lower.element(),
    )
}

fn object_analysis(object_name: &str, c: &Classification) -> String {
    let upper = c.trigram;
    let source = match c.keyword {
        Some(keyword) => format!("取象于「{keyword}」"),
        None => format!("无明显物象，以字数{}起数", object_name.chars().count()),
    };
    format!(
        "所见之物「{}」，{}，得上卦{}（{}），五行属{}，{}。",
        object_name,
        source,
        upper.name(),
        upper.nature(),
        c.element,
        upper.info().meaning,
    )
}

fn hexagram_analysis(h: &Hexagram, upper: Trigram, lower: Trigram) -> HexagramAnalysis {
    let detail = hexagram_detail(h.upper, h.lower);
    HexagramAnalysis {
        name: h.name.to_string(),
        nature: h.nature.to_string(),
        meaning: format!(
            "上{}下{}，{}之象在外，{}之象在内，合为{}。",
            upper.nature(),
            lower.nature(),
            upper.info().meaning,
            lower.info().meaning,
            h.nature,
        ),
        description: judgment(h),
        shao_yong: detail.and_then(|d| d.shao_yong).map(str::to_string),
        traditional: detail.and_then(|d| d.traditional).map(str::to_string),
    }
}

fn changed_analysis(inputs: &Inputs<'_>) -> ChangedAnalysis {
    let h = inputs.changed;
    let detail = hexagram_detail(h.upper, h.lower);
    let (side, before, after) = match inputs.change {
        LineChange::ChangesLower(_) => ("下", inputs.lower, inputs.lower.flip(inputs.change.position())),
        LineChange::ChangesUpper(_) => (
            "上",
            inputs.classification.trigram,
            inputs.classification.trigram.flip(inputs.change.position()),
        ),
    };
    ChangedAnalysis {
        name: h.name.to_string(),
        meaning: format!(
            "动爻在第{}爻，{}卦{}变为{}，本卦{}化为{}，示事态之归趋。",
            inputs.moving_line.number(),
            side,
            before.name(),
            after.name(),
            inputs.hexagram.name,
            h.name,
        ),
        description: judgment(h),
        shao_yong: detail.and_then(|d| d.shao_yong).map(str::to_string),
        traditional: detail.and_then(|d| d.traditional).map(str::to_string),
    }
}

fn comprehensive(inputs: &Inputs<'_>) -> String {
    let tone = match inputs.fortune {
        Fortune::Good => "卦象吉利，顺势而为可成",
        Fortune::Bad => "卦象有阻，宜守不宜进",
        Fortune::Neutral => "吉凶参半，成败在人",
    };
    let element: Element = inputs.classification.element;
    format!(
        "问{}之事，得{}之{}。{}。物象属{}，行事宜{}。",
        inputs.question_type.label(),
        inputs.hexagram.name,
        inputs.changed.name,
        tone,
        element,
        element_advice(element.as_str()),
    )
}

/// Build the full analysis.
pub(crate) fn assemble(inputs: &Inputs<'_>) -> Analysis {
    Analysis {
        time_analysis: time_analysis(inputs.hour, inputs.lower),
        object_analysis: object_analysis(inputs.object_name, &inputs.classification),
        hexagram_analysis: hexagram_analysis(
            inputs.hexagram,
            inputs.classification.trigram,
            inputs.lower,
        ),
        changed_hexagram: changed_analysis(inputs),
        comprehensive: comprehensive(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_per_element() {
        assert_eq!(element_advice("火"), "热情但勿急躁");
        assert_eq!(element_advice("水"), "灵动且顺势");
        assert_eq!(element_advice("木"), "仁爱且向上");
        assert_eq!(element_advice("金"), "果断且刚毅");
        assert_eq!(element_advice("土"), "稳重且包容");
    }

    #[test]
    fn unknown_element_reads_as_earth() {
        assert_eq!(element_advice("以太"), element_advice("土"));
    }

    #[test]
    fn every_element_has_a_phrase() {
        for e in Element::all() {
            assert!(!element_advice(e.as_str()).is_empty());
        }
    }

    #[test]
    fn time_text_names_branch_and_trigram() {
        insta::assert_snapshot!(
            time_analysis(6, Trigram::Kan),
            @"起卦于巳时，时数为6，以时数除八取余，得下卦坎（水），五行属水。"
        );
    }

    #[test]
    fn sentinel_without_judgment_uses_description() {
        assert_eq!(judgment(&Hexagram::UNKNOWN), Hexagram::UNKNOWN.description);
    }
}
