//! The eight trigrams (八卦).
//!
//! Trigrams are identified by their index in the "earlier heaven" numbering
//! used for plum-blossom casting: 乾1 兑2 离3 震4 巽5 坎6 艮7 坤8. Each one
//! is three lines read bottom to top. Flipping a single line always yields
//! another trigram, and flipping the same line again returns the original.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{CoreError, CoreResult};

/// A single line of a trigram or hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Solid line (阳爻).
    Yang,
    /// Broken line (阴爻).
    Yin,
}

impl Line {
    /// The opposite line.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

/// Position of a line inside a trigram, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinePosition {
    /// First (lowest) line.
    Bottom,
    /// Second line.
    Middle,
    /// Third (highest) line.
    Top,
}

impl LinePosition {
    /// All positions bottom to top.
    pub fn all() -> [Self; 3] {
        [Self::Bottom, Self::Middle, Self::Top]
    }

    /// Build a position from its 1-based number.
    pub fn from_number(n: u8) -> CoreResult<Self> {
        match n {
            1 => Ok(Self::Bottom),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Top),
            other => Err(CoreError::InvalidLine(other)),
        }
    }

    /// The 1-based line number.
    pub fn number(self) -> u8 {
        match self {
            Self::Bottom => 1,
            Self::Middle => 2,
            Self::Top => 3,
        }
    }

    fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// One of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Trigram {
    /// 乾, Heaven.
    Qian,
    /// 兑, Lake.
    Dui,
    /// 离, Fire.
    Li,
    /// 震, Thunder.
    Zhen,
    /// 巽, Wind.
    Xun,
    /// 坎, Water.
    Kan,
    /// 艮, Mountain.
    Gen,
    /// 坤, Earth.
    Kun,
}

/// Static metadata for one trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrigramInfo {
    /// Index in `1..=8`.
    pub index: u8,
    /// Chinese name.
    pub name: &'static str,
    /// Pinyin name.
    pub pinyin: &'static str,
    /// Element of the trigram.
    pub element: Element,
    /// Natural image, e.g. 天.
    pub nature: &'static str,
    /// English rendering of the natural image.
    pub nature_en: &'static str,
    /// Short meaning phrase.
    pub meaning: &'static str,
    /// Lines bottom to top.
    pub lines: [Line; 3],
}

use Line::{Yang, Yin};

static TRIGRAMS: [TrigramInfo; 8] = [
    TrigramInfo {
        index: 1,
        name: "乾",
        pinyin: "Qian",
        element: Element::Metal,
        nature: "天",
        nature_en: "Heaven",
        meaning: "刚健不息",
        lines: [Yang, Yang, Yang],
    },
    TrigramInfo {
        index: 2,
        name: "兑",
        pinyin: "Dui",
        element: Element::Metal,
        nature: "泽",
        nature_en: "Lake",
        meaning: "喜悦和顺",
        lines: [Yang, Yang, Yin],
    },
    TrigramInfo {
        index: 3,
        name: "离",
        pinyin: "Li",
        element: Element::Fire,
        nature: "火",
        nature_en: "Fire",
        meaning: "光明依附",
        lines: [Yang, Yin, Yang],
    },
    TrigramInfo {
        index: 4,
        name: "震",
        pinyin: "Zhen",
        element: Element::Wood,
        nature: "雷",
        nature_en: "Thunder",
        meaning: "震动奋发",
        lines: [Yang, Yin, Yin],
    },
    TrigramInfo {
        index: 5,
        name: "巽",
        pinyin: "Xun",
        element: Element::Wood,
        nature: "风",
        nature_en: "Wind",
        meaning: "顺入谦逊",
        lines: [Yin, Yang, Yang],
    },
    TrigramInfo {
        index: 6,
        name: "坎",
        pinyin: "Kan",
        element: Element::Water,
        nature: "水",
        nature_en: "Water",
        meaning: "险陷流动",
        lines: [Yin, Yang, Yin],
    },
    TrigramInfo {
        index: 7,
        name: "艮",
        pinyin: "Gen",
        element: Element::Earth,
        nature: "山",
        nature_en: "Mountain",
        meaning: "静止安守",
        lines: [Yin, Yin, Yang],
    },
    TrigramInfo {
        index: 8,
        name: "坤",
        pinyin: "Kun",
        element: Element::Earth,
        nature: "地",
        nature_en: "Earth",
        meaning: "柔顺包容",
        lines: [Yin, Yin, Yin],
    },
];

/// `TRANSITIONS[t - 1][p - 1]` is the index of the trigram obtained by
/// inverting line `p` (bottom = 1) of trigram `t`.
const TRANSITIONS: [[u8; 3]; 8] = [
    // bottom, middle, top
    [5, 3, 2], // 乾
    [6, 4, 1], // 兑
    [7, 1, 4], // 离
    [8, 2, 3], // 震
    [1, 7, 6], // 巽
    [2, 8, 5], // 坎
    [3, 5, 8], // 艮
    [4, 6, 7], // 坤
];

impl Trigram {
    /// All trigrams in index order.
    pub fn all() -> [Self; 8] {
        [
            Self::Qian,
            Self::Dui,
            Self::Li,
            Self::Zhen,
            Self::Xun,
            Self::Kan,
            Self::Gen,
            Self::Kun,
        ]
    }

    /// Build a trigram from its index in `1..=8`.
    pub fn from_index(index: u8) -> CoreResult<Self> {
        match index {
            1 => Ok(Self::Qian),
            2 => Ok(Self::Dui),
            3 => Ok(Self::Li),
            4 => Ok(Self::Zhen),
            5 => Ok(Self::Xun),
            6 => Ok(Self::Kan),
            7 => Ok(Self::Gen),
            8 => Ok(Self::Kun),
            other => Err(CoreError::InvalidTrigram(other)),
        }
    }

    /// Build a trigram from any number by reducing it mod 8, with a
    /// remainder of 0 meaning 坤 (8).
    pub fn from_remainder(n: u32) -> Self {
        match n % 8 {
            1 => Self::Qian,
            2 => Self::Dui,
            3 => Self::Li,
            4 => Self::Zhen,
            5 => Self::Xun,
            6 => Self::Kan,
            7 => Self::Gen,
            _ => Self::Kun,
        }
    }

    /// Parse a trigram from its index, Chinese name, pinyin, or nature.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let needle = s.trim().to_lowercase();
        if let Ok(index) = needle.parse::<u8>() {
            return Self::from_index(index);
        }
        Self::all()
            .into_iter()
            .find(|t| {
                let info = t.info();
                needle == info.name
                    || needle == info.pinyin.to_lowercase()
                    || needle == info.nature
                    || needle == info.nature_en.to_lowercase()
            })
            .ok_or_else(|| CoreError::UnknownTrigramName(s.to_string()))
    }

    /// Index in `1..=8`.
    pub fn index(self) -> u8 {
        self.info().index
    }

    /// Static metadata row.
    pub fn info(self) -> &'static TrigramInfo {
        let slot = match self {
            Self::Qian => 0,
            Self::Dui => 1,
            Self::Li => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Kan => 5,
            Self::Gen => 6,
            Self::Kun => 7,
        };
        &TRIGRAMS[slot]
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Element of the trigram.
    pub fn element(self) -> Element {
        self.info().element
    }

    /// Natural image, e.g. 天.
    pub fn nature(self) -> &'static str {
        self.info().nature
    }

    /// Lines bottom to top.
    pub fn lines(self) -> [Line; 3] {
        self.info().lines
    }

    /// The trigram obtained by inverting the line at `position`.
    pub fn flip(self, position: LinePosition) -> Self {
        let target = TRANSITIONS[usize::from(self.index() - 1)][position.slot()];
        Self::from_remainder(u32::from(target))
    }

    /// Find the trigram with the given lines, bottom to top.
    pub fn from_lines(lines: [Line; 3]) -> Self {
        // Every line pattern belongs to exactly one trigram.
        Self::all()
            .into_iter()
            .find(|t| t.lines() == lines)
            .unwrap_or(Self::Kun)
    }
}

impl From<Trigram> for u8 {
    fn from(t: Trigram) -> Self {
        t.index()
    }
}

impl TryFrom<u8> for Trigram {
    type Error = CoreError;

    fn try_from(index: u8) -> CoreResult<Self> {
        Self::from_index(index)
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn indices_round_trip() {
        for t in Trigram::all() {
            assert_eq!(Trigram::from_index(t.index()).unwrap(), t);
        }
        assert_eq!(Trigram::from_index(0), Err(CoreError::InvalidTrigram(0)));
        assert_eq!(Trigram::from_index(9), Err(CoreError::InvalidTrigram(9)));
    }

    #[test]
    fn remainder_zero_is_kun() {
        assert_eq!(Trigram::from_remainder(0), Trigram::Kun);
        assert_eq!(Trigram::from_remainder(8), Trigram::Kun);
        assert_eq!(Trigram::from_remainder(9), Trigram::Qian);
        assert_eq!(Trigram::from_remainder(14), Trigram::Kan);
    }

    #[test]
    fn line_patterns_are_unique() {
        for a in Trigram::all() {
            for b in Trigram::all() {
                if a != b {
                    assert_ne!(a.lines(), b.lines(), "{a} and {b} share lines");
                }
            }
            assert_eq!(Trigram::from_lines(a.lines()), a);
        }
    }

    #[test]
    fn transition_table_matches_line_inversion() {
        for t in Trigram::all() {
            for pos in LinePosition::all() {
                let mut lines = t.lines();
                let slot = usize::from(pos.number() - 1);
                lines[slot] = lines[slot].flipped();
                assert_eq!(t.flip(pos), Trigram::from_lines(lines), "{t} line {pos:?}");
            }
        }
    }

    #[test]
    fn flip_is_an_involution() {
        for t in Trigram::all() {
            for pos in LinePosition::all() {
                assert_ne!(t.flip(pos), t);
                assert_eq!(t.flip(pos).flip(pos), t);
            }
        }
    }

    #[test]
    fn kan_top_line_becomes_xun() {
        assert_eq!(Trigram::Kan.flip(LinePosition::Top), Trigram::Xun);
    }

    #[test]
    fn elements_follow_tradition() {
        assert_eq!(Trigram::Qian.element(), Element::Metal);
        assert_eq!(Trigram::Dui.element(), Element::Metal);
        assert_eq!(Trigram::Li.element(), Element::Fire);
        assert_eq!(Trigram::Zhen.element(), Element::Wood);
        assert_eq!(Trigram::Xun.element(), Element::Wood);
        assert_eq!(Trigram::Kan.element(), Element::Water);
        assert_eq!(Trigram::Gen.element(), Element::Earth);
        assert_eq!(Trigram::Kun.element(), Element::Earth);
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Trigram::parse("3").unwrap(), Trigram::Li);
        assert_eq!(Trigram::parse("坎").unwrap(), Trigram::Kan);
        assert_eq!(Trigram::parse("gen").unwrap(), Trigram::Gen);
        assert_eq!(Trigram::parse("Heaven").unwrap(), Trigram::Qian);
        assert_eq!(Trigram::parse("山").unwrap(), Trigram::Gen);
        assert!(matches!(
            Trigram::parse("void"),
            Err(CoreError::UnknownTrigramName(_))
        ));
        assert_eq!(Trigram::parse("0"), Err(CoreError::InvalidTrigram(0)));
    }

    #[test]
    fn line_position_numbers() {
        for pos in LinePosition::all() {
            assert_eq!(LinePosition::from_number(pos.number()).unwrap(), pos);
        }
        assert_eq!(LinePosition::from_number(4), Err(CoreError::InvalidLine(4)));
    }

    #[test]
    fn serde_as_index() {
        assert_eq!(serde_json::to_string(&Trigram::Gen).unwrap(), "7");
        let t: Trigram = serde_json::from_str("2").unwrap();
        assert_eq!(t, Trigram::Dui);
        assert!(serde_json::from_str::<Trigram>("0").is_err());
    }

    proptest! {
        #[test]
        fn from_remainder_always_in_range(n in any::<u32>()) {
            let t = Trigram::from_remainder(n);
            prop_assert!((1..=8).contains(&t.index()));
        }
    }
}
