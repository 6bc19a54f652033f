use serde::{Deserialize, Serialize};

/// One of the five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 金
    #[serde(rename = "金")]
    Metal,
    /// 木
    #[serde(rename = "木")]
    Wood,
    /// 水
    #[serde(rename = "水")]
    Water,
    /// 火
    #[serde(rename = "火")]
    Fire,
    /// 土
    #[serde(rename = "土")]
    Earth,
}

/// Descriptive attributes of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    /// The element itself.
    pub element: Element,
    /// Single-character name.
    pub name: &'static str,
    /// Associated direction.
    pub direction: &'static str,
    /// Associated season.
    pub season: &'static str,
    /// Associated colour.
    pub colour: &'static str,
    /// Associated virtue.
    pub virtue: &'static str,
    /// Short characterisation.
    pub nature: &'static str,
}

static ELEMENTS: [ElementInfo; 5] = [
    ElementInfo {
        element: Element::Metal,
        name: "金",
        direction: "西",
        season: "秋",
        colour: "白",
        virtue: "义",
        nature: "刚强肃杀，主决断",
    },
    ElementInfo {
        element: Element::Wood,
        name: "木",
        direction: "东",
        season: "春",
        colour: "青",
        virtue: "仁",
        nature: "生发条达，主成长",
    },
    ElementInfo {
        element: Element::Water,
        name: "水",
        direction: "北",
        season: "冬",
        colour: "黑",
        virtue: "智",
        nature: "润下流动，主智谋",
    },
    ElementInfo {
        element: Element::Fire,
        name: "火",
        direction: "南",
        season: "夏",
        colour: "赤",
        virtue: "礼",
        nature: "炎上光明，主礼仪",
    },
    ElementInfo {
        element: Element::Earth,
        name: "土",
        direction: "中",
        season: "四季",
        colour: "黄",
        virtue: "信",
        nature: "承载化育，主诚信",
    },
];

impl Element {
    /// All five elements in generating-cycle order starting at Metal.
    pub fn all() -> [Self; 5] {
        [
            Self::Metal,
            Self::Water,
            Self::Wood,
            Self::Fire,
            Self::Earth,
        ]
    }

    /// The element's attribute row.
    pub fn info(self) -> &'static ElementInfo {
        let idx = match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        };
        &ELEMENTS[idx]
    }

    /// Single-character Chinese name.
    pub fn as_str(self) -> &'static str {
        self.info().name
    }

    /// The element this one generates (相生).
    pub fn generates(self) -> Self {
        match self {
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
        }
    }

    /// The element this one overcomes (相克).
    pub fn overcomes(self) -> Self {
        match self {
            Self::Metal => Self::Wood,
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
        }
    }

    /// How this element stands toward `other`.
    pub fn relation(self, other: Self) -> Relation {
        if self == other {
            Relation::Same
        } else if self.generates() == other {
            Relation::Generates
        } else if other.generates() == self {
            Relation::GeneratedBy
        } else if self.overcomes() == other {
            Relation::Overcomes
        } else {
            Relation::OvercomeBy
        }
    }
}

/// The relation of one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    /// Same element (比和).
    Same,
    /// This one generates the other.
    Generates,
    /// The other generates this one.
    GeneratedBy,
    /// This one overcomes the other.
    Overcomes,
    /// The other overcomes this one.
    OvercomeBy,
}

impl Relation {
    /// Phrase for `a` standing in this relation to `b`, e.g. 火生土.
    pub fn describe(self, a: Element, b: Element) -> String {
        match self {
            Self::Same => format!("{a}{b}比和"),
            Self::Generates => format!("{a}生{b}"),
            Self::GeneratedBy => format!("{b}生{a}"),
            Self::Overcomes => format!("{a}克{b}"),
            Self::OvercomeBy => format!("{b}克{a}"),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_rows_match_variant() {
        for element in Element::all() {
            assert_eq!(element.info().element, element);
        }
    }

    #[test]
    fn generating_cycle_closes_after_five_steps() {
        for element in Element::all() {
            let mut e = element;
            for _ in 0..5 {
                e = e.generates();
            }
            assert_eq!(e, element);
        }
    }

    #[test]
    fn overcoming_never_targets_self_or_child() {
        for element in Element::all() {
            assert_ne!(element.overcomes(), element);
            assert_ne!(element.overcomes(), element.generates());
        }
    }

    #[test]
    fn relations() {
        assert_eq!(Element::Fire.relation(Element::Earth), Relation::Generates);
        assert_eq!(Element::Fire.relation(Element::Wood), Relation::GeneratedBy);
        assert_eq!(Element::Fire.relation(Element::Metal), Relation::Overcomes);
        assert_eq!(Element::Fire.relation(Element::Water), Relation::OvercomeBy);
        assert_eq!(Element::Fire.relation(Element::Fire), Relation::Same);
    }

    #[test]
    fn relation_phrases() {
        let (fire, water) = (Element::Fire, Element::Water);
        assert_eq!(fire.relation(water).describe(fire, water), "水克火");
        assert_eq!(water.relation(fire).describe(water, fire), "水克火");
        assert_eq!(fire.relation(fire).describe(fire, fire), "火火比和");
    }

    #[test]
    fn serde_uses_chinese_names() {
        let json = serde_json::to_string(&Element::Water).unwrap();
        assert_eq!(json, "\"水\"");
        let back: Element = serde_json::from_str("\"金\"").unwrap();
        assert_eq!(back, Element::Metal);
    }
}
