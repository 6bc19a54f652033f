//! Object classifier: maps what the asker saw to a trigram.
//!
//! Rules are tried in a fixed order, 乾 兑 离 震 巽 坎 艮 坤, and the first
//! rule with a keyword contained in the text wins. Order matters whenever a
//! text carries keywords of several trigrams.

use gx_core::{Element, Trigram};
use serde::Serialize;

struct Rule {
    trigram: Trigram,
    keywords: &'static [&'static str],
}

static RULES: [Rule; 8] = [
    Rule {
        trigram: Trigram::Qian,
        keywords: &[
            "天", "龙", "马", "金", "玉", "钻", "宝石", "君", "父", "首", "圆", "冰", "钟", "表", "帽",
            "镜", "heaven", "dragon", "horse", "gold", "jade", "king", "father", "circle",
            "watch", "mirror", "metal",
        ],
    },
    Rule {
        trigram: Trigram::Dui,
        keywords: &[
            "泽", "湖", "池", "口", "嘴", "羊", "少女", "歌", "笑", "刀", "剪", "杯", "碗", "铃",
            "lake", "pond", "sheep", "mouth", "knife", "smile", "song", "bell", "bowl",
        ],
    },
    Rule {
        trigram: Trigram::Li,
        keywords: &[
            "火", "日", "阳光", "光", "电", "灯", "红", "鸟", "雉", "书", "画", "眼", "目", "屏",
            "手机", "电脑", "花", "fire", "flame", "sunshine", "sunlight", "light", "lamp",
            "phone", "screen", "book", "bird", "flower",
        ],
    },
    Rule {
        trigram: Trigram::Zhen,
        keywords: &[
            "雷", "震", "动", "车", "足", "脚", "鞋", "竹", "树", "鼓", "声", "响", "琴",
            "thunder", "drum", "shoe", "bamboo", "tree", "music", "engine",
        ],
    },
    Rule {
        trigram: Trigram::Xun,
        keywords: &[
            "风", "木", "草", "绳", "线", "扇", "鸡", "香", "纸", "笔", "叶", "羽", "wind",
            "wood", "grass", "rope", "breeze", "paper", "pencil", "leaf", "feather",
            "incense", "chicken",
        ],
    },
    Rule {
        trigram: Trigram::Kan,
        keywords: &[
            "水", "雨", "河", "江", "海", "泉", "酒", "茶", "奶", "汤", "饮", "鱼", "猪", "墨",
            "黑", "water", "rain", "river", "ocean", "wine", "fish", "coffee", "milk",
            "drink",
        ],
    },
    Rule {
        trigram: Trigram::Gen,
        keywords: &[
            "山", "石", "岩", "墙", "门", "狗", "犬", "手", "指", "桌", "床", "房", "屋",
            "mountain", "stone", "rock", "wall", "door", "house", "table", "desk", "hand",
        ],
    },
    Rule {
        trigram: Trigram::Kun,
        keywords: &[
            "地", "土", "田", "牛", "布", "母", "众", "袋", "包", "瓷", "陶", "粮", "米", "黄",
            "earth", "soil", "field", "cloth", "cattle", "mother", "ground", "pottery",
        ],
    },
];

/// Result of classifying an object description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Trigram for the object.
    pub trigram: Trigram,
    /// Element of that trigram.
    pub element: Element,
    /// The keyword that matched, or `None` when the length fallback applied.
    pub keyword: Option<&'static str>,
}

/// Classify a free-text object description.
///
/// Matching is case-insensitive substring search. Without a match the
/// trigram is the character count mod 8, with 0 meaning 坤; the empty string
/// therefore yields 坤.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    for rule in &RULES {
        if let Some(keyword) = rule.keywords.iter().copied().find(|k| lowered.contains(k)) {
            tracing::debug!(text, keyword, trigram = %rule.trigram, "object matched keyword");
            return Classification {
                trigram: rule.trigram,
                element: rule.trigram.element(),
                keyword: Some(keyword),
            };
        }
    }

    let length = text.chars().count();
    let trigram = Trigram::from_remainder((length % 8) as u32);
    tracing::debug!(text, length, %trigram, "no keyword, classified by length");
    Classification {
        trigram,
        element: trigram.element(),
        keyword: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn earlier_rule_wins() {
        let c = classify("龙与虎");
        assert_eq!(c.trigram, Trigram::Qian);
        assert_eq!(c.element, Element::Metal);
        assert_eq!(c.keyword, Some("龙"));

        // 手 is a mountain keyword but 手机 belongs to fire, which is earlier.
        assert_eq!(classify("手机").trigram, Trigram::Li);
        // 天 (heaven) outranks 水 (water).
        assert_eq!(classify("天上的水").trigram, Trigram::Qian);
    }

    #[test]
    fn red_sun_is_li() {
        let c = classify("一轮红日");
        assert_eq!(c.trigram, Trigram::Li);
        assert_eq!(c.element, Element::Fire);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("A Golden HORSE").trigram, Trigram::Qian);
        assert_eq!(classify("RIVER").trigram, Trigram::Kan);
    }

    #[test]
    fn unmatched_keywords_fall_back() {
        // 虎 and 轮 belong to no rule.
        assert_eq!(classify("虎").keyword, None);
        assert_eq!(classify("轮").trigram, Trigram::Qian);
    }

    #[test]
    fn length_fallback() {
        assert_eq!(classify("").trigram, Trigram::Kun);
        assert_eq!(classify("").element, Element::Earth);
        assert_eq!(classify("xxxxxxxxx").trigram, Trigram::Qian);
        assert_eq!(classify("xxxxxxxx").trigram, Trigram::Kun);
        assert_eq!(classify("xxx").trigram, Trigram::Li);
        assert_eq!(classify("xxx").element, Element::Fire);
    }

    #[test]
    fn fallback_counts_characters_not_bytes() {
        // Two CJK characters, six bytes.
        assert_eq!(classify("虎虎").trigram, Trigram::Dui);
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in &RULES {
            for k in rule.keywords {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }

    proptest! {
        #[test]
        fn always_a_valid_trigram(text in ".{0,24}") {
            let c = classify(&text);
            prop_assert!((1..=8).contains(&c.trigram.index()));
            prop_assert_eq!(c.element, c.trigram.element());
        }

        #[test]
        fn deterministic(text in ".{0,24}") {
            prop_assert_eq!(classify(&text), classify(&text));
        }
    }
}
