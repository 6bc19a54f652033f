//! Long-form commentary keyed like the hexagram table.
//!
//! Every hexagram carries its Image text (大象传). Shao Yong's verse
//! reading is only recorded for some of them; callers omit whatever is
//! absent.

use serde::Serialize;

use crate::hexagram::normalize;

/// Optional commentary strings for one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramDetail {
    /// Shao Yong's verse reading (邵雍解卦).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shao_yong: Option<&'static str>,
    /// The traditional Image commentary (象曰).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional: Option<&'static str>,
}

struct Entry {
    upper: u8,
    lower: u8,
    detail: HexagramDetail,
}

const fn image(upper: u8, lower: u8, traditional: &'static str) -> Entry {
    Entry {
        upper,
        lower,
        detail: HexagramDetail {
            shao_yong: None,
            traditional: Some(traditional),
        },
    }
}

const fn verse(upper: u8, lower: u8, shao_yong: &'static str, traditional: &'static str) -> Entry {
    Entry {
        upper,
        lower,
        detail: HexagramDetail {
            shao_yong: Some(shao_yong),
            traditional: Some(traditional),
        },
    }
}

static DETAILS: [Entry; 64] = [
    verse(1, 1, "困龙得水好运交，不由喜气上眉梢，一切谋望皆如意，向后时运渐渐高。", "天行健，君子以自强不息。"),
    verse(8, 8, "肥羊失群入山岗，饿虎逢之把口张，适口充肠心欢喜，卦若占之大吉昌。", "地势坤，君子以厚德载物。"),
    verse(6, 4, "风刮乱丝不见头，颠三倒四犯忧愁，慢从款来左顺遂，急促反惹不自由。", "云雷，屯；君子以经纶。"),
    verse(7, 6, "卦中爻象犯小耗，君子占之运不高，婚姻合伙有琐碎，做事必然受苦劳。", "山下出泉，蒙；君子以果行育德。"),
    verse(6, 1, "明珠土埋日久深，无光无亮到如今，忽然大风吹土去，自然显露有重新。", "云上于天，需；君子以饮食宴乐。"),
    image(1, 6, "天与水违行，讼；君子以作事谋始。"),
    image(8, 6, "地中有水，师；君子以容民畜众。"),
    image(6, 8, "地上有水，比；先王以建万国，亲诸侯。"),
    image(5, 1, "风行天上，小畜；君子以懿文德。"),
    image(1, 2, "上天下泽，履；君子以辨上下，定民志。"),
    verse(8, 1, "学文满腹入场闱，三元及第得意回，从今解去愁和闷，喜庆平地起风雷。", "天地交，泰；后以财成天地之道，辅相天地之宜，以左右民。"),
    verse(1, 8, "虎落陷坑不堪言，进前容易退后难，谋望不遂自己便，疾病口舌事牵连。", "天地不交，否；君子以俭德辟难，不可荣以禄。"),
    image(1, 3, "天与火，同人；君子以类族辨物。"),
    image(3, 1, "火在天上，大有；君子以遏恶扬善，顺天休命。"),
    image(8, 7, "地中有山，谦；君子以裒多益寡，称物平施。"),
    image(4, 8, "雷出地奋，豫；先王以作乐崇德，殷荐之上帝，以配祖考。"),
    image(2, 4, "泽中有雷，随；君子以向晦入宴息。"),
    image(7, 5, "山下有风，蛊；君子以振民育德。"),
    image(8, 2, "泽上有地，临；君子以教思无穷，容保民无疆。"),
    image(5, 8, "风行地上，观；先王以省方观民设教。"),
    image(3, 4, "雷电，噬嗑；先王以明罚敕法。"),
    image(7, 3, "山下有火，贲；君子以明庶政，无敢折狱。"),
    image(7, 8, "山附于地，剥；上以厚下安宅。"),
    image(8, 4, "雷在地中，复；先王以至日闭关，商旅不行，后不省方。"),
    image(1, 4, "天下雷行，物与无妄；先王以茂对时育万物。"),
    image(7, 1, "天在山中，大畜；君子以多识前言往行，以畜其德。"),
    image(7, 4, "山下有雷，颐；君子以慎言语，节饮食。"),
    image(2, 5, "泽灭木，大过；君子以独立不惧，遯世无闷。"),
    verse(6, 6, "一轮明月照水中，只见影儿不见踪，愚夫当财下去取，摸来摸去一场空。", "水洊至，习坎；君子以常德行，习教事。"),
    verse(3, 3, "官人来占主高升，庄农人家产业增，生意买卖利息厚，匠艺占之大亨通。", "明两作，离；大人以继明照于四方。"),
    image(2, 7, "山上有泽，咸；君子以虚受人。"),
    image(4, 5, "雷风，恒；君子以立不易方。"),
    image(1, 7, "天下有山，遯；君子以远小人，不恶而严。"),
    image(4, 1, "雷在天上，大壮；君子以非礼弗履。"),
    image(3, 8, "明出地上，晋；君子以自昭明德。"),
    image(8, 3, "明入地中，明夷；君子以莅众，用晦而明。"),
    image(5, 3, "风自火出，家人；君子以言有物，而行有恒。"),
    image(3, 2, "上火下泽，睽；君子以同而异。"),
    image(6, 7, "山上有水，蹇；君子以反身修德。"),
    image(4, 6, "雷雨作，解；君子以赦过宥罪。"),
    image(7, 2, "山下有泽，损；君子以惩忿窒欲。"),
    image(5, 4, "风雷，益；君子以见善则迁，有过则改。"),
    image(2, 1, "泽上于天，夬；君子以施禄及下，居德则忌。"),
    image(1, 5, "天下有风，姤；后以施命诰四方。"),
    image(2, 8, "泽上于地，萃；君子以除戎器，戒不虞。"),
    image(8, 5, "地中生木，升；君子以顺德，积小以高大。"),
    image(2, 6, "泽无水，困；君子以致命遂志。"),
    image(6, 5, "木上有水，井；君子以劳民劝相。"),
    image(2, 3, "泽中有火，革；君子以治历明时。"),
    verse(3, 5, "苗逢旱天尽焦梢，水涧长流在河槽，突然天降甘露雨，枯木逢春节节高。", "木上有火，鼎；君子以正位凝命。"),
    verse(4, 4, "一口金钟在淤泥，人人拿着当玩石，忽然一日钟悬起，响亮一声天下知。", "洊雷，震；君子以恐惧修省。"),
    image(7, 7, "兼山，艮；君子以思不出其位。"),
    image(5, 7, "山上有木，渐；君子以居贤德善俗。"),
    image(4, 2, "泽上有雷，归妹；君子以永终知敝。"),
    image(4, 3, "雷电皆至，丰；君子以折狱致刑。"),
    verse(3, 7, "飞鸟树上垒窝巢，小人使计举火烧，君占此卦为不吉，一切谋望枉徒劳。", "山上有火，旅；君子以明慎用刑，而不留狱。"),
    image(5, 5, "随风，巽；君子以申命行事。"),
    image(2, 2, "丽泽，兑；君子以朋友讲习。"),
    image(5, 6, "风行水上，涣；先王以享于帝立庙。"),
    image(6, 2, "泽上有水，节；君子以制数度，议德行。"),
    image(5, 2, "泽上有风，中孚；君子以议狱缓死。"),
    image(4, 7, "山上有雷，小过；君子以行过乎恭，丧过乎哀，用过乎俭。"),
    verse(6, 3, "金榜以上题姓名，不负当年苦用功，人逢此卦名吉庆，一切谋望大亨通。", "水在火上，既济；君子以思患而豫防之。"),
    verse(3, 6, "离地着人几丈深，是防偷营劫寨人，后封太岁为凶煞，时加谨慎祸不侵。", "火在水上，未济；君子以慎辨物居方。"),
];

/// Commentary for `(upper, lower)`, or `None` when the key has no entry.
///
/// Keys are read the way [`hexagram`](crate::hexagram::hexagram) reads
/// them, so a literal 0 means 8 (坤).
pub fn hexagram_detail(upper: u8, lower: u8) -> Option<&'static HexagramDetail> {
    let (upper, lower) = (normalize(upper), normalize(lower));
    DETAILS
        .iter()
        .find(|e| e.upper == upper && e.lower == lower)
        .map(|e| &e.detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::all_hexagrams;

    #[test]
    fn every_hexagram_has_an_image_naming_it() {
        for h in all_hexagrams() {
            let detail = hexagram_detail(h.upper, h.lower).unwrap();
            let text = detail.traditional.unwrap();
            // 天行健 is the one image that never names its hexagram.
            if h.name != "乾" {
                assert!(text.contains(h.name), "{} -> {text}", h.name);
            }
        }
    }

    #[test]
    fn verses_are_sparse() {
        let with_verse = all_hexagrams()
            .iter()
            .filter(|h| hexagram_detail(h.upper, h.lower).unwrap().shao_yong.is_some())
            .count();
        assert!(with_verse > 0 && with_verse < 64);
    }

    #[test]
    fn missing_key_has_no_detail() {
        assert!(hexagram_detail(9, 9).is_none());
        assert!(hexagram_detail(1, 10).is_none());
    }

    #[test]
    fn zero_key_reads_as_kun() {
        // 坤 over 乾 is 泰 under either spelling of the key.
        assert_eq!(hexagram_detail(0, 1), hexagram_detail(8, 1));
        assert!(hexagram_detail(0, 1).is_some());
        assert_eq!(crate::hexagram::hexagram(0, 1).name, "泰");
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let json = serde_json::to_string(hexagram_detail(1, 6).unwrap()).unwrap();
        assert!(!json.contains("shaoYong"));
        assert!(json.contains("traditional"));
    }
}
