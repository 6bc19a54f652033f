use serde::{Deserialize, Serialize};

use crate::officer::Officer;

/// Almanac metadata for one timestamp.
///
/// `zhi_xing` is passed through verbatim from the provider so that
/// consumers can apply their own checks, such as
/// [`AlmanacInfo::is_dangerous_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlmanacInfo {
    /// Display string of the lunar date, e.g. 二〇二三年冬月二十.
    pub lunar_str: String,
    /// Day officer name, one of 建除满平定执破危成收开闭.
    pub zhi_xing: String,
    /// Clash description, e.g. (戊午)马.
    pub chong: String,
    /// Inauspicious direction for the day.
    pub sha: String,
    /// Favoured activities, in order.
    pub yi: Vec<String>,
    /// Activities to avoid, in order.
    pub ji: Vec<String>,
    /// Day spirits (神煞) in attendance, kind ones first.
    #[serde(default)]
    pub shen_sha: Vec<String>,
    /// Lunar year.
    pub lunar_year: i32,
    /// Lunar month number (1-12).
    pub lunar_month: u8,
    /// Lunar day (1-30).
    pub lunar_day: u8,
    /// Whether the lunar month is a leap month.
    pub leap_month: bool,
    /// Sexagenary name of the day, e.g. 甲子.
    pub day_gan_zhi: String,
    /// Branch of the two-hour period, e.g. 巳.
    pub time_branch: String,
}

impl AlmanacInfo {
    /// Whether the day officer is 破 or 危.
    pub fn is_dangerous_day(&self) -> bool {
        Officer::parse(&self.zhi_xing).is_some_and(Officer::is_dangerous)
    }
}
