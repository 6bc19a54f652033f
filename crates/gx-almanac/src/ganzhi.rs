//! Heavenly stems (天干), earthly branches (地支) and their 60-term cycle.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// The ten heavenly stems.
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches, 子 first.
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animal of each branch.
pub const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Julian day number of 0000-12-31 in chrono's day count.
const JDN_OFFSET: i64 = 1_721_425;

/// A position in the sexagenary cycle, 甲子 = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi(u8);

impl GanZhi {
    /// Build from any cycle index, reduced mod 60.
    pub fn from_index(index: i64) -> Self {
        Self(index.rem_euclid(60) as u8)
    }

    /// Build from a stem and branch index. Only pairs of equal parity occur
    /// in the cycle.
    pub fn from_parts(stem: u8, branch: u8) -> Self {
        Self::from_index(6 * i64::from(stem % 10) - 5 * i64::from(branch % 12))
    }

    /// The sexagenary day of a civil date.
    pub fn of_day(date: NaiveDate) -> Self {
        let jdn = i64::from(date.num_days_from_ce()) + JDN_OFFSET;
        Self::from_index(jdn - 11)
    }

    /// Index in `0..60`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Stem index in `0..10`.
    pub fn stem(self) -> u8 {
        self.0 % 10
    }

    /// Branch index in `0..12`.
    pub fn branch(self) -> u8 {
        self.0 % 12
    }

    /// Zodiac animal of the branch.
    pub fn zodiac(self) -> &'static str {
        ZODIAC[usize::from(self.branch())]
    }

    /// The term that clashes with this one: branch opposite, stem four on.
    pub fn clash(self) -> Self {
        Self::from_parts((self.stem() + 4) % 10, (self.branch() + 6) % 12)
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            STEMS[usize::from(self.stem())],
            BRANCHES[usize::from(self.branch())]
        )
    }
}

/// Index of the two-hour period (时辰) containing `time`, 子 = 0.
///
/// 子 spans 23:00 to 00:59, 丑 01:00 to 02:59, and so on.
pub fn time_branch_index(time: NaiveTime) -> u8 {
    (((time.hour() + 1) / 2) % 12) as u8
}

/// Name of a branch index, wrapping mod 12.
pub fn branch_name(branch: u8) -> &'static str {
    BRANCHES[usize::from(branch % 12)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn known_days() {
        assert_eq!(GanZhi::of_day(date(2000, 1, 1)).to_string(), "戊午");
        assert_eq!(GanZhi::of_day(date(2024, 1, 1)).to_string(), "甲子");
        assert_eq!(GanZhi::of_day(date(2024, 1, 2)).to_string(), "乙丑");
        assert_eq!(GanZhi::of_day(date(2023, 12, 31)).to_string(), "癸亥");
    }

    #[test]
    fn parts_round_trip() {
        for i in 0..60 {
            let gz = GanZhi::from_index(i);
            assert_eq!(GanZhi::from_parts(gz.stem(), gz.branch()), gz);
        }
    }

    #[test]
    fn clash_of_jiazi_is_wuwu() {
        let clash = GanZhi::from_index(0).clash();
        assert_eq!(clash.to_string(), "戊午");
        assert_eq!(clash.zodiac(), "马");
    }

    #[test]
    fn time_branches() {
        assert_eq!(time_branch_index(time(23, 30)), 0);
        assert_eq!(time_branch_index(time(0, 0)), 0);
        assert_eq!(time_branch_index(time(0, 59)), 0);
        assert_eq!(time_branch_index(time(1, 0)), 1);
        assert_eq!(time_branch_index(time(9, 0)), 5);
        assert_eq!(time_branch_index(time(11, 0)), 6);
        assert_eq!(time_branch_index(time(22, 59)), 11);
        assert_eq!(branch_name(time_branch_index(time(9, 0))), "巳");
    }

    proptest! {
        #[test]
        fn consecutive_days_step_the_cycle(days in 0i64..80_000) {
            let d = date(1900, 1, 31) + chrono::Duration::days(days);
            let next = d + chrono::Duration::days(1);
            let a = GanZhi::of_day(d).index();
            let b = GanZhi::of_day(next).index();
            prop_assert_eq!((a + 1) % 60, b);
        }

        #[test]
        fn clash_faces_the_opposite_branch(i in 0i64..60) {
            let gz = GanZhi::from_index(i);
            prop_assert_eq!((gz.branch() + 6) % 12, gz.clash().branch());
            prop_assert_eq!((gz.stem() + 4) % 10, gz.clash().stem());
        }
    }
}
