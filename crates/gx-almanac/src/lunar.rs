//! Gregorian to Chinese lunar date conversion for 1900-2100.
//!
//! Each year is one packed word: bits 4..16 flag the twelve regular months
//! as long (30 days) or short (29), the low nibble names the leap month (0
//! for none), and bit 16 makes that leap month long.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AlmanacError, AlmanacResult};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2100;

const YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];

const DAY_UNITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// Lunar year (the Gregorian year in which it began).
    pub year: i32,
    /// Month number `1..=12`; a leap month repeats the number it follows.
    pub month: u8,
    /// Day of month `1..=30`.
    pub day: u8,
    /// Whether `month` is the intercalary repeat.
    pub is_leap: bool,
}

fn year_info(year: i32) -> u32 {
    YEAR_INFO[(year - FIRST_YEAR) as usize]
}

fn leap_month(year: i32) -> u8 {
    (year_info(year) & 0xf) as u8
}

fn leap_days(year: i32) -> u32 {
    match leap_month(year) {
        0 => 0,
        _ if year_info(year) & 0x10000 != 0 => 30,
        _ => 29,
    }
}

fn month_days(year: i32, month: u8) -> u32 {
    if year_info(year) & (0x10000 >> month) != 0 { 30 } else { 29 }
}

fn year_days(year: i32) -> u32 {
    (1..=12).map(|m| month_days(year, m)).sum::<u32>() + leap_days(year)
}

/// First day of lunar year 1900.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 31).unwrap_or(NaiveDate::MIN)
}

/// Last date the tables cover.
pub fn last_supported() -> NaiveDate {
    NaiveDate::from_ymd_opt(LAST_YEAR, 12, 31).unwrap_or(NaiveDate::MAX)
}

impl LunarDate {
    /// Convert a Gregorian date.
    pub fn from_solar(date: NaiveDate) -> AlmanacResult<Self> {
        if date < epoch() || date > last_supported() {
            return Err(AlmanacError::OutOfRange(date));
        }
        let mut offset = (date - epoch()).num_days() as u32;

        let mut year = FIRST_YEAR;
        while offset >= year_days(year) {
            offset -= year_days(year);
            year += 1;
        }

        let leap = leap_month(year);
        let mut month = 1;
        let mut is_leap = false;
        loop {
            let days = if is_leap {
                leap_days(year)
            } else {
                month_days(year, month)
            };
            if offset < days {
                break;
            }
            offset -= days;
            if leap == month && !is_leap {
                is_leap = true;
            } else {
                is_leap = false;
                month += 1;
            }
        }

        Ok(Self {
            year,
            month,
            day: (offset + 1) as u8,
            is_leap,
        })
    }

    /// Traditional month name, e.g. 闰二月 or 冬月.
    pub fn month_name(&self) -> String {
        let prefix = if self.is_leap { "闰" } else { "" };
        format!("{prefix}{}月", MONTHS[usize::from(self.month - 1)])
    }

    /// Traditional day name, e.g. 初一, 廿三 or 三十.
    pub fn day_name(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => format!(
                "{}{}",
                DAY_TENS[usize::from(d / 10)],
                DAY_UNITS[usize::from(d % 10)]
            ),
        }
    }

    /// Year written digit by digit, e.g. 二〇二四.
    pub fn year_name(&self) -> String {
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| DIGITS[d as usize])
            .collect()
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.year_name(),
            self.month_name(),
            self.day_name()
        )
    }
}
