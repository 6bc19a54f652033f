//! The built-in Chinese calendar provider.

use chrono::{NaiveDate, NaiveDateTime};

use crate::day_gods::{DayActivities, DayGod};
use crate::error::AlmanacResult;
use crate::ganzhi::{GanZhi, branch_name, time_branch_index};
use crate::info::AlmanacInfo;
use crate::lunar::LunarDate;
use crate::officer::Officer;
use crate::provider::AlmanacProvider;
use crate::solar_terms::month_branch;

/// Almanac computed from the lunar tables and solar terms for 1900-2100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseCalendar;

impl ChineseCalendar {
    /// Create the provider.
    pub fn new() -> Self {
        Self
    }

    /// Lunar date of a civil date.
    pub fn lunar_date(&self, date: NaiveDate) -> AlmanacResult<LunarDate> {
        LunarDate::from_solar(date)
    }
}

/// Direction of the three-harmony sha for a day branch.
pub fn sha_direction(day_branch: u8) -> &'static str {
    // 申子辰 南, 巳酉丑 东, 寅午戌 北, 亥卯未 西
    match day_branch % 4 {
        0 => "南",
        1 => "东",
        2 => "北",
        _ => "西",
    }
}

/// Clash text for a day, e.g. (戊午)马.
pub fn clash_description(day: GanZhi) -> String {
    let clash = day.clash();
    format!("({clash}){}", clash.zodiac())
}

impl AlmanacProvider for ChineseCalendar {
    fn lunar_almanac(&self, at: NaiveDateTime) -> AlmanacResult<AlmanacInfo> {
        let date = at.date();
        let lunar = self.lunar_date(date)?;
        let day = GanZhi::of_day(date);
        let month = month_branch(date);
        let officer = Officer::from_branches(day.branch(), month);
        let gods = DayGod::on(month, day);
        let activities = DayActivities::resolve(officer, &gods);

        tracing::debug!(%date, %lunar, %day, %officer, gods = gods.len(), "almanac computed");

        Ok(AlmanacInfo {
            lunar_str: lunar.to_string(),
            zhi_xing: officer.name().to_string(),
            chong: clash_description(day),
            sha: sha_direction(day.branch()).to_string(),
            yi: activities.yi.iter().map(|s| s.to_string()).collect(),
            ji: activities.ji.iter().map(|s| s.to_string()).collect(),
            shen_sha: gods.iter().map(|g| g.name().to_string()).collect(),
            lunar_year: lunar.year,
            lunar_month: lunar.month,
            lunar_day: lunar.day,
            leap_month: lunar.is_leap,
            day_gan_zhi: day.to_string(),
            time_branch: branch_name(time_branch_index(at.time())).to_string(),
        })
    }
}
