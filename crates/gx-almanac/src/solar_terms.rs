//! The twelve "jie" solar terms (节) that open the solar months.
//!
//! Term instants come from a low-precision apparent solar longitude, good
//! to well under an hour across 1900-2100, converted to China Standard Time.

use chrono::{Datelike, NaiveDate};

/// Names of the jie terms, 小寒 first.
pub const JIE_NAMES: [&str; 12] = [
    "小寒", "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪",
];

/// Apparent solar longitude in degrees at which each jie begins.
const JIE_LONGITUDES: [f64; 12] = [
    285.0, 315.0, 345.0, 15.0, 45.0, 75.0, 105.0, 135.0, 165.0, 195.0, 225.0, 255.0,
];

const JD_J2000: f64 = 2_451_545.0;
const TROPICAL_YEAR: f64 = 365.2422;
const JDN_OFFSET: i64 = 1_721_425;

fn julian_day(date: NaiveDate) -> f64 {
    (i64::from(date.num_days_from_ce()) + JDN_OFFSET) as f64
}

/// Apparent geocentric longitude of the sun, degrees in `[0, 360)`.
fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - JD_J2000) / 36_525.0;
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// Terrestrial minus universal time, in days.
fn delta_t(year: i32) -> f64 {
    let t = f64::from(year - 2000);
    (62.92 + 0.32217 * t + 0.005589 * t * t) / 86_400.0
}

/// Civil date in UTC+8 on which jie `k` (0 = 小寒) of `year` begins.
pub fn jie_date(year: i32, k: usize) -> NaiveDate {
    let longitude = JIE_LONGITUDES[k % 12];
    let march = NaiveDate::from_ymd_opt(year, 3, 20).unwrap_or(NaiveDate::MIN);
    let mut jd = julian_day(march) + longitude / 360.0 * TROPICAL_YEAR;
    if longitude >= 285.0 {
        jd -= TROPICAL_YEAR;
    }

    for _ in 0..50 {
        let diff = (longitude - sun_longitude(jd) + 180.0).rem_euclid(360.0) - 180.0;
        jd += diff / 360.0 * TROPICAL_YEAR;
        if diff.abs() < 1e-7 {
            break;
        }
    }

    let local = jd - delta_t(year) + 8.0 / 24.0;
    let day = (local + 0.5).floor() as i64 - JDN_OFFSET;
    NaiveDate::from_num_days_from_ce_opt(day as i32).unwrap_or(march)
}

/// The jie in effect on `date`, as an index into [`JIE_NAMES`].
///
/// Dates before 小寒 fall under the previous year's 大雪. A term's own day
/// belongs to the month it opens.
pub fn current_jie(date: NaiveDate) -> usize {
    (0..12)
        .rev()
        .find(|&k| jie_date(date.year(), k) <= date)
        .unwrap_or(11)
}

/// Earthly branch index of the solar month containing `date`.
///
/// 小寒 opens 丑, 立春 opens 寅, and so on around to 大雪 opening 子.
pub fn month_branch(date: NaiveDate) -> u8 {
    ((current_jie(date) + 1) % 12) as u8
}
