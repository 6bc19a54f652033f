pub mod almanac;
pub mod classify;
pub mod divine;
pub mod hexagram;
pub mod hexagrams;
pub mod session;

use chrono::{Local, NaiveDateTime};
use gx_oracle::context::parse_datetime;

/// Parse `--date`, falling back to the local clock.
fn resolve_time(date: Option<&str>) -> Result<NaiveDateTime, String> {
    match date {
        Some(s) => parse_datetime(s).map_err(|e| e.to_string()),
        None => Ok(Local::now().naive_local()),
    }
}
