//! Almanac adapter for Guaxiang.
//!
//! The divination engine only needs one query from a calendar: given a wall
//! clock timestamp, produce an [`AlmanacInfo`] record. That query is the
//! [`AlmanacProvider`] trait. [`ChineseCalendar`] is the built-in provider,
//! covering 1900-01-31 through 2100-12-31.

/// The built-in provider.
pub mod calendar;
/// Day spirits and the activity lists they produce.
pub mod day_gods;
/// Error types for almanac queries.
pub mod error;
/// Heavenly stems, earthly branches and the sexagenary cycle.
pub mod ganzhi;
/// The almanac record handed to consumers.
pub mod info;
/// Lunar calendar conversion.
pub mod lunar;
/// The twelve day officers and their base activity rows.
pub mod officer;
/// The provider trait.
pub mod provider;
/// Solar terms that start the solar months.
pub mod solar_terms;

pub use calendar::ChineseCalendar;
pub use day_gods::{DayActivities, DayGod};
pub use error::{AlmanacError, AlmanacResult};
pub use ganzhi::{GanZhi, time_branch_index};
pub use info::AlmanacInfo;
pub use lunar::LunarDate;
pub use officer::Officer;
pub use provider::AlmanacProvider;
