use chrono::NaiveDateTime;

use crate::error::AlmanacResult;
use crate::info::AlmanacInfo;

/// A source of almanac data.
///
/// Timestamps are local wall-clock times; the provider decides which
/// calendar conventions apply to them.
pub trait AlmanacProvider {
    /// Almanac record for the day and two-hour period containing `at`.
    fn lunar_almanac(&self, at: NaiveDateTime) -> AlmanacResult<AlmanacInfo>;
}

impl<P: AlmanacProvider + ?Sized> AlmanacProvider for &P {
    fn lunar_almanac(&self, at: NaiveDateTime) -> AlmanacResult<AlmanacInfo> {
        (**self).lunar_almanac(at)
    }
}

impl<P: AlmanacProvider + ?Sized> AlmanacProvider for Box<P> {
    fn lunar_almanac(&self, at: NaiveDateTime) -> AlmanacResult<AlmanacInfo> {
        (**self).lunar_almanac(at)
    }
}
