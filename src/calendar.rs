//! Proleptic Gregorian calendar engine.
//!
//! Converts between absolute instants and civil (year, month, day, hour,
//! minute, second) representations in a fixed-offset time zone, and performs
//! calendar-unit arithmetic with standard carry rules. The value types in
//! this crate call into this module only at construction-from-instant and
//! conversion-back-to-instant boundaries; all other arithmetic is pure field
//! arithmetic.
//!
//! The civil/epoch-day conversions use the era/day-of-era algorithms
//! described at <http://howardhinnant.github.io/date_algorithms.html>.

use crate::consts::SECONDS_PER_DAY;
use crate::prelude::*;
use crate::types::{Month, Weekday, days_in_month};
use serde::{Deserialize, Serialize};

/// An absolute point in time, measured in seconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Sub-second precision is out of scope.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(from = "i64", into = "i64")]
pub struct Instant(i64);

impl Instant {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self(0);

    /// Creates an Instant from seconds since the Unix epoch.
    pub const fn from_epoch_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the seconds since the Unix epoch.
    #[inline]
    pub const fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// Returns the instant shifted by the given number of seconds.
    pub const fn plus_seconds(self, seconds: i64) -> Self {
        Self(self.0 + seconds)
    }
}

/// A fixed offset from UTC, in seconds.
///
/// Timezone-database lookups (named zones, DST transitions) are outside the
/// scope of this crate; every zone is a constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZone {
    offset_seconds: i32,
}

impl TimeZone {
    /// Coordinated Universal Time, offset zero.
    pub const UTC: Self = Self { offset_seconds: 0 };

    /// Creates a time zone with a fixed offset from UTC in seconds.
    /// Positive offsets are east of Greenwich.
    pub const fn fixed(offset_seconds: i32) -> Self {
        Self { offset_seconds }
    }

    /// Returns the offset from UTC in seconds.
    #[inline]
    pub const fn offset_seconds(self) -> i32 {
        self.offset_seconds
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UTC
    }
}

/// The civil decomposition of an instant in some time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: Month,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: Weekday,
}

/// Calendar units for date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Day,
    Month,
    Year,
}

/// Decomposes an instant into its civil representation in the given zone.
pub fn civil_from_instant(instant: Instant, time_zone: TimeZone) -> CivilDateTime {
    let local = instant.epoch_seconds() + i64::from(time_zone.offset_seconds());
    let days = local.div_euclid(SECONDS_PER_DAY);
    let second_of_day = local.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    CivilDateTime {
        year,
        month: Month::ALL[(month - 1) as usize],
        day,
        hour: (second_of_day / 3600) as u8,
        minute: (second_of_day / 60 % 60) as u8,
        second: (second_of_day % 60) as u8,
        weekday: weekday_from_days(days),
    }
}

/// Composes an instant from civil fields interpreted in the given zone.
pub fn instant_from_civil(
    year: i32,
    month: Month,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    time_zone: TimeZone,
) -> Instant {
    let days = days_from_civil(year, month.number(), day);
    let second_of_day =
        i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);

    Instant::from_epoch_seconds(
        days * SECONDS_PER_DAY + second_of_day - i64::from(time_zone.offset_seconds()),
    )
}

/// Shifts an instant by the given number of calendar units, evaluated on the
/// instant's civil representation in the given zone. Day arithmetic rolls
/// over month and year boundaries; month and year arithmetic clamp the day
/// to the length of the target month (so Jan 31 plus one month is the last
/// day of February). The time of day is preserved.
pub fn add_calendar_unit(
    instant: Instant,
    unit: CalendarUnit,
    amount: i32,
    time_zone: TimeZone,
) -> Instant {
    let civil = civil_from_instant(instant, time_zone);
    let (year, month, day) = match unit {
        CalendarUnit::Day => {
            let days = days_from_civil(civil.year, civil.month.number(), civil.day);
            civil_from_days(days + i64::from(amount))
        }
        CalendarUnit::Month => add_months(civil.year, civil.month.number(), civil.day, amount),
        CalendarUnit::Year => add_months(
            civil.year,
            civil.month.number(),
            civil.day,
            amount.saturating_mul(12),
        ),
    };

    instant_from_civil(
        year,
        Month::ALL[(month - 1) as usize],
        day,
        civil.hour,
        civil.minute,
        civil.second,
        time_zone,
    )
}

/// Returns the signed number of whole days from `from` to `to`.
pub fn day_difference(from: Instant, to: Instant) -> i64 {
    (to.epoch_seconds() - from.epoch_seconds()).div_euclid(SECONDS_PER_DAY)
}

/// Month arithmetic with day clamping.
fn add_months(year: i32, month: u8, day: u8, amount: i32) -> (i32, u8, u8) {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(amount);
    let year = total.div_euclid(12) as i32;
    let month = (total.rem_euclid(12) + 1) as u8;
    let day = day.min(days_in_month(year, month));

    (year, month, day)
}

/// Days since the Unix epoch for a civil date.
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let day_of_year =
        (153 * (i64::from(month) + if month > 2 { -3 } else { 9 }) + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146_097 + day_of_era - 719_468
}

/// Civil date for a number of days since the Unix epoch.
pub(crate) fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let shifted = days + 719_468;
    let era = (if shifted >= 0 { shifted } else { shifted - 146_096 }) / 146_097;
    let day_of_era = shifted - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;

    ((year + i64::from(month <= 2)) as i32, month, day)
}

/// Weekday for a number of days since the Unix epoch.
/// 1970-01-01 was a Thursday.
pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    Weekday::ALL[(days + 4).rem_euclid(7) as usize]
}

/// Weekday for a civil date.
pub(crate) fn weekday_for(year: i32, month: u8, day: u8) -> Weekday {
    weekday_from_days(days_from_civil(year, month, day))
}
