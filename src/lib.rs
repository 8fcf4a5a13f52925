//! Timezone-independent calendar date and time-of-day values.
//!
//! [`LocalDate`], [`LocalTime`] and [`LocalDateTime`] model civil dates and
//! times in the proleptic Gregorian calendar, detached from any absolute
//! instant. Conversions to and from [`Instant`]s go through fixed-offset
//! [`TimeZone`]s; everything else is pure field arithmetic. All values are
//! immutable and validated once at construction.

mod calendar;
mod clock;
mod consts;
mod datetime;
mod format;
mod prelude;
mod time;
mod types;

pub use calendar::{
    CalendarUnit, CivilDateTime, Instant, TimeZone, add_calendar_unit, civil_from_instant,
    day_difference, instant_from_civil,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use datetime::{DateTimeError, LocalDateTime};
pub use format::DateFormat;
pub use time::{LocalTime, TimeComponent, TimeError};
pub use types::{Month, Weekday, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date in the proleptic Gregorian calendar, without a time of
/// day or time zone.
///
/// Equality, ordering and hashing are lexicographic over (year, month, day),
/// which agrees with chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "y.get()", "m.number()", "day")]
pub struct LocalDate {
    y: Year,
    m: Month,
    day: u8,
}

/// Error type for date construction, parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date pattern: {_0}")]
    InvalidPattern(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid weekday: {} (must be 1-{})", "_0", DAYS_PER_WEEK)]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Date components that [`LocalDate::by_adding`] can shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    Day,
    Month,
    Year,
}

impl DateComponent {
    const fn calendar_unit(self) -> CalendarUnit {
        match self {
            Self::Day => CalendarUnit::Day,
            Self::Month => CalendarUnit::Month,
            Self::Year => CalendarUnit::Year,
        }
    }
}

impl LocalDate {
    /// Creates a LocalDate from numeric fields.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` when `month` is outside `1..=12`
    /// and `DateError::InvalidDay` when `day` is outside the month's length
    /// for that year. Any year is accepted.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let m = Month::from_number(month)?;
        Self::from_parts(Year::new(year), m, day)
    }

    /// Creates a LocalDate from already-typed year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` when `day` is outside the month's
    /// length for that year.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        if day < MIN_DAY || day > month.number_of_days(year) {
            return Err(DateError::InvalidDay {
                year: year.get(),
                month: month.number(),
                day,
            });
        }

        Ok(Self {
            y: year,
            m: month,
            day,
        })
    }

    /// Creates a LocalDate from the date fields of an instant in the given
    /// zone.
    pub fn from_instant(instant: Instant, time_zone: TimeZone) -> Self {
        let civil = calendar::civil_from_instant(instant, time_zone);

        Self {
            y: Year::new(civil.year),
            m: civil.month,
            day: civil.day,
        }
    }

    /// Returns the current date in the given zone.
    pub fn today<C: Clock>(clock: &C, time_zone: TimeZone) -> Self {
        Self::from_instant(clock.now(), time_zone)
    }

    /// Parses a date string with the given format, re-validating the parsed
    /// components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFormat` when the input does not match the
    /// pattern, or the constructor's error when the components do not form a
    /// valid date.
    pub fn from_format_str(string: &str, format: &DateFormat) -> Result<Self, DateError> {
        format.parse(string)
    }

    /// Formats the date with the given format.
    pub fn format(self, format: &DateFormat) -> String {
        format.format(self)
    }

    /// Returns the instant of this date's midnight in the given zone.
    pub fn to_instant(self, time_zone: TimeZone) -> Instant {
        calendar::instant_from_civil(self.year(), self.m, self.day, 0, 0, 0, time_zone)
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.y.get()
    }

    /// Returns the month.
    #[inline]
    pub const fn month(self) -> Month {
        self.m
    }

    /// Returns the day of the month.
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the first day of this date's month.
    pub const fn first_day_of_month(self) -> Self {
        Self {
            y: self.y,
            m: self.m,
            day: MIN_DAY,
        }
    }

    /// Returns the last day of this date's month.
    pub const fn last_day_of_month(self) -> Self {
        Self {
            y: self.y,
            m: self.m,
            day: self.m.number_of_days(self.y),
        }
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        calendar::weekday_for(self.year(), self.m.number(), self.day)
    }

    /// Returns the latest date in this month, on or before the last day of
    /// the month, that falls on the given weekday.
    pub fn last_day_of_week(self, weekday: Weekday) -> Self {
        let last = self.last_day_of_month();
        let difference = (i32::from(last.weekday().number()) - i32::from(weekday.number()))
            .rem_euclid(i32::from(DAYS_PER_WEEK));

        last.by_adding(DateComponent::Day, -difference)
    }

    /// Returns the number of months from `from` to `to`, ignoring the day
    /// of the month. Negative when `to` is in an earlier month.
    pub const fn month_interval(from: Self, to: Self) -> i32 {
        (to.year() - from.year()) * 12 + (to.m.number() as i32 - from.m.number() as i32)
    }

    /// Returns the signed number of calendar days from `from` to `to`,
    /// computed on the dates' midnight instants.
    pub fn day_interval(from: Self, to: Self) -> i64 {
        calendar::day_difference(from.to_instant(TimeZone::UTC), to.to_instant(TimeZone::UTC))
    }

    /// Returns the date shifted by the given number of days, months or
    /// years. Day arithmetic rolls over month and year boundaries; month and
    /// year arithmetic clamp the day to the length of the target month.
    pub fn by_adding(self, component: DateComponent, value: i32) -> Self {
        let shifted = calendar::add_calendar_unit(
            self.to_instant(TimeZone::UTC),
            component.calendar_unit(),
            value,
            TimeZone::UTC,
        );

        Self::from_instant(shifted, TimeZone::UTC)
    }

    /// Returns whether the date falls on a working day.
    pub fn is_weekday(self) -> bool {
        self.weekday().is_weekday()
    }

    /// Returns whether the date falls on the weekend.
    pub fn is_weekend(self) -> bool {
        self.weekday().is_weekend()
    }
}

impl FromStr for LocalDate {
    type Err = DateError;

    /// Parses an ISO `yyyy-mm-dd` date string. A leading `-` marks a
    /// negative (proleptic) year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (negative, rest) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = rest.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let year = parse_i32(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

/// Helper to parse i32 with an `InvalidFormat` error
fn parse_i32(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with an `InvalidFormat` error
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
