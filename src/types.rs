use crate::DateError;
use crate::calendar::{self, TimeZone};
use crate::clock::Clock;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year in the proleptic Gregorian calendar.
/// Any integer is a valid year, including zero and negative years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year. Every value is accepted.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns whether the year is a leap year.
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month of the year, numbered 1 (January) through 12 (December).
/// Ordering follows the numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its numeric code.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside `1..=12`.
    pub fn from_number(value: u8) -> Result<Self, DateError> {
        Self::ALL
            .get((value as usize).wrapping_sub(1))
            .copied()
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the numeric code of the month (1 = January)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the number of days in the month for the specified year.
    pub const fn number_of_days(self, year: Year) -> u8 {
        days_in_month(year.get(), self.number())
    }

    /// Returns the month of the current date in the given time zone.
    pub fn current<C: Clock>(clock: &C, time_zone: TimeZone) -> Self {
        calendar::civil_from_instant(clock.now(), time_zone).month
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A day of the week, numbered 1 (Sunday) through 7 (Saturday).
/// Ordering follows the numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 1,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days of the week in numeric order (Sunday first).
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// The working days, Monday through Friday.
    pub const WEEKDAYS: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// The weekend days.
    pub const WEEKENDS: [Self; 2] = [Self::Saturday, Self::Sunday];

    /// Creates a Weekday from its numeric code.
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the value is outside `1..=7`.
    pub fn from_number(value: u8) -> Result<Self, DateError> {
        Self::ALL
            .get((value as usize).wrapping_sub(1))
            .copied()
            .ok_or(DateError::InvalidWeekday(value))
    }

    /// Returns the numeric code of the day (1 = Sunday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns whether the day is a working day.
    pub fn is_weekday(self) -> bool {
        Self::WEEKDAYS.contains(&self)
    }

    /// Returns whether the day falls on the weekend.
    pub fn is_weekend(self) -> bool {
        Self::WEEKENDS.contains(&self)
    }

    /// Returns the day of the week of the current date in the given time zone.
    pub fn today<C: Clock>(clock: &C, time_zone: TimeZone) -> Self {
        calendar::civil_from_instant(clock.now(), time_zone).weekday
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % GREGORIAN_CYCLE == 0 || year % CENTURY_CYCLE != 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
