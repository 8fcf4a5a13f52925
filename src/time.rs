use crate::calendar::{self, Instant, TimeZone};
use crate::clock::Clock;
use crate::consts::{
    HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE, TIME_SEPARATOR,
};
use regex_lite::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A time of day with second precision, without a date or time zone.
///
/// Equality, ordering and hashing follow the second of the day, so
/// `23:59:59` is the greatest value and `00:00:00` the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Error type for time construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Hour outside `0..24`.
    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u8),

    /// Minute outside `0..60`.
    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u8),

    /// Second outside `0..60`.
    #[error("Invalid second: {0} (must be 0-59)")]
    InvalidSecond(u8),

    /// Minutes-of-day outside `0..1440`.
    #[error("Invalid minutes of day: {0} (must be 0-1439)")]
    InvalidMinutesOfDay(i32),

    /// The input matched none of the supported time patterns.
    #[error("Invalid time string: {0}")]
    InvalidFormat(String),
}

/// Time components that [`LocalTime::by_adding`] can shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeComponent {
    Hour,
    Minute,
}

/// Hour, minute and second, with the colons optional.
#[allow(clippy::expect_used)]
static HMS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):?(\d{2}):?(\d{2})").expect("hard-coded pattern"));

/// Hour and minute, with the colon optional.
#[allow(clippy::expect_used)]
static HM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):?(\d{2})").expect("hard-coded pattern"));

/// A bare one- or two-digit number, read as minutes from now.
#[allow(clippy::expect_used)]
static RELATIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}").expect("hard-coded pattern"));

impl LocalTime {
    /// Creates a LocalTime from hour, minute and second.
    ///
    /// # Errors
    /// Returns the matching `TimeError` variant when a component is out of
    /// range. Negative components are unrepresentable by construction.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour >= HOURS_PER_DAY {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeError::InvalidMinute(minute));
        }
        if second >= SECONDS_PER_MINUTE {
            return Err(TimeError::InvalidSecond(second));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Creates a LocalTime from hour and minute, with the second set to zero.
    ///
    /// # Errors
    /// Returns the matching `TimeError` variant when a component is out of range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeError> {
        Self::new(hour, minute, 0)
    }

    /// Creates a LocalTime from the number of minutes since midnight, with
    /// the second set to zero.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidMinutesOfDay` outside `0..1440`.
    pub fn from_minutes_of_day(minutes_of_day: i32) -> Result<Self, TimeError> {
        if minutes_of_day < 0 || minutes_of_day >= MINUTES_PER_DAY as i32 {
            return Err(TimeError::InvalidMinutesOfDay(minutes_of_day));
        }

        Self::from_hm(
            (minutes_of_day / i32::from(MINUTES_PER_HOUR)) as u8,
            (minutes_of_day % i32::from(MINUTES_PER_HOUR)) as u8,
        )
    }

    /// Creates a LocalTime from the time-of-day fields of an instant in the
    /// given zone.
    pub fn from_instant(instant: Instant, time_zone: TimeZone) -> Self {
        let civil = calendar::civil_from_instant(instant, time_zone);

        Self {
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
        }
    }

    /// Returns the current time of day in the given zone.
    pub fn now<C: Clock>(clock: &C, time_zone: TimeZone) -> Self {
        Self::from_instant(clock.now(), time_zone)
    }

    /// Parses a time string, trying three patterns in order:
    ///
    /// 1. hour, minute and second (`"01:02:03"`, `"202122"`),
    /// 2. hour and minute (`"01:02"`, `"1235"`), second zero,
    /// 3. a bare one- or two-digit number, read as minutes to add to the
    ///    current time in the given zone (truncated to hour and minute).
    ///
    /// The patterns match anywhere in the input, and the first *structural*
    /// match wins: when an input matches a pattern but a field is out of
    /// range, the error is returned without trying the later patterns, so
    /// `"25:00:00"` fails rather than reparsing as `25:00`.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidFormat` when nothing matches, or the field
    /// validation error of the first pattern that matched structurally.
    pub fn from_time_str<C: Clock>(
        time_string: &str,
        clock: &C,
        time_zone: TimeZone,
    ) -> Result<Self, TimeError> {
        if let Some(caps) = HMS_PATTERN.captures(time_string) {
            let hour = capture_field(&caps, 1, time_string)?;
            let minute = capture_field(&caps, 2, time_string)?;
            let second = capture_field(&caps, 3, time_string)?;

            Self::new(hour, minute, second)
        } else if let Some(caps) = HM_PATTERN.captures(time_string) {
            let hour = capture_field(&caps, 1, time_string)?;
            let minute = capture_field(&caps, 2, time_string)?;

            Self::from_hm(hour, minute)
        } else if let Some(matched) = RELATIVE_PATTERN.find(time_string) {
            let minutes: i32 = matched
                .as_str()
                .parse()
                .map_err(|_| TimeError::InvalidFormat(time_string.to_owned()))?;

            Ok(Self::now(clock, time_zone).by_adding(TimeComponent::Minute, minutes))
        } else {
            Err(TimeError::InvalidFormat(time_string.to_owned()))
        }
    }

    /// Returns the hour.
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute.
    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second.
    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Returns the hour as a two-digit string.
    pub fn hour_string(self) -> String {
        format!("{:02}", self.hour)
    }

    /// Returns the minute as a two-digit string.
    pub fn minute_string(self) -> String {
        format!("{:02}", self.minute)
    }

    /// Returns the second as a two-digit string.
    pub fn second_string(self) -> String {
        format!("{:02}", self.second)
    }

    /// Returns the time as an `"HH:MM"` string; seconds are omitted.
    // TODO: support 12-hour formats like "9:00 AM"
    pub fn time_string(self) -> String {
        format!(
            "{}{}{}",
            self.hour_string(),
            TIME_SEPARATOR,
            self.minute_string()
        )
    }

    /// Returns the instant at this time of day relative to the given base
    /// instant: the second of the day is added to the base and the zone
    /// offset is subtracted.
    pub fn to_instant(self, base: Instant, time_zone: TimeZone) -> Instant {
        base.plus_seconds(i64::from(self.second_of_day()) - i64::from(time_zone.offset_seconds()))
    }

    /// Returns the minutes since midnight; seconds are ignored.
    pub const fn minutes_of_day(self) -> u32 {
        self.hour as u32 * MINUTES_PER_HOUR as u32 + self.minute as u32
    }

    /// Returns the seconds since midnight.
    pub const fn second_of_day(self) -> u32 {
        (self.hour as u32 * MINUTES_PER_HOUR as u32 + self.minute as u32)
            * SECONDS_PER_MINUTE as u32
            + self.second as u32
    }

    /// Returns a time shifted by the given number of hours or minutes,
    /// wrapping around midnight in both directions. The second is reset to
    /// zero. Residues are always non-negative, so negative shifts wrap
    /// rather than underflow.
    pub fn by_adding(self, component: TimeComponent, value: i32) -> Self {
        let hours_per_day = i32::from(HOURS_PER_DAY);
        let minutes_per_hour = i32::from(MINUTES_PER_HOUR);

        match component {
            TimeComponent::Hour => {
                let hour = (i32::from(self.hour) + value).rem_euclid(hours_per_day) as u8;

                Self {
                    hour,
                    minute: self.minute,
                    second: 0,
                }
            }
            TimeComponent::Minute => {
                let total = i32::from(self.minute) + value;
                let hour = (i32::from(self.hour) + total.div_euclid(minutes_per_hour))
                    .rem_euclid(hours_per_day) as u8;
                let minute = total.rem_euclid(minutes_per_hour) as u8;

                Self {
                    hour,
                    minute,
                    second: 0,
                }
            }
        }
    }

    /// Returns the interval between two times in minutes; seconds are
    /// ignored. When `from` is after `to`, `to` is taken to be on the next
    /// day, so the result stays non-negative across midnight.
    pub fn interval(from: Self, to: Self) -> i32 {
        let minutes_per_hour = i32::from(MINUTES_PER_HOUR);
        let from_minutes = i32::from(from.hour) * minutes_per_hour + i32::from(from.minute);
        let to_minutes = if from > to {
            (i32::from(to.hour) + i32::from(HOURS_PER_DAY)) * minutes_per_hour
                + i32::from(to.minute)
        } else {
            i32::from(to.hour) * minutes_per_hour + i32::from(to.minute)
        };

        to_minutes - from_minutes
    }
}

/// Parses one captured digit group.
fn capture_field(caps: &Captures<'_>, index: usize, input: &str) -> Result<u8, TimeError> {
    caps.get(index)
        .and_then(|group| group.as_str().parse().ok())
        .ok_or_else(|| TimeError::InvalidFormat(input.to_owned()))
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{sep}{:02}{sep}{:02}",
            self.hour,
            self.minute,
            self.second,
            sep = TIME_SEPARATOR
        )
    }
}

impl FromStr for LocalTime {
    type Err = TimeError;

    /// Parses the two structural patterns of [`LocalTime::from_time_str`]
    /// (hour-minute-second and hour-minute). The relative minutes form needs
    /// a clock and is not available here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = HMS_PATTERN.captures(s) {
            let hour = capture_field(&caps, 1, s)?;
            let minute = capture_field(&caps, 2, s)?;
            let second = capture_field(&caps, 3, s)?;

            Self::new(hour, minute, second)
        } else if let Some(caps) = HM_PATTERN.captures(s) {
            let hour = capture_field(&caps, 1, s)?;
            let minute = capture_field(&caps, 2, s)?;

            Self::from_hm(hour, minute)
        } else {
            Err(TimeError::InvalidFormat(s.to_owned()))
        }
    }
}

impl serde::Serialize for LocalTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocalTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
