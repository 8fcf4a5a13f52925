use crate::calendar::{Instant, TimeZone};
use crate::clock::Clock;
use crate::consts::DATETIME_SEPARATOR;
use crate::time::{LocalTime, TimeError};
use crate::{DateError, LocalDate, Month};
use std::fmt;
use std::str::FromStr;

/// A calendar date combined with a time of day, without a time zone.
///
/// Equality, ordering and hashing are lexicographic over (date, time),
/// which matches instant ordering for fixed-offset zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    local_date: LocalDate,
    local_time: LocalTime,
}

/// Error type for datetime construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// The date part was invalid.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The time part was invalid.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// The input was not a `<date>T<time>` string.
    #[error("Invalid datetime string: {0}")]
    InvalidFormat(String),
}

impl LocalDateTime {
    /// Creates a LocalDateTime from a date and a time.
    pub const fn new(local_date: LocalDate, local_time: LocalTime) -> Self {
        Self {
            local_date,
            local_time,
        }
    }

    /// Creates a LocalDateTime from numeric fields. The date is validated
    /// first, then the time.
    ///
    /// # Errors
    /// Propagates the first component error encountered.
    pub fn from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateTimeError> {
        let local_date = LocalDate::new(year, month, day)?;
        let local_time = LocalTime::new(hour, minute, second)?;

        Ok(Self::new(local_date, local_time))
    }

    /// Creates a LocalDateTime from an instant in the given zone, decomposing
    /// the date and the time from the same instant.
    pub fn from_instant(instant: Instant, time_zone: TimeZone) -> Self {
        Self {
            local_date: LocalDate::from_instant(instant, time_zone),
            local_time: LocalTime::from_instant(instant, time_zone),
        }
    }

    /// Returns the current date and time in the given zone.
    pub fn now<C: Clock>(clock: &C, time_zone: TimeZone) -> Self {
        Self::from_instant(clock.now(), time_zone)
    }

    /// Returns the instant for this datetime in the given zone, as the
    /// date's midnight instant plus the raw seconds of the day.
    ///
    /// With a zone whose offset changes during the day this flat addition
    /// and a full civil composition would disagree; fixed-offset zones make
    /// them equal.
    pub fn to_instant(self, time_zone: TimeZone) -> Instant {
        self.local_date
            .to_instant(time_zone)
            .plus_seconds(i64::from(self.local_time.second_of_day()))
    }

    /// Returns the date part.
    #[inline]
    pub const fn date(self) -> LocalDate {
        self.local_date
    }

    /// Returns the time part.
    #[inline]
    pub const fn time(self) -> LocalTime {
        self.local_time
    }

    /// Returns the year.
    pub const fn year(self) -> i32 {
        self.local_date.year()
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.local_date.month()
    }

    /// Returns the day.
    pub const fn day(self) -> u8 {
        self.local_date.day()
    }

    /// Returns the hour.
    pub const fn hour(self) -> u8 {
        self.local_time.hour()
    }

    /// Returns the minute.
    pub const fn minute(self) -> u8 {
        self.local_time.minute()
    }

    /// Returns the second.
    pub const fn second(self) -> u8 {
        self.local_time.second()
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.local_date, DATETIME_SEPARATOR, self.local_time
        )
    }
}

impl FromStr for LocalDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_part, time_part) = s
            .trim()
            .split_once(DATETIME_SEPARATOR)
            .ok_or_else(|| DateTimeError::InvalidFormat(s.to_owned()))?;

        let local_date: LocalDate = date_part.parse()?;
        let local_time: LocalTime = time_part.parse()?;

        Ok(Self::new(local_date, local_time))
    }
}

impl serde::Serialize for LocalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_with_date_and_time() {
        let local_date = LocalDate::new(2021, 11, 15).unwrap();
        let local_time = LocalTime::from_hm(7, 55).unwrap();
        let datetime = LocalDateTime::new(local_date, local_time);

        assert_eq!(datetime.date(), local_date);
        assert_eq!(datetime.time(), local_time);
    }

    #[test]
    fn test_from_fields() {
        let datetime = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 33).unwrap();

        assert_eq!(datetime.year(), 2021);
        assert_eq!(datetime.month(), Month::March);
        assert_eq!(datetime.day(), 17);
        assert_eq!(datetime.hour(), 1);
        assert_eq!(datetime.minute(), 22);
        assert_eq!(datetime.second(), 33);
    }

    #[test]
    fn test_from_fields_invalid_date() {
        assert!(matches!(
            LocalDateTime::from_fields(2021, 13, 17, 1, 22, 33),
            Err(DateTimeError::Date(DateError::InvalidMonth(13)))
        ));
    }

    #[test]
    fn test_from_fields_invalid_time() {
        assert!(matches!(
            LocalDateTime::from_fields(2021, 3, 17, 1, 22, 61),
            Err(DateTimeError::Time(TimeError::InvalidSecond(61)))
        ));
    }

    #[test]
    fn test_from_fields_invalid_date_wins_over_invalid_time() {
        // Date is validated first
        assert!(matches!(
            LocalDateTime::from_fields(2021, 13, 17, 25, 22, 33),
            Err(DateTimeError::Date(_))
        ));
    }

    #[test]
    fn test_from_instant() {
        // 2021-03-17 01:22:33+00:00
        let datetime =
            LocalDateTime::from_instant(Instant::from_epoch_seconds(1_615_944_153), TimeZone::UTC);

        assert_eq!(datetime.year(), 2021);
        assert_eq!(datetime.month(), Month::March);
        assert_eq!(datetime.day(), 17);
        assert_eq!(datetime.hour(), 1);
        assert_eq!(datetime.minute(), 22);
        assert_eq!(datetime.second(), 33);
    }

    #[test]
    fn test_to_instant() {
        let local_date = LocalDate::new(2021, 11, 15).unwrap();
        let local_time = LocalTime::from_hm(7, 55).unwrap();
        let datetime = LocalDateTime::new(local_date, local_time);

        assert_eq!(
            datetime.to_instant(TimeZone::UTC),
            Instant::from_epoch_seconds(1_636_962_900)
        );
    }

    #[test]
    fn test_to_instant_round_trip_with_offset() {
        let zone = TimeZone::fixed(9 * 3600);
        let datetime = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 33).unwrap();
        assert_eq!(
            LocalDateTime::from_instant(datetime.to_instant(zone), zone),
            datetime
        );
    }

    #[test]
    fn test_equatable() {
        // 2021-03-17 01:22:33+00:00
        let from_instant =
            LocalDateTime::from_instant(Instant::from_epoch_seconds(1_615_944_153), TimeZone::UTC);
        let from_fields = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 33).unwrap();

        assert_eq!(from_instant, from_fields);
    }

    #[test]
    fn test_comparable() {
        let earlier = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 33).unwrap();
        let later = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 34).unwrap();
        assert!(earlier < later);

        let next_day = LocalDateTime::from_fields(2021, 3, 18, 0, 0, 0).unwrap();
        assert!(later < next_day);
    }

    #[test]
    fn test_ordering_agrees_with_instants() {
        let a = LocalDateTime::from_fields(2021, 3, 17, 23, 59, 59).unwrap();
        let b = LocalDateTime::from_fields(2021, 3, 18, 0, 0, 0).unwrap();
        assert_eq!(
            a.cmp(&b),
            a.to_instant(TimeZone::UTC).cmp(&b.to_instant(TimeZone::UTC))
        );
    }

    #[test]
    fn test_hashable() {
        let datetimes: HashSet<LocalDateTime> = [
            LocalDateTime::from_fields(2021, 11, 18, 1, 2, 0).unwrap(),
            LocalDateTime::from_fields(2021, 11, 18, 1, 2, 0).unwrap(), // Duplicate value
            LocalDateTime::from_fields(2021, 11, 18, 1, 3, 0).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(datetimes.len(), 2);
    }

    #[test]
    fn test_display_and_from_str() {
        let datetime = LocalDateTime::from_fields(2021, 3, 17, 1, 22, 33).unwrap();
        assert_eq!(datetime.to_string(), "2021-03-17T01:22:33");
        assert_eq!(
            "2021-03-17T01:22:33".parse::<LocalDateTime>().unwrap(),
            datetime
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            "2021-03-17".parse::<LocalDateTime>(),
            Err(DateTimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2021-13-17T01:22:33".parse::<LocalDateTime>(),
            Err(DateTimeError::Date(_))
        ));
        assert!(matches!(
            "2021-03-17T25:22:33".parse::<LocalDateTime>(),
            Err(DateTimeError::Time(_))
        ));
    }

    #[test]
    fn test_serde() {
        let datetime = LocalDateTime::from_fields(2021, 11, 18, 1, 2, 3).unwrap();
        let json = serde_json::to_string(&datetime).unwrap();
        assert_eq!(json, r#""2021-11-18T01:02:03""#);

        let parsed: LocalDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(datetime, parsed);

        let invalid: Result<LocalDateTime, _> = serde_json::from_str(r#""2021-13-18T01:02:03""#);
        assert!(invalid.is_err());
    }
}
