/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for first-of-month derivations
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Hours in a day
pub const HOURS_PER_DAY: u8 = 24;
/// Minutes in an hour
pub const MINUTES_PER_HOUR: u8 = 60;
/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Minutes in a day
pub const MINUTES_PER_DAY: u32 = 1440;
/// Seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time parts of a datetime string
pub const DATETIME_SEPARATOR: char = 'T';
