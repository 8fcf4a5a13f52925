//! Pattern-driven date formatting and parsing.
//!
//! A [`DateFormat`] is compiled once from a pattern string and then applied
//! to any number of dates, in the manner of a configured platform date
//! formatter. Supported tokens: runs of `y` (year), `M` (month) and `d`
//! (day); every other character is matched literally. A run length greater
//! than one fixes the zero-padded width for both formatting and parsing; a
//! single-letter token formats without padding and parses greedily.
//!
//! Localized month and weekday names are out of scope.

use crate::{DateError, LocalDate};
use std::fmt::Write as _;

/// A compiled date pattern such as `"yyyy-MM-dd"` or `"MM/dd/yyyy"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    tokens: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year(usize),
    Month(usize),
    Day(usize),
    Literal(char),
}

impl DateFormat {
    /// Compiles a pattern.
    ///
    /// # Errors
    /// Returns `DateError::InvalidPattern` unless the pattern contains
    /// exactly one year, one month and one day field.
    pub fn new(pattern: &str) -> Result<Self, DateError> {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                'y' | 'M' | 'd' => {
                    let mut len = 1;
                    while chars.peek() == Some(&c) {
                        chars.next();
                        len += 1;
                    }
                    tokens.push(match c {
                        'y' => Token::Year(len),
                        'M' => Token::Month(len),
                        _ => Token::Day(len),
                    });
                }
                literal => tokens.push(Token::Literal(literal)),
            }
        }

        let years = tokens.iter().filter(|t| matches!(t, Token::Year(_))).count();
        let months = tokens.iter().filter(|t| matches!(t, Token::Month(_))).count();
        let days = tokens.iter().filter(|t| matches!(t, Token::Day(_))).count();
        if years != 1 || months != 1 || days != 1 {
            return Err(DateError::InvalidPattern(pattern.to_owned()));
        }

        Ok(Self { tokens })
    }

    /// The ISO 8601 calendar date pattern, `yyyy-MM-dd`.
    pub fn iso() -> Self {
        Self {
            tokens: vec![
                Token::Year(4),
                Token::Literal('-'),
                Token::Month(2),
                Token::Literal('-'),
                Token::Day(2),
            ],
        }
    }

    /// Formats a date according to the pattern.
    pub fn format(&self, date: LocalDate) -> String {
        let mut out = String::new();

        for &token in &self.tokens {
            // write! to a String cannot fail
            let _ = match token {
                Token::Year(width) => write!(out, "{:0width$}", date.year()),
                Token::Month(width) => write!(out, "{:0width$}", date.month().number()),
                Token::Day(width) => write!(out, "{:0width$}", date.day()),
                Token::Literal(c) => {
                    out.push(c);
                    Ok(())
                }
            };
        }

        out
    }

    /// Parses a date according to the pattern, re-validating the components
    /// through the numeric constructor.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFormat` when the input does not match the
    /// pattern, or the constructor's error when the matched components do
    /// not form a valid date.
    pub fn parse(&self, input: &str) -> Result<LocalDate, DateError> {
        let mut rest = input.trim();
        let mut year: i64 = 0;
        let mut month: i64 = 0;
        let mut day: i64 = 0;

        for &token in &self.tokens {
            match token {
                Token::Literal(c) => {
                    rest = rest
                        .strip_prefix(c)
                        .ok_or_else(|| DateError::InvalidFormat(input.to_owned()))?;
                }
                Token::Year(width) => (year, rest) = take_digits(rest, width, 4, input)?,
                Token::Month(width) => (month, rest) = take_digits(rest, width, 2, input)?,
                Token::Day(width) => (day, rest) = take_digits(rest, width, 2, input)?,
            }
        }

        if !rest.is_empty() {
            return Err(DateError::InvalidFormat(input.to_owned()));
        }

        LocalDate::new(year as i32, clamp_u8(month), clamp_u8(day))
    }
}

/// Consumes digits from the front of `rest`. A fixed `width > 1` requires
/// exactly that many digits; `width == 1` takes greedily up to `max`.
fn take_digits<'a>(
    rest: &'a str,
    width: usize,
    max: usize,
    input: &str,
) -> Result<(i64, &'a str), DateError> {
    let available = rest.bytes().take_while(u8::is_ascii_digit).count();
    let wanted = if width > 1 { width } else { available.min(max) };
    if wanted == 0 || available < wanted {
        return Err(DateError::InvalidFormat(input.to_owned()));
    }

    let (digits, rest) = rest.split_at(wanted);
    let value = digits
        .parse::<i64>()
        .map_err(|_| DateError::InvalidFormat(input.to_owned()))?;

    Ok((value, rest))
}

/// Narrows a parsed component for the constructor; out-of-range values
/// saturate to 255, which the constructor rejects with its own error.
fn clamp_u8(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_format() {
        let format = DateFormat::iso();
        let date = LocalDate::new(2021, 3, 22).unwrap();
        assert_eq!(format.format(date), "2021-03-22");
    }

    #[test]
    fn test_iso_parse() {
        let format = DateFormat::iso();
        let date = format.parse("2021-03-22").unwrap();
        assert_eq!((date.year(), date.month().number(), date.day()), (2021, 3, 22));
    }

    #[test]
    fn test_month_first_pattern() {
        let format = DateFormat::new("MM/dd/yyyy").unwrap();
        let date = LocalDate::new(1991, 8, 15).unwrap();
        assert_eq!(format.format(date), "08/15/1991");
        assert_eq!(format.parse("08/15/1991").unwrap(), date);
    }

    #[test]
    fn test_compact_pattern() {
        let format = DateFormat::new("yyyyMMdd").unwrap();
        let date = LocalDate::new(2021, 12, 5).unwrap();
        assert_eq!(format.format(date), "20211205");
        assert_eq!(format.parse("20211205").unwrap(), date);
    }

    #[test]
    fn test_unpadded_tokens() {
        let format = DateFormat::new("d.M.yyyy").unwrap();
        let date = LocalDate::new(2021, 3, 2).unwrap();
        assert_eq!(format.format(date), "2.3.2021");
        assert_eq!(format.parse("2.3.2021").unwrap(), date);
        assert_eq!(format.parse("02.03.2021").unwrap(), date);
    }

    #[test]
    fn test_round_trip() {
        let format = DateFormat::iso();
        let date = LocalDate::new(2024, 2, 29).unwrap();
        assert_eq!(format.parse(&format.format(date)).unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_mismatched_input() {
        let format = DateFormat::iso();
        assert!(format.parse("2021/03/22").is_err());
        assert!(format.parse("2021-03").is_err());
        assert!(format.parse("2021-03-22X").is_err());
        assert!(format.parse("not a date").is_err());
        assert!(format.parse("").is_err());
    }

    #[test]
    fn test_parse_revalidates_components() {
        let format = DateFormat::iso();
        assert!(matches!(
            format.parse("2021-02-29"),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            format.parse("2021-13-01"),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            DateFormat::new("yyyy-MM"),
            Err(DateError::InvalidPattern(_))
        ));
        assert!(matches!(
            DateFormat::new("yyyy-MM-dd-dd"),
            Err(DateError::InvalidPattern(_))
        ));
        assert!(matches!(
            DateFormat::new(""),
            Err(DateError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let format = DateFormat::iso();
        assert_eq!(
            format.parse("  2021-03-22  ").unwrap(),
            LocalDate::new(2021, 3, 22).unwrap()
        );
    }
}
