//! Token-based date parsing and formatting.
//!
//! Format strings are a mini-language of six placeholders interleaved with
//! literal text:
//!
//! | Token  | Field              |
//! |--------|--------------------|
//! | `yyyy` | four-digit year    |
//! | `MM`   | month, 01-12       |
//! | `dd`   | day of month       |
//! | `HH`   | hour, 00-23        |
//! | `mm`   | minute             |
//! | `ss`   | second             |
//!
//! The token set is closed. Any other run of letters is literal text: it
//! passes through unchanged when formatting, and when parsing it consumes one
//! run of digits positionally without contributing a field.
//!
//! All calendar fields are read and written in UTC.

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::{MorphError, Result};

/// A single placeholder recognized in a token format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `yyyy`
    Year,
    /// `MM`
    Month,
    /// `dd`
    Day,
    /// `HH`
    Hour,
    /// `mm`
    Minute,
    /// `ss`
    Second,
    /// A run of letters matching none of the six placeholders. During
    /// parsing it still consumes one digit run but carries no value.
    Unrecognized,
}

impl Token {
    /// Map a run of letters from a format string to its token.
    pub fn from_run(run: &str) -> Token {
        match run {
            "yyyy" => Token::Year,
            "MM" => Token::Month,
            "dd" => Token::Day,
            "HH" => Token::Hour,
            "mm" => Token::Minute,
            "ss" => Token::Second,
            _ => Token::Unrecognized,
        }
    }
}

/// Parses a date string against a token format.
///
/// The format is split into maximal runs of ASCII letters and the input into
/// maximal runs of ASCII digits; the two sequences must have the same length
/// (a strict positional arity check, not a tolerant scan). Recognized tokens
/// assign their digit run to the matching calendar field; unassigned fields
/// default to `0000-01-01 00:00:00`. The resulting civil date-time is
/// interpreted in UTC.
///
/// Returns `None` for empty arguments, an arity mismatch, a digit run that
/// does not parse as an integer, or components that do not form a valid
/// date-time. This layer never panics and never returns an error type;
/// `None` is the documented contract for direct callers, and the facades
/// translate it to their invalid-date result.
///
/// # Examples
///
/// ```rust
/// use morph_core::datetime::parse_date;
///
/// let parsed = parse_date("30-07-2023 15:30:00", "dd-MM-yyyy HH:mm:ss");
/// assert!(parsed.is_some());
///
/// // Seven digit runs against three format parts: arity mismatch.
/// assert!(parse_date("2023-07-30T15:30:00.000Z", "dd-MM-yyyy").is_none());
/// ```
pub fn parse_date(date_string: &str, format: &str) -> Option<Timestamp> {
    if date_string.is_empty() || format.is_empty() {
        return None;
    }

    let format_parts: Vec<&str> = format.split(|ch: char| !ch.is_ascii_alphabetic()).collect();
    let date_parts: Vec<&str> = date_string.split(|ch: char| !ch.is_ascii_digit()).collect();

    if format_parts.len() != date_parts.len() {
        return None;
    }

    let mut year: i16 = 0;
    let mut month: i8 = 1;
    let mut day: i8 = 1;
    let mut hour: i8 = 0;
    let mut minute: i8 = 0;
    let mut second: i8 = 0;

    for (run, digits) in format_parts.into_iter().zip(date_parts) {
        // Every position must hold an integer, even one aligned with an
        // unrecognized token.
        let value: i64 = digits.parse().ok()?;
        match Token::from_run(run) {
            Token::Year => year = i16::try_from(value).ok()?,
            Token::Month => month = i8::try_from(value).ok()?,
            Token::Day => day = i8::try_from(value).ok()?,
            Token::Hour => hour = i8::try_from(value).ok()?,
            Token::Minute => minute = i8::try_from(value).ok()?,
            Token::Second => second = i8::try_from(value).ok()?,
            Token::Unrecognized => {}
        }
    }

    let datetime = DateTime::new(year, month, day, hour, minute, second, 0).ok()?;
    let zoned = datetime.to_zoned(TimeZone::UTC).ok()?;
    Some(zoned.timestamp())
}

/// Formats a timestamp according to a token format.
///
/// Every non-overlapping occurrence of a recognized token is replaced with
/// the corresponding UTC field, zero-padded (year to four digits, the rest to
/// two). All other characters pass through unchanged.
///
/// # Errors
///
/// Returns [`MorphError::InvalidInput`] if the format string is empty. The
/// timestamp itself is valid by construction, so no invalid-date error
/// exists at this layer.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use morph_core::datetime::format_date;
///
/// let timestamp = Timestamp::from_second(1690731000).unwrap(); // 2023-07-30 15:30:00 UTC
/// assert_eq!(format_date(timestamp, "dd/MM/yyyy").unwrap(), "30/07/2023");
/// ```
pub fn format_date(timestamp: Timestamp, format: &str) -> Result<String> {
    if format.is_empty() {
        return Err(MorphError::invalid_input("format")
            .with_reason("token format string must be non-empty"));
    }
    Ok(render(timestamp, format))
}

/// Infallible formatting core shared with the facades, which validate (or
/// default) the format string themselves.
pub(crate) fn render(timestamp: Timestamp, format: &str) -> String {
    let datetime = timestamp.to_zoned(TimeZone::UTC).datetime();

    // Fixed left-to-right precedence: the four-letter token is checked before
    // any two-letter token.
    let replacements: [(&str, String); 6] = [
        ("yyyy", format!("{:04}", datetime.year())),
        ("MM", format!("{:02}", datetime.month())),
        ("dd", format!("{:02}", datetime.day())),
        ("HH", format!("{:02}", datetime.hour())),
        ("mm", format!("{:02}", datetime.minute())),
        ("ss", format!("{:02}", datetime.second())),
    ];

    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    'scan: while let Some(first) = rest.chars().next() {
        for (token, value) in &replacements {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(first);
        rest = &rest[first.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use jiff::Timestamp;

    use super::{format_date, parse_date, render, Token};

    fn utc_timestamp(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Timestamp {
        date(year, month, day)
            .at(hour, minute, second, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid civil datetime")
            .timestamp()
    }

    #[test]
    fn token_mapping_is_closed() {
        assert_eq!(Token::from_run("yyyy"), Token::Year);
        assert_eq!(Token::from_run("MM"), Token::Month);
        assert_eq!(Token::from_run("ss"), Token::Second);
        // Case matters: `mm` is minutes, `mM` is nothing.
        assert_eq!(Token::from_run("mM"), Token::Unrecognized);
        assert_eq!(Token::from_run("TZ"), Token::Unrecognized);
        assert_eq!(Token::from_run(""), Token::Unrecognized);
    }

    #[test]
    fn parses_all_six_fields() {
        let parsed = parse_date("30-07-2023 15:30:45", "dd-MM-yyyy HH:mm:ss");
        assert_eq!(parsed, Some(utc_timestamp(2023, 7, 30, 15, 30, 45)));
    }

    #[test]
    fn missing_fields_default_to_start_of_calendar() {
        let parsed = parse_date("2023", "yyyy");
        assert_eq!(parsed, Some(utc_timestamp(2023, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn arity_mismatch_is_none() {
        // The trailing `Z` produces an extra empty digit run, seven runs in
        // total, against three format parts.
        assert!(parse_date("2023-07-30T15:30:00.000Z", "dd-MM-yyyy").is_none());
        assert!(parse_date("30-07-2023", "dd-MM-yyyy HH:mm:ss").is_none());
    }

    #[test]
    fn non_numeric_component_is_none() {
        assert!(parse_date("30-XX-2023 15:30:00", "dd-MM-yyyy HH:mm:ss").is_none());
        assert!(parse_date("date-07-2023 15:30:00", "dd-MM-yyyy HH:mm:ss").is_none());
    }

    #[test]
    fn empty_arguments_are_none() {
        assert!(parse_date("", "dd-MM-yyyy").is_none());
        assert!(parse_date("30-07-2023", "").is_none());
    }

    #[test]
    fn out_of_range_components_are_none() {
        assert!(parse_date("2023-13-01", "yyyy-MM-dd").is_none());
        assert!(parse_date("2023-01-01 25:00:00", "yyyy-MM-dd HH:mm:ss").is_none());
    }

    #[test]
    fn unrecognized_run_consumes_a_digit_run_without_validation() {
        // `zzzz` is not a token, so the year stays at its default.
        let parsed = parse_date("30-07-2023", "dd-MM-zzzz");
        assert_eq!(parsed, Some(utc_timestamp(0, 7, 30, 0, 0, 0)));
    }

    #[test]
    fn formats_with_literals_and_padding() {
        let timestamp = utc_timestamp(2023, 7, 30, 9, 5, 7);
        assert_eq!(
            format_date(timestamp, "yyyy-MM-dd HH:mm:ss").unwrap(),
            "2023-07-30 09:05:07"
        );
        assert_eq!(format_date(timestamp, "dd/MM/yyyy").unwrap(), "30/07/2023");
        // Unrecognized letters are literal text.
        assert_eq!(
            format_date(timestamp, "dd.MM.yyyy at HH:mm").unwrap(),
            "30.07.2023 at 09:05"
        );
    }

    #[test]
    fn format_rejects_empty_format() {
        let timestamp = utc_timestamp(2023, 7, 30, 0, 0, 0);
        assert!(format_date(timestamp, "").is_err());
    }

    #[test]
    fn round_trip_preserves_utc_fields() {
        let format = "yyyy-MM-dd HH:mm:ss";
        let original = utc_timestamp(2021, 11, 3, 23, 59, 58);
        let rendered = render(original, format);
        assert_eq!(parse_date(&rendered, format), Some(original));
    }
}
