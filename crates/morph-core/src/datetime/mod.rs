//! Date and timestamp formatting.
//!
//! Two facades sit on top of the token engine and the timezone table:
//!
//! - [`format_date_string`] reads `from`/`to` in [`FormatterOptions`] as
//!   token format strings and re-renders a date string.
//! - [`format_timestamp`] reads `from`/`to` as timezone labels, shifting the
//!   instant through the static offset table before rendering.
//!
//! Both are total functions: malformed input never panics and never escapes
//! as an error. Failure is communicated through [`FormatResult`], whose
//! `Display` output is the verbatim sentinel string (`"Invalid Date"` or
//! `"Invalid Timezone"`) for callers that want the string-based contract.
//!
//! # Module Organization
//!
//! - [`token`]: the six-placeholder format mini-language
//! - [`timezone`]: the read-only offset table and the instant converter
//!
//! # Quick Start
//!
//! ```rust
//! use morph_core::{datetime::format_date_string, params::FormatterOptions};
//!
//! let formatted = format_date_string(
//!     "2023-07-30T15:30:00.000Z",
//!     &FormatterOptions::with_format("dd/MM/yyyy"),
//! );
//! assert_eq!(formatted.to_string(), "30/07/2023");
//! ```

pub mod timezone;
pub mod token;

use std::fmt;

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

pub use timezone::{convert_timezone, TimezoneOffset, TimezoneTable};
pub use token::{format_date, parse_date, Token};

use crate::params::FormatterOptions;

/// Outcome of a facade call.
///
/// The two failure variants are deliberately distinct and never conflated:
/// an unknown timezone label is not an unparseable date. `Display` and
/// [`FormatResult::into_string`] emit the sentinel strings verbatim for
/// callers that need the string-compatible boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatResult {
    /// The formatted output
    Formatted(String),
    /// The input did not parse as a date, or components were out of range
    InvalidDate,
    /// A `from`/`to` timezone label missed the offset table
    InvalidTimezone,
}

impl FormatResult {
    /// Sentinel emitted for [`FormatResult::InvalidDate`].
    pub const INVALID_DATE: &'static str = "Invalid Date";
    /// Sentinel emitted for [`FormatResult::InvalidTimezone`].
    pub const INVALID_TIMEZONE: &'static str = "Invalid Timezone";

    /// Whether the call produced formatted output.
    pub fn is_formatted(&self) -> bool {
        matches!(self, FormatResult::Formatted(_))
    }

    /// The output string, or the verbatim sentinel for a failure.
    pub fn as_str(&self) -> &str {
        match self {
            FormatResult::Formatted(formatted) => formatted,
            FormatResult::InvalidDate => Self::INVALID_DATE,
            FormatResult::InvalidTimezone => Self::INVALID_TIMEZONE,
        }
    }

    /// Consume the result, yielding the output or the verbatim sentinel.
    pub fn into_string(self) -> String {
        match self {
            FormatResult::Formatted(formatted) => formatted,
            FormatResult::InvalidDate => Self::INVALID_DATE.to_string(),
            FormatResult::InvalidTimezone => Self::INVALID_TIMEZONE.to_string(),
        }
    }
}

impl fmt::Display for FormatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a date string based on the provided options, or by default as a
/// canonical ISO-8601 string.
///
/// - `from` present: the input is parsed with it as a token format
///   ([`token::parse_date`]). Otherwise a lenient parse accepts an RFC 3339
///   instant, a civil date-time (`T` or space separator), or a bare date,
///   all interpreted in UTC.
/// - Output uses `to` if present, else `format`, else ISO-8601 with
///   millisecond precision and a `Z` suffix.
/// - Empty option strings count as absent.
///
/// # Examples
///
/// ```rust
/// use morph_core::{datetime::format_date_string, params::FormatterOptions};
///
/// let result = format_date_string(
///     "30-07-2023 15:30:00",
///     &FormatterOptions::between("dd-MM-yyyy HH:mm:ss", "yyyy-MM-dd"),
/// );
/// assert_eq!(result.to_string(), "2023-07-30");
///
/// let invalid = format_date_string("invalid-date-string", &FormatterOptions::default());
/// assert_eq!(invalid.to_string(), "Invalid Date");
/// ```
pub fn format_date_string(date_string: &str, options: &FormatterOptions) -> FormatResult {
    let from = option_value(&options.from);
    let to = option_value(&options.to);
    let format = option_value(&options.format);

    let parsed = match from {
        Some(from) => token::parse_date(date_string, from),
        None => parse_lenient(date_string),
    };
    let Some(timestamp) = parsed else {
        return FormatResult::InvalidDate;
    };

    match to.or(format) {
        Some(pattern) => FormatResult::Formatted(token::render(timestamp, pattern)),
        None => FormatResult::Formatted(iso_string(timestamp)),
    }
}

/// Formats a timestamp based on the provided options, shifting through the
/// built-in timezone offset table.
///
/// See [`format_timestamp_with`] for the semantics; this variant resolves
/// labels against [`TimezoneTable::builtin`].
pub fn format_timestamp(timestamp: &str, options: &FormatterOptions) -> FormatResult {
    format_timestamp_with(TimezoneTable::builtin(), timestamp, options)
}

/// Formats a timestamp based on the provided options, resolving timezone
/// labels against an explicit table.
///
/// - `from` present: the label is looked up *before* the input is examined,
///   so an unknown label yields [`FormatResult::InvalidTimezone`] even when
///   the timestamp is also malformed. On a hit the parsed instant is shifted
///   forward by the source offset, modeling "this literal clock reading
///   occurred in timezone X".
/// - `to` present: looked up after the date check; on a hit the instant is
///   shifted by the target offset. The shift is a pure function of the table
///   offset; no host-local timezone is ever consulted.
/// - Output uses `format` if present, else canonical ISO-8601. In this
///   facade `to` is always a timezone label, never a token format.
///
/// # Examples
///
/// ```rust
/// use morph_core::{datetime::format_timestamp, params::FormatterOptions};
///
/// let options = FormatterOptions {
///     format: Some("yyyy-MM-dd HH:mm:ss".to_string()),
///     from: Some("UTC".to_string()),
///     to: Some("IST".to_string()),
/// };
/// let result = format_timestamp("2023-07-30T02:00:00Z", &options);
/// assert_eq!(result.to_string(), "2023-07-30 07:30:00");
/// ```
pub fn format_timestamp_with(
    table: &TimezoneTable,
    timestamp: &str,
    options: &FormatterOptions,
) -> FormatResult {
    let from = option_value(&options.from);
    let to = option_value(&options.to);
    let format = option_value(&options.format);

    let instant = match from {
        Some(label) => {
            // Label resolution comes first: a bad label wins over a bad date.
            let Some(entry) = table.get(label) else {
                return FormatResult::InvalidTimezone;
            };
            let Some(parsed) = parse_lenient(timestamp) else {
                return FormatResult::InvalidDate;
            };
            let Some(shifted) = convert_timezone(parsed, entry.offset) else {
                return FormatResult::InvalidDate;
            };
            shifted
        }
        None => {
            let Some(parsed) = parse_lenient(timestamp) else {
                return FormatResult::InvalidDate;
            };
            parsed
        }
    };

    let instant = match to {
        Some(label) => {
            let Some(entry) = table.get(label) else {
                return FormatResult::InvalidTimezone;
            };
            let Some(shifted) = convert_timezone(instant, entry.offset) else {
                return FormatResult::InvalidDate;
            };
            shifted
        }
        None => instant,
    };

    match format {
        Some(pattern) => FormatResult::Formatted(token::render(instant, pattern)),
        None => FormatResult::Formatted(iso_string(instant)),
    }
}

/// Empty strings behave like absent options.
fn option_value(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|value| !value.is_empty())
}

/// Best-effort parse of common date layouts, all read as UTC.
fn parse_lenient(input: &str) -> Option<Timestamp> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Some(timestamp);
    }
    if let Ok(datetime) = input.parse::<civil::DateTime>() {
        return datetime
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }
    if let Ok(date) = input.parse::<civil::Date>() {
        return date
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }
    None
}

/// Canonical ISO-8601 serialization: millisecond precision, `Z` suffix.
fn iso_string(timestamp: Timestamp) -> String {
    let datetime = timestamp.to_zoned(TimeZone::UTC).datetime();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second(),
        datetime.millisecond(),
    )
}
