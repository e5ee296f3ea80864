//! Core library of small, independent utility functions for arrays, strings,
//! numbers, and dates/timestamps.
//!
//! Every function is a pure, synchronous transformation of its inputs: no
//! shared runtime, no state machine, no I/O beyond the one-time load of the
//! packaged timezone table. Inputs are validated defensively and failures are
//! always signaled, never swallowed.
//!
//! # Error Conventions
//!
//! Two styles coexist deliberately, and callers bridging both layers should
//! not assume uniformity:
//!
//! - The **date/time facades** are total functions returning
//!   [`datetime::FormatResult`], whose failure variants render as the
//!   sentinel strings `"Invalid Date"` and `"Invalid Timezone"`. The
//!   low-level token parser returns `Option` instead.
//! - The **array/string/math helpers** fail fast with a typed
//!   [`MorphError`] wherever a genuine runtime condition remains (empty
//!   statistics input, index out of range, checked-arithmetic overflow).
//!
//! # Quick Start
//!
//! ```rust
//! use morph_core::{format_date_string, format_timestamp, FormatterOptions};
//!
//! // Reformat an ISO instant.
//! let result = format_date_string(
//!     "2023-07-30T15:30:00.000Z",
//!     &FormatterOptions::with_format("dd/MM/yyyy"),
//! );
//! assert_eq!(result.to_string(), "30/07/2023");
//!
//! // Shift a timestamp between timezone labels.
//! let options = FormatterOptions {
//!     format: Some("HH:mm".to_string()),
//!     from: Some("UTC".to_string()),
//!     to: Some("IST".to_string()),
//! };
//! assert_eq!(format_timestamp("2023-07-30T02:00:00Z", &options).to_string(), "07:30");
//! ```

pub mod array;
pub mod datetime;
pub mod error;
pub mod math;
pub mod params;
pub mod string;

// Re-export commonly used types
pub use datetime::{
    convert_timezone, format_date, format_date_string, format_timestamp, format_timestamp_with,
    parse_date, FormatResult, TimezoneOffset, TimezoneTable, Token,
};
pub use error::{MorphError, Result};
pub use params::{CompareOptions, FormatterOptions};
