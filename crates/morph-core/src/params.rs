//! Parameter structures for morph operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (library callers, CLI, etc.) without framework-specific
//! derives or dependencies. Interface layers wrap these structs when they need
//! framework derives (clap, schema generation), converting via `.into()`,
//! while the core keeps a minimal dependency surface.
//!
//! All fields are optional; `Default` produces the "no options" form that the
//! facades accept for plain ISO round-tripping.

use serde::{Deserialize, Serialize};

/// Options accepted by both date/time facades.
///
/// The facade decides how to read `from` and `to`:
///
/// - [`crate::datetime::format_date_string`] treats them as token format
///   strings (`"dd-MM-yyyy HH:mm:ss"`).
/// - [`crate::datetime::format_timestamp`] treats them as timezone labels
///   (`"UTC"`, `"IST"`).
///
/// The two interpretations never mix within one call. Empty strings are
/// treated as if the field were absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatterOptions {
    /// Output token format used when no explicit `to` format is given
    pub format: Option<String>,
    /// Input interpretation: a token format or a timezone label
    pub from: Option<String>,
    /// Output interpretation: a token format or a timezone label
    pub to: Option<String>,
}

impl FormatterOptions {
    /// Options with only the output `format` set.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..Self::default()
        }
    }

    /// Options with `from` and `to` set.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Self::default()
        }
    }
}

/// Options for [`crate::string::is_equal`] comparisons.
///
/// Exactly one comparison runs per call, chosen by the first flag set in the
/// order `starts_with`, `has`, `ends_with`; with no flags set the strings are
/// compared for full equality. `ignore_case` lowercases both sides first and
/// combines with any of the other flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Lowercase both strings before comparing
    pub ignore_case: bool,
    /// Check whether the first string starts with the second
    pub starts_with: bool,
    /// Check whether the first string ends with the second
    pub ends_with: bool,
    /// Check whether the first string contains the second
    pub has: bool,
}
