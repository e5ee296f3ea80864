//! Static timezone offset table and the instant-shifting converter.
//!
//! Timezone handling here is deliberately not a tz-database: a label such as
//! `"IST"` resolves through a flat, read-only table to a signed minute offset
//! and a display name. The built-in table ships inside the crate as
//! `timezones.json` and is deserialized exactly once, before any lookup;
//! alternate tables can be loaded from a file and passed to
//! [`crate::datetime::format_timestamp_with`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use jiff::Timestamp;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

static BUILTIN: Lazy<TimezoneTable> = Lazy::new(|| {
    serde_json::from_str(include_str!("timezones.json"))
        .expect("packaged timezone table must deserialize")
});

/// A single entry of the offset table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneOffset {
    /// Signed offset from UTC in minutes (east positive)
    pub offset: i32,
    /// Display name for the label
    pub place: String,
}

/// Read-only mapping from timezone label to its offset entry.
///
/// Lookups of unknown labels are a recoverable miss, never a crash: the
/// timestamp facade degrades to its invalid-timezone result. There is no
/// mutation path after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneTable {
    entries: HashMap<String, TimezoneOffset>,
}

impl TimezoneTable {
    /// The table packaged with the crate.
    pub fn builtin() -> &'static TimezoneTable {
        &BUILTIN
    }

    /// Deserialize a table from JSON text.
    ///
    /// The schema is an open key-value mapping:
    /// `{ "IST": { "offset": 330, "place": "India Standard Time" }, ... }`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MorphError::Serialization`] when the text is not a
    /// valid table document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MorphError::FileSystem`] when the file cannot be
    /// read, or [`crate::MorphError::Serialization`] when its contents do
    /// not deserialize.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|source| crate::MorphError::file_system(path, source))?;
        Self::from_json(&raw)
    }

    /// Look up a label. A miss is a first-class outcome.
    pub fn get(&self, label: &str) -> Option<&TimezoneOffset> {
        self.entries.get(label)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(label, entry)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimezoneOffset)> {
        self.entries.iter().map(|(label, entry)| (label.as_str(), entry))
    }
}

/// Shifts an instant by a wall-clock delta in minutes.
///
/// This is pure arithmetic: it does not consult any offset table, and it
/// carries no ambient notion of a host-local timezone. Offset resolution is
/// entirely the caller's responsibility, which keeps the function a
/// deterministic value of its two arguments on every machine.
///
/// Returns `None` only when the shifted instant leaves the representable
/// timestamp range.
pub fn convert_timezone(timestamp: Timestamp, delta_minutes: i32) -> Option<Timestamp> {
    let shift = i64::from(delta_minutes).checked_mul(60_000)?;
    let shifted = timestamp.as_millisecond().checked_add(shift)?;
    Timestamp::from_millisecond(shifted).ok()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::{convert_timezone, TimezoneTable};

    #[test]
    fn builtin_table_resolves_known_labels() {
        let table = TimezoneTable::builtin();
        assert_eq!(table.get("UTC").map(|entry| entry.offset), Some(0));
        assert_eq!(table.get("IST").map(|entry| entry.offset), Some(330));
        assert_eq!(table.get("EST").map(|entry| entry.offset), Some(-300));
        assert!(!table.is_empty());
    }

    #[test]
    fn unknown_label_is_a_miss_not_a_crash() {
        assert!(TimezoneTable::builtin().get("Invalid_Timezone").is_none());
        assert!(TimezoneTable::builtin().get("utc").is_none());
    }

    #[test]
    fn table_loads_from_json_text() {
        let table = TimezoneTable::from_json(
            r#"{ "XQT": { "offset": 195, "place": "Test Zone" } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("XQT").unwrap().place, "Test Zone");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TimezoneTable::from_json("{ not json").is_err());
        assert!(TimezoneTable::from_json(r#"{ "XQT": { "offset": "oops" } }"#).is_err());
    }

    #[test]
    fn convert_shifts_by_minutes() {
        let start = Timestamp::from_second(1690682400).unwrap(); // 2023-07-30T02:00:00Z
        let shifted = convert_timezone(start, 330).unwrap();
        assert_eq!(
            shifted,
            Timestamp::from_second(1690682400 + 330 * 60).unwrap()
        );
        // A negative delta walks backwards.
        assert_eq!(convert_timezone(shifted, -330), Some(start));
        // Zero is the identity.
        assert_eq!(convert_timezone(start, 0), Some(start));
    }

    #[test]
    fn convert_rejects_shifts_outside_the_representable_range() {
        let max = Timestamp::MAX;
        assert!(convert_timezone(max, 60).is_none());
    }
}
