//! Command dispatch for the morph CLI.

use std::fmt::Write;

use log::debug;
use morph_core::{format_date_string, format_timestamp_with, FormatterOptions, TimezoneTable};

/// Dispatches parsed commands against the core library.
///
/// Owns the timezone table loaded from `--timezones`, falling back to the
/// table packaged with `morph-core`.
pub struct Cli {
    table: Option<TimezoneTable>,
}

impl Cli {
    /// Create a dispatcher, optionally with a table loaded from disk.
    pub fn new(table: Option<TimezoneTable>) -> Self {
        Self { table }
    }

    fn table(&self) -> &TimezoneTable {
        match self.table.as_ref() {
            Some(table) => table,
            None => TimezoneTable::builtin(),
        }
    }

    /// Run the date facade; sentinels come back verbatim.
    pub fn format_date(&self, input: &str, options: &FormatterOptions) -> String {
        debug!("formatting date string: {input}");
        format_date_string(input, options).into_string()
    }

    /// Run the timestamp facade against the active table.
    pub fn format_timestamp(&self, input: &str, options: &FormatterOptions) -> String {
        debug!("formatting timestamp: {input}");
        format_timestamp_with(self.table(), input, options).into_string()
    }

    /// Render the active table, one `LABEL  ±HH:MM  place` line per entry,
    /// sorted by label.
    pub fn list_timezones(&self) -> String {
        let mut entries: Vec<(&str, i32, &str)> = self
            .table()
            .iter()
            .map(|(label, entry)| (label, entry.offset, entry.place.as_str()))
            .collect();
        entries.sort_by_key(|(label, _, _)| *label);

        let mut out = String::new();
        for (label, offset, place) in entries {
            let sign = if offset < 0 { '-' } else { '+' };
            let magnitude = offset.abs();
            let _ = writeln!(
                out,
                "{label:<5} {sign}{:02}:{:02}  {place}",
                magnitude / 60,
                magnitude % 60
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use morph_core::{FormatterOptions, TimezoneTable};

    #[test]
    fn listing_is_sorted_and_formats_offsets() {
        let table = TimezoneTable::from_json(
            r#"{
                "ZZZ": { "offset": -210, "place": "Backwards" },
                "AAA": { "offset": 330, "place": "Forwards" }
            }"#,
        )
        .unwrap();
        let listing = Cli::new(Some(table)).list_timezones();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("AAA"));
        assert!(lines[0].contains("+05:30"));
        assert!(lines[1].starts_with("ZZZ"));
        assert!(lines[1].contains("-03:30"));
    }

    #[test]
    fn falls_back_to_builtin_table() {
        let cli = Cli::new(None);
        let options = FormatterOptions {
            format: Some("HH:mm".to_string()),
            from: None,
            to: Some("IST".to_string()),
        };
        assert_eq!(cli.format_timestamp("2023-07-30T02:00:00Z", &options), "07:30");
    }
}
