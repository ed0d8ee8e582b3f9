//! Journal entry line codec
//!
//! Every persisted line has the shape `[YYYY-MM-DD HH:MM] <body>`. Encoding
//! always goes through a validated [`Note`]; decoding is lenient and yields
//! `None` for anything that does not carry a parseable timestamp prefix.

use chrono::NaiveDateTime;

use crate::error::{NotrError, NotrResult};

/// Timestamp format inside the bracketed prefix
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date format accepted by `--since`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Marker placed at the start of the body of an edited entry
pub const EDIT_MARKER: &str = "(edit) ";

/// Width of a formatted timestamp (`YYYY-MM-DD HH:MM`)
const TIMESTAMP_WIDTH: usize = 16;

/// Byte offset of the body: `[` + timestamp + `] `
const BODY_OFFSET: usize = TIMESTAMP_WIDTH + 3;

/// A trimmed, non-empty note body ready to be encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note(String);

impl Note {
    /// Trim `text` and reject it if nothing is left
    pub fn new(text: &str) -> NotrResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NotrError::EmptyNote);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Encode a note as a storage line (without trailing newline)
pub fn encode(at: NaiveDateTime, note: &Note) -> String {
    format!("[{}] {}", at.format(TIME_FORMAT), note.as_str())
}

/// Encode a replacement line for an edited entry
///
/// The timestamp is the time of the edit, not the original entry's.
pub fn encode_edit(at: NaiveDateTime, note: &Note) -> String {
    format!("[{}] {}{}", at.format(TIME_FORMAT), EDIT_MARKER, note.as_str())
}

/// A decoded journal line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Minute-precision local timestamp from the line prefix
    pub timestamp: NaiveDateTime,
    /// The full line with trailing whitespace removed
    pub raw: String,
}

impl Entry {
    /// Decode a raw line
    ///
    /// Returns `None` when the line does not start with `[` followed by a
    /// valid `YYYY-MM-DD HH:MM` timestamp.
    pub fn decode(line: &str) -> Option<Self> {
        if !line.starts_with('[') {
            return None;
        }
        let stamp = line.get(1..1 + TIMESTAMP_WIDTH)?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIME_FORMAT).ok()?;
        Some(Self {
            timestamp,
            raw: line.trim_end().to_string(),
        })
    }

    /// Text after the `[timestamp] ` prefix
    pub fn body(&self) -> &str {
        self.raw.get(BODY_OFFSET..).unwrap_or("")
    }

    /// Whether this entry was produced by an edit
    pub fn is_edited(&self) -> bool {
        self.body().starts_with(EDIT_MARKER)
    }

    /// Tags embedded in the body, without the leading `#`
    pub fn tags(&self) -> Vec<&str> {
        self.body()
            .split_whitespace()
            .filter_map(|token| token.strip_prefix('#'))
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Whether the literal `#<tag>` occurs anywhere in the line
    pub fn has_tag(&self, tag: &str) -> bool {
        self.raw.contains(&format!("#{}", tag))
    }

    /// Case-insensitive substring match over the whole line
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.raw.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_note_trims_and_rejects_empty() {
        assert_eq!(Note::new("  hello  ").unwrap().as_str(), "hello");
        assert!(matches!(Note::new(""), Err(NotrError::EmptyNote)));
        assert!(matches!(Note::new(" \t \n"), Err(NotrError::EmptyNote)));
    }

    #[test]
    fn test_encode_scenario_line() {
        let note = Note::new("Deployed service #deploy").unwrap();
        assert_eq!(
            encode(at(2024, 3, 15, 10, 0, 0), &note),
            "[2024-03-15 10:00] Deployed service #deploy"
        );
    }

    #[test]
    fn test_encode_drops_seconds() {
        let note = Note::new("x").unwrap();
        assert_eq!(encode(at(2024, 3, 15, 10, 7, 59), &note), "[2024-03-15 10:07] x");
    }

    #[test]
    fn test_encode_edit_prefixes_marker() {
        let note = Note::new("fixed typo").unwrap();
        let line = encode_edit(at(2024, 3, 15, 11, 30, 0), &note);
        assert_eq!(line, "[2024-03-15 11:30] (edit) fixed typo");

        let entry = Entry::decode(&line).unwrap();
        assert!(entry.is_edited());
        assert_eq!(entry.body(), "(edit) fixed typo");
    }

    #[test]
    fn test_round_trip_truncates_to_minute_and_keeps_body() {
        let bodies = ["plain", "  padded  ", "unicode ✓ café", "brackets [inside] too", "#a #b"];
        let t = at(2023, 12, 31, 23, 59, 45);
        for body in bodies {
            let note = Note::new(body).unwrap();
            let entry = Entry::decode(&encode(t, &note)).unwrap();
            assert_eq!(entry.timestamp, at(2023, 12, 31, 23, 59, 0));
            assert_eq!(entry.body(), body.trim());
            assert!(!entry.is_edited());
        }
    }

    #[test]
    fn test_decode_rejects_malformed_lines() {
        assert!(Entry::decode("").is_none());
        assert!(Entry::decode("no bracket here").is_none());
        assert!(Entry::decode("[not a timestamp] body").is_none());
        assert!(Entry::decode("[2024-13-01 10:00] bad month").is_none());
        assert!(Entry::decode("[2024-03-15").is_none());
        assert!(Entry::decode(" [2024-03-15 10:00] leading space").is_none());
    }

    #[test]
    fn test_decode_does_not_panic_on_multibyte_prefix() {
        assert!(Entry::decode("[ééééééééééééééé] x").is_none());
    }

    #[test]
    fn test_decode_strips_trailing_newline() {
        let entry = Entry::decode("[2024-03-15 10:00] body\n").unwrap();
        assert_eq!(entry.raw, "[2024-03-15 10:00] body");
    }

    #[test]
    fn test_tags_and_tag_match() {
        let entry = Entry::decode("[2024-03-15 10:00] Deployed #deploy and #ops-team # done").unwrap();
        assert_eq!(entry.tags(), vec!["deploy", "ops-team"]);
        assert!(entry.has_tag("deploy"));
        assert!(entry.has_tag("ops"));
        assert!(!entry.has_tag("rollback"));
    }

    #[test]
    fn test_contains_ignore_case() {
        let entry = Entry::decode("[2024-03-15 10:00] Met with Alice").unwrap();
        assert!(entry.contains_ignore_case("alice"));
        assert!(entry.contains_ignore_case("MET WITH"));
        assert!(!entry.contains_ignore_case("bob"));
    }
}
