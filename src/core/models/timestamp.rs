use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::errors::{PetroError, Result};

/// Day-first rendering used wherever a timestamp is shown to a person.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Matches the date/time separators of the legacy display formats:
/// a comma (`15/01/2026, 10:00:00`) or a spelled-out `at`
/// (`02 January 2026 at 18:38:57`).
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*,\s*|\s+at\s+").expect("separator pattern is valid"));

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d %B %Y", "%Y-%m-%d"];

/// A point in time as persisted in the collections.
///
/// New values are always RFC 3339 in UTC. Values written by the old
/// dashboard were stored pre-rendered (`15/01/2026, 10:00:00`) and are
/// kept verbatim; they still parse, they are just not canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Wrap a stored value without interpreting it.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse user input (CLI flags) into a canonical timestamp.
    pub fn parse_input(input: &str) -> Result<Self> {
        parse_timestamp(input)
            .map(|naive| Self::from_datetime(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| PetroError::InvalidDate {
                input: input.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.0)
    }

    /// Calendar day of this timestamp, if it parses.
    pub fn date(&self) -> Option<NaiveDate> {
        self.parse().map(|dt| dt.date())
    }

    /// Human-readable form. Unparseable values are shown as stored.
    pub fn display(&self) -> String {
        match self.parse() {
            Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            None => self.as_str().to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parse any timestamp this application has ever written.
///
/// Accepts RFC 3339, the day-first `DD/MM/YYYY, HH:MM:SS` form and the
/// narrative `DD Month YYYY at HH:MM:SS` form, plus date-only variants
/// (midnight). Returns `None` for anything else; never panics.
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    let normalized = SEPARATOR.replace_all(trimmed, " ");

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a `--from` / `--to` day bound (ISO 8601: `YYYY-MM-DD`).
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| PetroError::InvalidDate {
        input: input.to_string(),
    })
}
