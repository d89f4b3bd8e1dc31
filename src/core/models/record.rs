use serde::Serialize;

use super::timestamp::Timestamp;

/// One named value of a record, rendered for people.
///
/// `stored` keeps the persisted form when it differs from `value`, so
/// search can match either one.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: String,
    pub stored: Option<String>,
}

impl Field {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
            stored: None,
        }
    }

    /// A timestamp column: displayed day-first, stored as written.
    pub fn timestamp(key: &'static str, ts: &Timestamp) -> Self {
        let value = ts.display();
        let stored = (value != ts.as_str()).then(|| ts.as_str().to_string());
        Self { key, value, stored }
    }
}

/// A row type that can be searched, filtered by date and exported.
///
/// `fields()` is the single projection shared by the free-text search and
/// tabular export, so both always see the same columns. Absent optional
/// values are omitted rather than rendered empty.
pub trait Record: Serialize {
    /// Present fields, in their natural order, with display-ready values.
    fn fields(&self) -> Vec<Field>;

    /// Timestamp used by date-range filtering.
    fn filter_date(&self) -> Option<&Timestamp>;

    /// Title line for a printable export of `records`.
    fn export_title(records: &[Self]) -> String
    where
        Self: Sized;

    /// Worksheet name for spreadsheet exports.
    fn sheet_name() -> &'static str
    where
        Self: Sized;
}

/// Split a PascalCase key into words: `SafetyScore` -> `Safety Score`,
/// `ReportID` -> `Report ID`.
pub fn humanize_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || (prev.is_uppercase() && next_is_lower) {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}
