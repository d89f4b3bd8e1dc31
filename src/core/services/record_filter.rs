use chrono::NaiveDate;
use tracing::debug;

use crate::core::models::record::Record;

/// Free-text search plus an inclusive calendar-day range.
///
/// An entry is included when it matches the search **and** the range.
/// The range only applies to a record's filter date; records whose date
/// cannot be parsed are dropped as soon as either bound is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    search: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new(search: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let search = search
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());
        Self { search, from, to }
    }

    /// True when no search term and no date bound is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && !self.has_date_bounds()
    }

    pub fn has_date_bounds(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Case-insensitive substring match against every field, in both its
    /// displayed and its stored form.
    pub fn matches_search<R: Record>(&self, record: &R) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        let hit = |text: &str| text.to_lowercase().contains(term.as_str());
        record
            .fields()
            .iter()
            .any(|f| hit(&f.value) || f.stored.as_deref().is_some_and(hit))
    }

    pub fn matches_date_range<R: Record>(&self, record: &R) -> bool {
        if !self.has_date_bounds() {
            return true;
        }

        let Some(day) = record.filter_date().and_then(|ts| ts.date()) else {
            return false;
        };

        if let Some(from) = self.from
            && day < from
        {
            return false;
        }
        if let Some(to) = self.to
            && day > to
        {
            return false;
        }
        true
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_date_range(record)
    }

    /// Matching records, in their original order.
    pub fn apply<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        let matched: Vec<R> = records
            .iter()
            .filter(|r| self.matches(*r))
            .cloned()
            .collect();
        debug!(
            total = records.len(),
            matched = matched.len(),
            search = self.search.as_deref().unwrap_or(""),
            "records filtered"
        );
        matched
    }
}
