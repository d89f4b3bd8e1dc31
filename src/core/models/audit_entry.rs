use serde::{Deserialize, Serialize};

use super::record::{Field, Record};
use super::timestamp::Timestamp;

/// Report id recorded for entries that do not concern a single report.
pub const NO_REPORT: &str = "N/A";

/// Old value recorded for a freshly created report.
pub const NONE_VALUE: &str = "NONE";

/// New value recorded for a deleted report.
pub const DELETED_VALUE: &str = "DELETED";

/// Mutations that get recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
}

impl AuditAction {
    /// Text stored in the `Action` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "New Report Created",
            Self::Updated => "Updated Report",
            Self::Deleted => "Deleted Report",
        }
    }

    /// Recover the kind of a stored action by substring.
    ///
    /// Stored actions are free text, so older or hand-written entries
    /// are matched on the verb alone.
    pub fn classify(action: &str) -> Option<Self> {
        if action.contains("Deleted") {
            Some(Self::Deleted)
        } else if action.contains("Created") {
            Some(Self::Created)
        } else if action.contains("Updated") {
            Some(Self::Updated)
        } else {
            None
        }
    }
}

/// One immutable entry in the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(rename = "ReportID")]
    pub report_id: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "OldValue")]
    pub old_value: String,
    #[serde(rename = "NewValue")]
    pub new_value: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: Timestamp,
}

impl AuditLogEntry {
    pub fn new(
        report_id: &str,
        action: AuditAction,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
        user: &str,
    ) -> Self {
        let report_id = if report_id.trim().is_empty() {
            NO_REPORT
        } else {
            report_id
        };
        Self {
            report_id: report_id.to_string(),
            action: action.label().to_string(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            user: user.to_string(),
            timestamp: Timestamp::now(),
        }
    }

    pub fn kind(&self) -> Option<AuditAction> {
        AuditAction::classify(&self.action)
    }
}

impl Record for AuditLogEntry {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("ReportID", &self.report_id),
            Field::new("Action", &self.action),
            Field::new("OldValue", &self.old_value),
            Field::new("NewValue", &self.new_value),
            Field::new("User", &self.user),
            Field::timestamp("Timestamp", &self.timestamp),
        ]
    }

    fn filter_date(&self) -> Option<&Timestamp> {
        Some(&self.timestamp)
    }

    fn export_title(_records: &[Self]) -> String {
        "Audit Trail".to_string()
    }

    fn sheet_name() -> &'static str {
        "Audit Trail"
    }
}
