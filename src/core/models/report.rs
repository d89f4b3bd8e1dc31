use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{Field, Record};
use super::timestamp::Timestamp;

/// Category of a compliance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ReportType {
    #[serde(rename = "Safety Compliance")]
    #[value(name = "safety")]
    SafetyCompliance,
    #[serde(rename = "Environmental Compliance")]
    #[value(name = "environmental")]
    EnvironmentalCompliance,
    #[serde(rename = "Regulatory")]
    #[value(name = "regulatory")]
    Regulatory,
}

impl ReportType {
    pub fn label(self) -> &'static str {
        match self {
            Self::SafetyCompliance => "Safety Compliance",
            Self::EnvironmentalCompliance => "Environmental Compliance",
            Self::Regulatory => "Regulatory",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum ComplianceStatus {
    #[serde(rename = "Compliant")]
    #[value(name = "compliant")]
    Compliant,
    #[serde(rename = "Non-Compliant")]
    #[value(name = "non-compliant")]
    NonCompliant,
    #[serde(rename = "Pending Review")]
    #[value(name = "pending")]
    PendingReview,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
            Self::PendingReview => "Pending Review",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A compliance/safety inspection record tied to an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "ReportID")]
    pub report_id: String,
    #[serde(rename = "AssetID")]
    pub asset_id: String,
    #[serde(rename = "AssetName")]
    pub asset_name: String,
    #[serde(rename = "ReportType")]
    pub report_type: ReportType,
    #[serde(rename = "SafetyScore")]
    pub safety_score: u8,
    #[serde(rename = "ComplianceStatus")]
    pub compliance_status: ComplianceStatus,
    #[serde(rename = "Inspector")]
    pub inspector: String,
    #[serde(rename = "NextAuditDate")]
    pub next_audit_date: Timestamp,
    #[serde(rename = "GeneratedDate")]
    pub generated_date: Timestamp,
    #[serde(
        rename = "LastUpdated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<Timestamp>,
}

impl Report {
    /// Snapshot recorded in the audit log before/after a change.
    pub fn summary(&self) -> String {
        summary(self.safety_score, self.compliance_status)
    }
}

/// `Score: 92% | Status: Compliant`
pub fn summary(score: u8, status: ComplianceStatus) -> String {
    format!("Score: {score}% | Status: {status}")
}

impl Record for Report {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("ReportID", &self.report_id),
            Field::new("AssetID", &self.asset_id),
            Field::new("AssetName", &self.asset_name),
            Field::new("ReportType", self.report_type.label()),
            Field::new("SafetyScore", self.safety_score.to_string()),
            Field::new("ComplianceStatus", self.compliance_status.label()),
            Field::new("Inspector", &self.inspector),
            Field::timestamp("NextAuditDate", &self.next_audit_date),
            Field::timestamp("GeneratedDate", &self.generated_date),
        ];
        if let Some(updated) = &self.last_updated {
            fields.push(Field::timestamp("LastUpdated", updated));
        }
        fields
    }

    fn filter_date(&self) -> Option<&Timestamp> {
        Some(&self.next_audit_date)
    }

    fn export_title(records: &[Self]) -> String {
        match records {
            [single] => format!("Asset Detail: {}", single.asset_name),
            _ => "Compliance Export".to_string(),
        }
    }

    fn sheet_name() -> &'static str {
        "Compliance Data"
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::report;
    use super::*;

    #[test]
    fn serializes_with_dashboard_keys() {
        let r = report("CR-1", "Rig A", ComplianceStatus::Compliant, 92);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["ReportID"], "CR-1");
        assert_eq!(json["AssetName"], "Rig A");
        assert_eq!(json["ComplianceStatus"], "Compliant");
        assert_eq!(json["SafetyScore"], 92);
        assert_eq!(json["ReportType"], "Safety Compliance");
        assert!(json.get("LastUpdated").is_none());
    }

    #[test]
    fn reads_legacy_dashboard_record() {
        let raw = r#"{
            "ReportID": "CR-1767379137000",
            "AssetID": "PL-045",
            "AssetName": "Pipeline Delta-7 (PL-045)",
            "ReportType": "Environmental Compliance",
            "SafetyScore": 71,
            "ComplianceStatus": "Pending Review",
            "Inspector": "Gulf Agency",
            "NextAuditDate": "02 January 2026 at 18:38:57",
            "GeneratedDate": "01 January 2026 at 09:00:00",
            "LastUpdated": "03/01/2026, 11:00:00"
        }"#;
        let r: Report = serde_json::from_str(raw).unwrap();
        assert_eq!(r.compliance_status, ComplianceStatus::PendingReview);
        assert_eq!(r.report_type, ReportType::EnvironmentalCompliance);
        assert_eq!(r.next_audit_date.display(), "02/01/2026, 18:38:57");
        assert!(r.last_updated.is_some());
    }

    #[test]
    fn summary_format() {
        let r = report("CR-1", "Rig A", ComplianceStatus::NonCompliant, 40);
        assert_eq!(r.summary(), "Score: 40% | Status: Non-Compliant");
    }

    #[test]
    fn fields_omit_absent_last_updated() {
        let mut r = report("CR-1", "Rig A", ComplianceStatus::Compliant, 92);
        let keys: Vec<_> = r.fields().iter().map(|f| f.key).collect();
        assert!(!keys.contains(&"LastUpdated"));

        r.last_updated = Some(Timestamp::from_raw("2026-02-01T00:00:00Z"));
        let keys: Vec<_> = r.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys.last(), Some(&"LastUpdated"));
    }

    #[test]
    fn export_title_depends_on_count() {
        let a = report("CR-1", "Rig A", ComplianceStatus::Compliant, 92);
        let b = report("CR-2", "Rig B", ComplianceStatus::Compliant, 80);
        assert_eq!(Report::export_title(std::slice::from_ref(&a)), "Asset Detail: Rig A");
        assert_eq!(Report::export_title(&[a, b]), "Compliance Export");
    }
}
