use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::{Field, Record};
use super::timestamp::Timestamp;

/// Kind of physical asset. Each kind has its own id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Rig,
    Pipeline,
    Storage,
}

impl AssetType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rig => "RIG",
            Self::Pipeline => "PIPELINE",
            Self::Storage => "STORAGE",
        }
    }

    /// Ids of this kind look like `{prefix}-001`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Rig => "RIG",
            Self::Pipeline => "PL",
            Self::Storage => "STG",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operating state of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum AssetStatus {
    #[default]
    Operational,
    Maintenance,
    #[serde(rename = "Under Inspection")]
    UnderInspection,
    Decommissioned,
}

impl AssetStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Maintenance => "Maintenance",
            Self::UnderInspection => "Under Inspection",
            Self::Decommissioned => "Decommissioned",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered rig, pipeline or storage facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub location: String,
    pub status: AssetStatus,
    pub last_maintenance: Timestamp,
}

impl Asset {
    /// `North Sea Rig Alpha (RIG-001)`, the name reports carry.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

impl Record for Asset {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("AssetID", &self.id),
            Field::new("Name", &self.name),
            Field::new("Type", self.asset_type.label()),
            Field::new("Location", &self.location),
            Field::new("Status", self.status.label()),
            Field::timestamp("LastMaintenance", &self.last_maintenance),
        ]
    }

    fn filter_date(&self) -> Option<&Timestamp> {
        Some(&self.last_maintenance)
    }

    fn export_title(_records: &[Self]) -> String {
        "Asset Register".to_string()
    }

    fn sheet_name() -> &'static str {
        "Assets"
    }
}

/// Assets a new project is seeded with.
pub fn default_assets(last_maintenance: &Timestamp) -> Vec<Asset> {
    let asset = |id: &str, name: &str, asset_type, location: &str| Asset {
        id: id.to_string(),
        name: name.to_string(),
        asset_type,
        location: location.to_string(),
        status: AssetStatus::Operational,
        last_maintenance: last_maintenance.clone(),
    };
    vec![
        asset("RIG-001", "North Sea Rig Alpha", AssetType::Rig, "North Sea"),
        asset("RIG-002", "West Texas Rig Beta", AssetType::Rig, "West Texas"),
        asset("PL-045", "Pipeline Delta-7", AssetType::Pipeline, "Unassigned"),
        asset("STG-012", "Storage Facility B", AssetType::Storage, "Unassigned"),
        asset("RIG-008", "Gulf Platform Echo", AssetType::Rig, "Gulf Of Mexico"),
    ]
}

/// Capitalize the first letter of every word and lowercase the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_registry_keys() {
        let assets = default_assets(&Timestamp::from_raw("2026-01-10"));
        let json = serde_json::to_value(&assets[2]).unwrap();
        assert_eq!(json["id"], "PL-045");
        assert_eq!(json["type"], "PIPELINE");
        assert_eq!(json["status"], "Operational");
        assert_eq!(json["lastMaintenance"], "2026-01-10");
    }

    #[test]
    fn under_inspection_round_trips() {
        let status: AssetStatus = serde_json::from_str("\"Under Inspection\"").unwrap();
        assert_eq!(status, AssetStatus::UnderInspection);
    }

    #[test]
    fn label_matches_report_asset_name() {
        let assets = default_assets(&Timestamp::from_raw("2026-01-10"));
        assert_eq!(assets[0].label(), "North Sea Rig Alpha (RIG-001)");
        assert_eq!(assets[4].label(), "Gulf Platform Echo (RIG-008)");
    }

    #[test]
    fn title_case_normalizes_words() {
        assert_eq!(title_case("north SEA rig"), "North Sea Rig");
        assert_eq!(title_case("gulf of mexico"), "Gulf Of Mexico");
        assert_eq!(title_case("delta-7 line"), "Delta-7 Line");
    }

    #[test]
    fn id_prefixes_follow_type() {
        assert_eq!(AssetType::Rig.id_prefix(), "RIG");
        assert_eq!(AssetType::Pipeline.id_prefix(), "PL");
        assert_eq!(AssetType::Storage.id_prefix(), "STG");
    }
}
