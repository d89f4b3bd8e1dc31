use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use tracing::{error, info, warn};

use crate::core::errors::{PetroError, Result};
use crate::core::models::asset::Asset;
use crate::core::models::audit_entry::{AuditAction, AuditLogEntry, DELETED_VALUE, NONE_VALUE};
use crate::core::models::report::{ComplianceStatus, Report, ReportType};
use crate::core::models::timestamp::Timestamp;
use crate::core::services::asset_registry::AssetRegistry;
use crate::core::services::audit_trail::AuditTrail;
use crate::core::traits::store::CollectionStore;

static ASSET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}-\d{3}$").expect("asset id pattern is valid"));

/// Input for filing a new report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub asset_id: String,
    /// Required only for assets that are not registered.
    pub asset_name: Option<String>,
    pub report_type: ReportType,
    pub safety_score: i64,
    pub compliance_status: ComplianceStatus,
    pub inspector: String,
    pub next_audit_date: Timestamp,
}

/// Editable fields of an existing report.
#[derive(Debug, Clone, Default)]
pub struct ReportChanges {
    pub safety_score: Option<i64>,
    pub compliance_status: Option<ComplianceStatus>,
}

impl ReportChanges {
    pub fn is_empty(&self) -> bool {
        self.safety_score.is_none() && self.compliance_status.is_none()
    }
}

/// Creates, updates and deletes reports, recording one audit entry per
/// successful mutation.
///
/// The audit log is loaded before the report collection is rewritten,
/// and the previous reports are restored if the audit entry cannot be
/// saved. Failed operations leave both collections untouched.
pub struct ReportService<'a> {
    reports: &'a dyn CollectionStore<Report>,
    audit: AuditTrail<'a>,
    assets: AssetRegistry<'a>,
    user: String,
}

impl<'a> ReportService<'a> {
    pub fn new(
        reports: &'a dyn CollectionStore<Report>,
        audit: &'a dyn CollectionStore<AuditLogEntry>,
        assets: &'a dyn CollectionStore<Asset>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            reports,
            audit: AuditTrail::new(audit),
            assets: AssetRegistry::new(assets),
            user: user.into(),
        }
    }

    pub fn list(&self) -> Result<Vec<Report>> {
        self.reports.load()
    }

    pub fn get(&self, report_id: &str) -> Result<Report> {
        self.reports
            .load()?
            .into_iter()
            .find(|r| r.report_id == report_id)
            .ok_or_else(|| not_found(report_id))
    }

    pub fn create(&self, input: NewReport) -> Result<Report> {
        let safety_score = validate_score(input.safety_score)?;
        let registered = self.assets.find(&input.asset_id)?;
        let (asset_id, asset_name) = resolve_asset(
            registered.as_ref(),
            &input.asset_id,
            input.asset_name.as_deref(),
        )?;

        let inspector = input.inspector.trim();
        if inspector.is_empty() {
            return Err(PetroError::validation("inspector", "an inspector name or agency is required"));
        }

        let previous = self.reports.load()?;
        let mut reports = previous.clone();
        let report = Report {
            report_id: next_report_id(&reports, Utc::now().timestamp_millis()),
            asset_id,
            asset_name,
            report_type: input.report_type,
            safety_score,
            compliance_status: input.compliance_status,
            inspector: inspector.to_string(),
            next_audit_date: input.next_audit_date,
            generated_date: Timestamp::now(),
            last_updated: None,
        };

        reports.push(report.clone());
        self.commit(
            &previous,
            &reports,
            AuditLogEntry::new(
                &report.report_id,
                AuditAction::Created,
                NONE_VALUE,
                report.summary(),
                &self.user,
            ),
        )?;

        info!(report_id = %report.report_id, asset = %report.asset_id, "report created");
        Ok(report)
    }

    /// Apply `changes` to an existing report.
    ///
    /// Unknown ids fail with `ReportNotFound`; nothing is written.
    pub fn update(&self, report_id: &str, changes: ReportChanges) -> Result<Report> {
        if changes.is_empty() {
            return Err(PetroError::validation(
                "update",
                "nothing to change; pass a new safety score and/or status",
            ));
        }
        let new_score = changes.safety_score.map(validate_score).transpose()?;

        let previous = self.reports.load()?;
        let mut reports = previous.clone();
        let report = reports
            .iter_mut()
            .find(|r| r.report_id == report_id)
            .ok_or_else(|| not_found(report_id))?;

        let before = report.summary();
        if let Some(score) = new_score {
            report.safety_score = score;
        }
        if let Some(status) = changes.compliance_status {
            report.compliance_status = status;
        }
        report.last_updated = Some(Timestamp::now());
        let updated = report.clone();

        self.commit(
            &previous,
            &reports,
            AuditLogEntry::new(
                report_id,
                AuditAction::Updated,
                before,
                updated.summary(),
                &self.user,
            ),
        )?;

        info!(report_id, "report updated");
        Ok(updated)
    }

    /// Permanently remove a report. Confirmation is the caller's job.
    pub fn delete(&self, report_id: &str) -> Result<Report> {
        let previous = self.reports.load()?;
        let mut reports = previous.clone();
        let index = reports
            .iter()
            .position(|r| r.report_id == report_id)
            .ok_or_else(|| not_found(report_id))?;

        let removed = reports.remove(index);
        self.commit(
            &previous,
            &reports,
            AuditLogEntry::new(
                report_id,
                AuditAction::Deleted,
                removed.summary(),
                DELETED_VALUE,
                &self.user,
            ),
        )?;

        info!(report_id, "report deleted");
        Ok(removed)
    }

    /// Save `next` and prepend `entry` to the audit log as one unit.
    ///
    /// The log is read first so a malformed log fails before the reports
    /// are touched. If the log cannot be saved, `previous` is written back.
    fn commit(&self, previous: &[Report], next: &[Report], entry: AuditLogEntry) -> Result<()> {
        let pending = self.audit.prepare()?;
        self.reports.save(next)?;

        if let Err(e) = pending.commit(entry) {
            warn!(error = %e, "audit append failed, restoring reports");
            if let Err(restore) = self.reports.save(previous) {
                error!(error = %restore, "failed to restore reports after audit failure");
            }
            return Err(e);
        }
        Ok(())
    }
}

fn not_found(report_id: &str) -> PetroError {
    PetroError::ReportNotFound {
        id: report_id.to_string(),
    }
}

fn validate_score(score: i64) -> Result<u8> {
    u8::try_from(score)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or_else(|| {
            PetroError::validation("safety score", format!("{score} is not between 0 and 100"))
        })
}

/// Resolve an asset id to `(id, display name)`.
///
/// Registered assets get their registry label; other ids must look like
/// an asset id and come with an explicit name.
fn resolve_asset(
    registered: Option<&Asset>,
    asset_id: &str,
    asset_name: Option<&str>,
) -> Result<(String, String)> {
    let asset_name = asset_name.map(str::trim).filter(|n| !n.is_empty());

    if let Some(asset) = registered {
        let name = asset_name
            .map(str::to_string)
            .unwrap_or_else(|| asset.label());
        return Ok((asset.id.clone(), name));
    }

    let id = asset_id.trim().to_uppercase();
    if id.is_empty() {
        return Err(PetroError::validation("asset", "an asset id is required"));
    }
    if !ASSET_ID.is_match(&id) {
        return Err(PetroError::validation(
            "asset",
            format!("'{asset_id}' is not a valid asset id (expected e.g. RIG-001)"),
        ));
    }

    match asset_name {
        Some(name) => Ok((id, name.to_string())),
        None => Err(PetroError::validation(
            "asset name",
            format!("'{id}' is not a registered asset; pass --asset-name or run 'petromanage asset add'"),
        )),
    }
}

/// `CR-<millis>`, bumped past any id already taken.
fn next_report_id(existing: &[Report], now_millis: i64) -> String {
    let mut millis = now_millis;
    loop {
        let candidate = format!("CR-{millis}");
        if !existing.iter().any(|r| r.report_id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}
