use std::path::PathBuf;

use crate::cli::context::{self, Project};
use crate::cli::{ExportTarget, output};
use crate::core::errors::Result;
use crate::core::models::export::ExportFormat;
use crate::core::services::asset_registry::AssetRegistry;
use crate::core::services::audit_trail::AuditTrail;
use crate::core::services::report_service::ReportService;

/// Execute a `petromanage export` subcommand.
///
/// Empty selections write no file; a warning says so.
pub fn execute(target: &ExportTarget) -> Result<()> {
    let project = Project::open()?;
    let exports = project.export_service();
    let reports = project.report_store();
    let audit = project.audit_store();
    let assets = project.asset_store();

    let (written, format) = match target {
        ExportTarget::Reports { format, filter, id } => {
            let service = ReportService::new(&reports, &audit, &assets, project.user());
            let written = match id {
                Some(id) => {
                    let report = service.get(id)?;
                    let stem = format!("Asset_Detail_{}", report.report_id);
                    exports.export(std::slice::from_ref(&report), *format, &stem)?
                }
                None => {
                    let filter = context::build_filter(filter)?;
                    let selected = filter.apply(&service.list()?);
                    exports.export(&selected, *format, "Compliance_Export")?
                }
            };
            (written, *format)
        }
        ExportTarget::Audit { format, filter } => {
            let filter = context::build_filter(filter)?;
            let selected = filter.apply(&AuditTrail::new(&audit).entries()?);
            (exports.export(&selected, *format, "Audit_Trail")?, *format)
        }
        ExportTarget::Assets { format, filter } => {
            let filter = context::build_filter(filter)?;
            let selected = filter.apply(&AssetRegistry::new(&assets).list()?);
            (exports.export(&selected, *format, "Asset_Register")?, *format)
        }
    };

    report_outcome(written, format);
    Ok(())
}

fn report_outcome(written: Option<PathBuf>, format: ExportFormat) {
    match written {
        Some(path) => output::success(&format!("Exported {format} to {}", path.display())),
        None => output::warning("Nothing to export: no records match"),
    }
}
