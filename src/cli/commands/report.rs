use colored::Colorize;

use crate::cli::context::{self, Project};
use crate::cli::{FilterArgs, ReportAction, output};
use crate::core::errors::Result;
use crate::core::models::record::{Record, humanize_key};
use crate::core::models::report::{ComplianceStatus, Report};
use crate::core::models::timestamp::Timestamp;
use crate::core::services::pagination::paginate;
use crate::core::services::report_service::{NewReport, ReportChanges, ReportService};

/// Execute a `petromanage report` subcommand.
pub fn execute(action: &ReportAction) -> Result<()> {
    let project = Project::open()?;
    let reports = project.report_store();
    let audit = project.audit_store();
    let assets = project.asset_store();
    let service = ReportService::new(&reports, &audit, &assets, project.user());

    match action {
        ReportAction::Create {
            asset,
            asset_name,
            report_type,
            score,
            status,
            inspector,
            next_audit,
        } => {
            let report = service.create(NewReport {
                asset_id: asset.clone(),
                asset_name: asset_name.clone(),
                report_type: *report_type,
                safety_score: *score,
                compliance_status: *status,
                inspector: inspector.clone(),
                next_audit_date: Timestamp::parse_input(next_audit)?,
            })?;
            output::success(&format!(
                "Created {} for {}",
                report.report_id.bold(),
                report.asset_name
            ));
            println!("  {}", report.summary().dimmed());
            Ok(())
        }
        ReportAction::Update { id, score, status } => {
            let report = service.update(
                id,
                ReportChanges {
                    safety_score: *score,
                    compliance_status: *status,
                },
            )?;
            output::success(&format!("Updated {}", report.report_id.bold()));
            println!("  {}", report.summary().dimmed());
            Ok(())
        }
        ReportAction::Delete { id, yes } => {
            let report = service.get(id)?;
            if !yes {
                output::warning(&format!(
                    "This permanently deletes {} ({})",
                    report.report_id, report.asset_name
                ));
                if !output::confirm("Delete this report?")? {
                    output::warning("Cancelled; nothing was changed");
                    return Ok(());
                }
            }
            service.delete(id)?;
            output::success(&format!("Deleted {}", id.bold()));
            Ok(())
        }
        ReportAction::List { filter, page } => list(&service, filter, *page, project.page_size()),
        ReportAction::Show { id } => {
            show(&service.get(id)?);
            Ok(())
        }
    }
}

fn list(service: &ReportService<'_>, args: &FilterArgs, page: usize, page_size: usize) -> Result<()> {
    let filter = context::build_filter(args)?;
    let all = service.list()?;
    let matching = filter.apply(&all);

    output::header(&format!("Compliance reports ({} of {})", matching.len(), all.len()));

    if matching.is_empty() {
        output::warning("No reports found");
        if !filter.is_empty() {
            output::info("Try removing filters to see all reports.");
        }
        return Ok(());
    }

    let page = paginate(&matching, page, page_size);
    println!();
    for report in page.items {
        print_row(report);
    }
    output::page_footer(&page);
    Ok(())
}

fn print_row(report: &Report) {
    println!(
        "  {:<17} {} {:<32} {:<14} {:>4} {} {} {}",
        report.report_id.bold(),
        "│".dimmed(),
        report.asset_name,
        report.report_type.label(),
        format!("{}%", report.safety_score),
        format_status(report.compliance_status),
        "│".dimmed(),
        report.next_audit_date.display().dimmed(),
    );
}

fn show(report: &Report) {
    output::header(&format!("Asset Detail: {}", report.asset_name));
    println!();
    for field in report.fields() {
        let value = match field.key {
            "ComplianceStatus" => format_status(report.compliance_status),
            "SafetyScore" => format!("{}%", field.value),
            _ => field.value,
        };
        println!("  {:<18} {}", humanize_key(field.key).dimmed(), value);
    }
}

fn format_status(status: ComplianceStatus) -> String {
    let label = format!("{:<14}", status.label());
    match status {
        ComplianceStatus::Compliant => label.green().to_string(),
        ComplianceStatus::NonCompliant => label.red().to_string(),
        ComplianceStatus::PendingReview => label.yellow().to_string(),
    }
}
