use chrono::Utc;
use colored::Colorize;

use crate::cli::context::Project;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::report_service::ReportService;
use crate::core::services::stats_service::ComplianceStats;

/// Execute the `petromanage stats` command.
pub fn execute() -> Result<()> {
    let project = Project::open()?;
    let reports = project.report_store();
    let audit = project.audit_store();
    let assets = project.asset_store();
    let service = ReportService::new(&reports, &audit, &assets, project.user());

    let stats = ComplianceStats::compute(&service.list()?, Utc::now().date_naive());

    output::header("Compliance dashboard");
    println!();
    let rows = [
        ("Total reports", stats.total_reports.to_string()),
        ("Overall compliance", format!("{}%", stats.overall_compliance)),
        ("Average safety score", format!("{}%", stats.average_safety_score)),
        ("Pending reviews", stats.pending_reviews.to_string()),
        ("Upcoming audits", stats.upcoming_audits.to_string()),
    ];
    for (label, value) in rows {
        println!("  {:<22} {}", label.dimmed(), value.bold());
    }
    Ok(())
}
