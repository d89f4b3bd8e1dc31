use colored::Colorize;

use crate::cli::context::{self, Project};
use crate::cli::{AuditLogAction, output};
use crate::core::errors::Result;
use crate::core::models::audit_entry::{AuditAction, AuditLogEntry};
use crate::core::services::audit_trail::AuditTrail;
use crate::core::services::pagination::paginate;

/// Execute a `petromanage audit` subcommand.
pub fn execute(action: &AuditLogAction) -> Result<()> {
    let project = Project::open()?;
    let store = project.audit_store();
    let trail = AuditTrail::new(&store);

    match action {
        AuditLogAction::List { filter, page } => {
            let filter = context::build_filter(filter)?;
            let all = trail.entries()?;
            let matching = filter.apply(&all);

            output::header(&format!("Audit trail ({} of {} entries)", matching.len(), all.len()));

            if matching.is_empty() {
                output::warning("No audit entries found");
                if !filter.is_empty() {
                    output::info("Try removing filters to see all entries.");
                }
                return Ok(());
            }

            let page = paginate(&matching, *page, project.page_size());
            println!();
            for entry in page.items {
                print_entry(entry);
            }
            output::page_footer(&page);
            Ok(())
        }
        AuditLogAction::Clear { yes } => {
            let count = trail.entries()?.len();
            if count == 0 {
                output::warning("The audit trail is already empty");
                return Ok(());
            }
            if !yes {
                output::warning(&format!(
                    "This deletes ALL {count} audit entries and cannot be undone"
                ));
                if !output::confirm("Wipe the audit trail?")? {
                    output::warning("Cancelled; nothing was changed");
                    return Ok(());
                }
            }
            let removed = trail.clear()?;
            output::success(&format!("Removed {removed} audit entries"));
            Ok(())
        }
    }
}

/// Print a single audit entry as a formatted row.
fn print_entry(entry: &AuditLogEntry) {
    println!(
        "  {} {} {:<17} {} {} {} {}",
        entry.timestamp.display().dimmed(),
        "│".dimmed(),
        entry.report_id,
        format_action(entry),
        entry.old_value.dimmed(),
        "→".dimmed(),
        entry.new_value,
    );
    println!("  {:>20} {} {}", "", "│".dimmed(), entry.user.dimmed());
}

/// Action text colored by what kind of mutation it records.
fn format_action(entry: &AuditLogEntry) -> String {
    let label = format!("{:<19}", entry.action);
    match entry.kind() {
        Some(AuditAction::Created) => label.green().to_string(),
        Some(AuditAction::Updated) => label.blue().to_string(),
        Some(AuditAction::Deleted) => label.red().to_string(),
        None => label,
    }
}
