use colored::Colorize;

use crate::cli::context::{self, Project};
use crate::cli::{AssetAction, output};
use crate::core::errors::Result;
use crate::core::models::asset::{Asset, AssetStatus};
use crate::core::services::asset_registry::{AssetRegistry, NewAsset};
use crate::core::services::pagination::paginate;

/// Execute a `petromanage asset` subcommand.
pub fn execute(action: &AssetAction) -> Result<()> {
    let project = Project::open()?;
    let store = project.asset_store();
    let registry = AssetRegistry::new(&store);

    match action {
        AssetAction::Add {
            asset_type,
            id,
            name,
            location,
            status,
        } => {
            let asset = registry.register(NewAsset {
                asset_type: *asset_type,
                id: id.clone(),
                name: name.clone(),
                location: location.clone(),
                status: *status,
            })?;
            output::success(&format!("Registered {}", asset.label().bold()));
            Ok(())
        }
        AssetAction::List { filter, page } => {
            let filter = context::build_filter(filter)?;
            let all = registry.list()?;
            let matching = filter.apply(&all);

            output::header(&format!("Assets ({} of {})", matching.len(), all.len()));

            if matching.is_empty() {
                output::warning("No assets found");
                if !filter.is_empty() {
                    output::info("Try removing filters to see all assets.");
                }
                return Ok(());
            }

            let page = paginate(&matching, *page, project.page_size());
            println!();
            for asset in page.items {
                print_row(asset);
            }
            output::page_footer(&page);
            Ok(())
        }
    }
}

fn print_row(asset: &Asset) {
    println!(
        "  {:<8} {} {:<24} {:<9} {:<16} {} {}",
        asset.id.bold(),
        "│".dimmed(),
        asset.name,
        asset.asset_type.label(),
        asset.location,
        format_status(asset.status),
        asset.last_maintenance.display().dimmed(),
    );
}

fn format_status(status: AssetStatus) -> String {
    let label = format!("{:<16}", status.label());
    match status {
        AssetStatus::Operational => label.green().to_string(),
        AssetStatus::Maintenance | AssetStatus::UnderInspection => label.yellow().to_string(),
        AssetStatus::Decommissioned => label.red().to_string(),
    }
}
