pub mod commands;
pub mod context;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::models::asset::{AssetStatus, AssetType};
use crate::core::models::export::ExportFormat;
use crate::core::models::report::{ComplianceStatus, ReportType};

/// Compliance reports, audit trails and exports for oil & gas assets.
#[derive(Parser, Debug)]
#[command(name = "petromanage", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding config and data
    #[arg(long, global = true, env = "PETROMANAGE_DIR")]
    pub dir: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize PetroManage in the current directory
    Init,

    /// Create, update, delete and browse compliance reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Register and browse rigs, pipelines and storage facilities
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Browse or wipe the audit trail
    Audit {
        #[command(subcommand)]
        action: AuditLogAction,
    },

    /// Export reports, audit entries or assets to a file
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Show compliance dashboard figures
    Stats,
}

/// Free-text search and inclusive day range shared by list and export.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against every column
    #[arg(long, short)]
    pub search: Option<String>,
    /// Earliest day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// File a new compliance report
    Create {
        /// Asset id, e.g. RIG-001
        #[arg(long)]
        asset: String,
        /// Display name, required for unregistered assets
        #[arg(long)]
        asset_name: Option<String>,
        /// Report category
        #[arg(long = "type", value_enum)]
        report_type: ReportType,
        /// Safety score (0-100)
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
        /// Compliance status
        #[arg(long, value_enum)]
        status: ComplianceStatus,
        /// Inspector name or agency
        #[arg(long)]
        inspector: String,
        /// Next audit date (YYYY-MM-DD or DD/MM/YYYY, HH:MM:SS)
        #[arg(long)]
        next_audit: String,
    },
    /// Change the safety score and/or status of a report
    Update {
        /// Report id, e.g. CR-1767379137000
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        score: Option<i64>,
        #[arg(long, value_enum)]
        status: Option<ComplianceStatus>,
    },
    /// Permanently delete a report
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List reports, filtered by text and next audit date
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Page to show (out-of-range values are clamped)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show every field of one report
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AssetAction {
    /// Register a new asset
    Add {
        /// Asset kind; decides the id prefix (RIG, PL, STG)
        #[arg(long = "type", value_enum)]
        asset_type: AssetType,
        /// Asset id, e.g. RIG-020
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long, value_enum, default_value = "operational")]
        status: AssetStatus,
    },
    /// List registered assets, filtered by text and last maintenance date
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuditLogAction {
    /// List audit entries, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Delete ALL audit entries (irreversible)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// Export reports (filtered, or a single one with --id)
    Reports {
        #[arg(long, short, value_enum, default_value = "json")]
        format: ExportFormat,
        #[command(flatten)]
        filter: FilterArgs,
        /// Export only this report
        #[arg(long, conflicts_with_all = ["search", "from", "to"])]
        id: Option<String>,
    },
    /// Export audit entries (filtered)
    Audit {
        #[arg(long, short, value_enum, default_value = "json")]
        format: ExportFormat,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Export the asset register (filtered)
    Assets {
        #[arg(long, short, value_enum, default_value = "json")]
        format: ExportFormat,
        #[command(flatten)]
        filter: FilterArgs,
    },
}
