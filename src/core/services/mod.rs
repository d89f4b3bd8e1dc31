pub mod asset_registry;
pub mod audit_trail;
pub mod export_service;
pub mod pagination;
pub mod record_filter;
pub mod report_service;
pub mod stats_service;
