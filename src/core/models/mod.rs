pub mod asset;
pub mod audit_entry;
pub mod export;
pub mod record;
pub mod report;
pub mod timestamp;
