pub mod asset;
pub mod audit;
pub mod export;
pub mod init;
pub mod report;
pub mod stats;
