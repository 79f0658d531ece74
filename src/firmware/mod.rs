pub mod config;
pub mod link;
pub mod report;
pub mod telemetry;
pub mod types;
