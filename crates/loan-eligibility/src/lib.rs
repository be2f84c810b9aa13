pub mod config;
pub mod dashboard;
pub mod eligibility;
pub mod error;
pub mod telemetry;
