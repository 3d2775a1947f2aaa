pub mod config;
pub mod error;
pub mod fortune;
pub mod telemetry;
