// Library crate shared by the binary and the integration tests.

pub mod analytics;
pub mod artifacts;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod mock;
pub mod orchestrator;
pub mod process;
pub mod report;
pub mod settings;
