//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod assess;
mod batch;
mod catalog;
mod gates;
mod metrics;

pub use assess::run_assess;
pub use batch::{assess_batch, run_batch};
pub use catalog::{CatalogSection, run_catalog};
pub use gates::run_gates;
pub use metrics::run_metrics;

// Re-export config types used by handlers
pub use crate::config::{AppConfig, CliOverrides};
