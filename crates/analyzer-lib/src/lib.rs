//! Core library for the Cloud Resource Analyzer
//!
//! This crate provides the core functionality for:
//! - Schema validation of server resource documents
//! - Per-resource utilization and scaling metrics
//! - Structured analysis report synthesis
//! - Assistant helpers (greeting, input template, feedback responses)

pub mod assistant;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod validator;

pub use metrics::compute;
pub use models::{ResourceMetrics, ResourceRecord};
pub use pipeline::{analyze, AnalysisRejected};
pub use report::synthesize;
pub use validator::{validate, Diagnostic, ValidationResult};
