//! Analysis and metrics commands

use std::io::Read;
use std::path::Path;

use analyzer_lib::{compute, validate, ResourceMetrics, ValidationResult};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::output::{
    color_demand_trend, color_scaling_flag, format_percent, print_error, print_info, OutputFormat,
};
use crate::sample;

/// Row for the metrics table
#[derive(Tabled)]
struct MetricsRow {
    #[tabled(rename = "Resource")]
    resource_id: String,
    #[tabled(rename = "Load")]
    current_load: String,
    #[tabled(rename = "Capacity")]
    max_capacity: String,
    #[tabled(rename = "Usage")]
    real_time_usage: String,
    #[tabled(rename = "Available")]
    available_capacity: String,
    #[tabled(rename = "Utilization")]
    utilization_ratio: String,
    #[tabled(rename = "Demand")]
    demand: String,
    #[tabled(rename = "Scaling")]
    scaling: String,
    #[tabled(rename = "Additional Needed")]
    additional: String,
}

impl From<&ResourceMetrics> for MetricsRow {
    fn from(metrics: &ResourceMetrics) -> Self {
        Self {
            resource_id: metrics.resource_id.clone(),
            current_load: format_percent(metrics.current_load),
            max_capacity: format_percent(metrics.max_capacity),
            real_time_usage: format_percent(metrics.real_time_usage),
            available_capacity: format_percent(metrics.available_capacity),
            utilization_ratio: format_percent(metrics.utilization_ratio),
            demand: color_demand_trend(metrics.demand_increasing),
            scaling: color_scaling_flag(metrics.scaling_required),
            additional: match metrics.additional_capacity_needed {
                Some(needed) => format_percent(needed),
                None => "-".to_string(),
            },
        }
    }
}

/// Analyze a document and print the full report
pub fn run(file: Option<&Path>) -> Result<()> {
    let document = read_document(file)?;
    print_report(&document)
}

/// Analyze the built-in sample dataset
pub fn demo() -> Result<()> {
    print_info("Running analysis over the built-in sample dataset");
    print_report(&sample::sample_document())
}

/// Validate a document and render the derived metrics
pub fn metrics(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let document = read_document(file)?;

    let records = match validate(&document) {
        ValidationResult::Valid(records) => records,
        ValidationResult::Invalid(diagnostics) => {
            return reject(diagnostics.iter().map(|diagnostic| diagnostic.line()));
        }
    };

    let all_metrics: Vec<ResourceMetrics> = records.iter().map(compute).collect();
    debug!(records = all_metrics.len(), "metrics computed");

    match format {
        OutputFormat::Table => {
            let rows: Vec<MetricsRow> = all_metrics.iter().map(MetricsRow::from).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&all_metrics)?);
        }
    }

    Ok(())
}

fn print_report(document: &Value) -> Result<()> {
    match analyzer_lib::analyze(document) {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(rejected) => reject(rejected.lines()),
    }
}

fn reject(lines: impl IntoIterator<Item = String>) -> Result<()> {
    for line in lines {
        eprintln!("{line}");
    }
    print_error("Input document rejected; fix the reported problems and retry.");
    bail!("validation failed")
}

fn read_document(file: Option<&Path>) -> Result<Value> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(&content).context("Input is not valid JSON")
}
