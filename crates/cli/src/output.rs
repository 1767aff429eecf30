//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for metrics rendering
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
#[allow(dead_code)]
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a percentage figure for table cells
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Color the scaling flag: red when scaling is required
pub fn color_scaling_flag(scaling_required: bool) -> String {
    if scaling_required {
        "scale up".red().bold().to_string()
    } else {
        "ok".green().to_string()
    }
}

/// Color the demand trend
pub fn color_demand_trend(demand_increasing: bool) -> String {
    if demand_increasing {
        "increasing".yellow().to_string()
    } else {
        "stable".green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_drops_trailing_zero() {
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(81.25), "81.25%");
    }

    #[test]
    fn test_output_format_from_name() {
        assert!(matches!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json)));
        assert!(matches!(OutputFormat::from_name("table"), Some(OutputFormat::Table)));
        assert!(OutputFormat::from_name("yaml").is_none());
    }
}
