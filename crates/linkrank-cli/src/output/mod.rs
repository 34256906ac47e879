//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{IterationReport, RankTable};

/// Results of both estimators for one corpus
pub struct RankReport {
    pub damping: f64,
    pub samples: usize,
    pub sampled: RankTable,
    pub iterated: IterationReport,
}

/// Format a rank report
pub fn format_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
