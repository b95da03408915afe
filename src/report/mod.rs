pub mod json;
pub mod md;

use crate::error::DoraError;
use crate::types::snapshot::{MetricResults, MetricsSnapshot};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    snapshot: &MetricsSnapshot,
    results: &MetricResults,
    format: OutputFormat,
) -> Result<String, DoraError> {
    match format {
        OutputFormat::Json => json::to_json(snapshot).map_err(DoraError::Json),
        OutputFormat::Md => Ok(md::to_markdown(snapshot, results)),
    }
}
