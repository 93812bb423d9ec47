//! Rendering analysis results for people (text) and tools (JSON).

pub mod json;
pub mod text;

pub use text::{Band, TextReport};

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::config::OutputFormat;
use crate::samples;

/// Render a result in the requested format.
pub fn render(
    format: OutputFormat,
    color: bool,
    request: &AnalysisRequest,
    result: &AnalysisResult,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(TextReport::new(color).render(result)),
        OutputFormat::Json => json::render(request, result),
    }
}

/// Render the numbered sample list in the requested format.
pub fn render_samples(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(samples::SAMPLE_TEXTS
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{}. {}", i + 1, samples::label(text)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => json::render_samples(),
    }
}
