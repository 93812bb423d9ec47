//! JSON rendering of analysis results.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::samples;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    id: Uuid,
    analyzed_at: DateTime<Utc>,
    tool: &'static str,
    version: &'static str,
    request: &'a AnalysisRequest,
    result: &'a AnalysisResult,
}

/// Pretty-printed JSON envelope for one analysis.
pub fn render(request: &AnalysisRequest, result: &AnalysisResult) -> serde_json::Result<String> {
    let report = Report {
        id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        request,
        result,
    };
    serde_json::to_string_pretty(&report)
}

#[derive(Debug, Serialize)]
struct SampleEntry {
    number: usize,
    label: String,
    text: &'static str,
}

/// The sample headlines as a JSON array, numbered from 1.
pub fn render_samples() -> serde_json::Result<String> {
    let entries: Vec<SampleEntry> = samples::SAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| SampleEntry {
            number: i + 1,
            label: samples::label(text),
            text: *text,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
