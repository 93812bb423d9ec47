//! Terminal rendering of analysis results.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

use crate::analysis::{AnalysisResult, Classification, SignalKind, SignalReport};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

pub const DISCLAIMER: &str = "Note: This is a demonstration. Real-world fact-checking requires multiple sources and expert verification.";

/// How a metric value reads for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Good,
    Caution,
    Bad,
}

impl Band {
    /// Band for a metric. `good_when_low` marks metrics where a high value is
    /// the warning sign.
    pub fn for_metric(value: f64, good_when_low: bool) -> Self {
        if good_when_low {
            if value > 0.7 {
                Band::Bad
            } else if value > 0.4 {
                Band::Caution
            } else {
                Band::Good
            }
        } else if value < 0.3 {
            Band::Bad
        } else if value < 0.6 {
            Band::Caution
        } else {
            Band::Good
        }
    }

    fn color(&self) -> Color {
        match self {
            Band::Good => Color::Green,
            Band::Caution => Color::Yellow,
            Band::Bad => Color::Red,
        }
    }
}

/// Renders results as plain or coloured text.
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    color: bool,
}

impl TextReport {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();
        let classification = result.classification;

        let headline = format!(
            "{} {}",
            verdict_icon(classification),
            classification.label()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", self.headline(&headline, classification));
        let _ = writeln!(out);

        let confidence = percentage(result.confidence_score);
        let _ = writeln!(
            out,
            "  {:<width$}{:>4}%",
            "Confidence",
            confidence,
            width = BAR_WIDTH + 1
        );
        let _ = writeln!(
            out,
            "  {}",
            self.paint(&bar(result.confidence_score), verdict_color(classification))
        );
        let _ = writeln!(
            out,
            "  {:<width$}{:>5}",
            "Low",
            "High",
            width = BAR_WIDTH
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "  {}", self.strong("Analysis Explanation"));
        for point in &result.explanation {
            let _ = writeln!(out, "  • {}", point);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "  {}", self.strong("Content Metrics"));
        for (label, value, good_when_low) in result.features.entries() {
            let band = Band::for_metric(value, good_when_low);
            let _ = writeln!(
                out,
                "  {:<label_width$}{} {:>4}%",
                label,
                self.paint(&bar(value), band.color()),
                percentage(value),
                label_width = LABEL_WIDTH
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", DISCLAIMER);

        out
    }

    /// List the phrases that triggered each signal.
    pub fn render_signals(&self, report: &SignalReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  {}", self.strong("Detected Signals"));
        for kind in [
            SignalKind::Clickbait,
            SignalKind::Sensational,
            SignalKind::Emotional,
        ] {
            let phrases = report.phrases(kind);
            let listed = if phrases.is_empty() {
                "none".to_string()
            } else {
                phrases.join(", ")
            };
            let _ = writeln!(out, "  {:<12} {}", kind.as_str(), listed);
        }
        out
    }

    fn headline(&self, text: &str, classification: Classification) -> String {
        if self.color {
            text.with(verdict_color(classification)).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn strong(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Rounded percentage of a `[0, 1]` value.
pub fn percentage(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn bar(value: f64) -> String {
    let filled = (percentage(value) as usize * BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

fn verdict_icon(classification: Classification) -> &'static str {
    match classification {
        Classification::Real => "✔",
        Classification::Fake => "✘",
        Classification::Unknown => "?",
    }
}

fn verdict_color(classification: Classification) -> Color {
    match classification {
        Classification::Real => Color::Green,
        Classification::Fake => Color::Red,
        Classification::Unknown => Color::Grey,
    }
}
