//! Content analysis.
//!
//! The analyzer shipped here is a mock: it looks for a handful of keyword
//! signals and perturbs its feature scores with random draws. It is useful
//! for demos, not for judging real news.
//!
//! - [`signals`] detects clickbait, sensational and emotional phrasing
//! - [`scoring`] turns signals into features, an overall score and a verdict
//! - [`explanation`] attaches human-readable reasons
//! - [`random`] and [`delay`] hold the injectable randomness and latency

pub mod delay;
pub mod explanation;
mod mock;
pub mod random;
pub mod scoring;
pub mod signals;
mod types;

use async_trait::async_trait;

pub use delay::{Delay, NoDelay, TokioDelay};
pub use mock::MockAnalyzer;
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use scoring::{Score, ScoreWeights};
pub use signals::{SignalDetector, SignalKind, SignalReport, Signals};
pub use types::{AnalysisRequest, AnalysisResult, Classification, Features};

use crate::error::AnalysisError;

/// Something that can classify a piece of content.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze a request. Callers reject blank text before calling this.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
