//! Truth Sifter: a demo misinformation analyzer.
//!
//! Text (and an optional source URL) goes through a mock analyzer that looks
//! for clickbait, sensational and emotional phrasing, draws five feature
//! scores, and classifies the content as real or fake with a confidence
//! score and a list of reasons.
//!
//! ```no_run
//! use truth_sifter::analysis::{AnalysisRequest, Analyzer, MockAnalyzer};
//!
//! # async fn demo() -> Result<(), truth_sifter::error::AnalysisError> {
//! let analyzer = MockAnalyzer::default();
//! let result = analyzer
//!     .analyze(&AnalysisRequest::new("BREAKING: shocking discovery"))
//!     .await?;
//! println!("{} ({:.0}%)", result.classification, result.confidence_score * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod samples;
pub mod session;
pub mod validation;

pub use config::Config;
