//! Keyword-and-dice analyzer.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::analysis::delay::{Delay, TokioDelay};
use crate::analysis::explanation::explain;
use crate::analysis::random::{self, RandomSource};
use crate::analysis::scoring::{self, ScoreWeights};
use crate::analysis::signals::{SignalDetector, SignalKind};
use crate::analysis::types::{AnalysisRequest, AnalysisResult};
use crate::analysis::Analyzer;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Mock analyzer combining keyword signals with random feature draws.
///
/// Output is not reproducible unless a seeded or fixed random source is
/// supplied.
pub struct MockAnalyzer {
    detector: SignalDetector,
    rng: Mutex<Box<dyn RandomSource>>,
    delay: Box<dyn Delay>,
    latency: Duration,
    weights: ScoreWeights,
}

impl MockAnalyzer {
    /// Create an analyzer from configuration.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            detector: SignalDetector::new(),
            rng: Mutex::new(random::from_seed(config.seed)),
            delay: Box::new(TokioDelay),
            latency: config.delay,
            weights: ScoreWeights::DEFAULT,
        }
    }

    /// Replace the random source.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    /// Replace how the simulated latency is awaited.
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Score synchronously, skipping the simulated latency.
    pub fn analyze_now(&self, request: &AnalysisRequest) -> AnalysisResult {
        let report = self.detector.detect(&request.text);
        tracing::debug!(
            clickbait = ?report.phrases(SignalKind::Clickbait),
            sensational = ?report.phrases(SignalKind::Sensational),
            emotional = ?report.phrases(SignalKind::Emotional),
            "Detected signals"
        );

        let features = {
            // Draws never panic, so a poisoned lock still holds a usable source.
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            scoring::compute_features(&report.signals, request.has_source(), &mut **rng)
        };

        let score = scoring::score(&features, &self.weights);
        tracing::debug!(
            overall = score.overall,
            classification = %score.classification,
            confidence = score.confidence,
            "Scored content"
        );

        AnalysisResult {
            classification: score.classification,
            confidence_score: score.confidence,
            features,
            explanation: explain(&features, score.classification, score.confidence),
        }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.delay.wait(self.latency).await;
        Ok(self.analyze_now(request))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analysis::delay::NoDelay;
    use crate::analysis::explanation;
    use crate::analysis::random::FixedRandom;
    use crate::analysis::types::Classification;

    fn analyzer(draw: f64) -> MockAnalyzer {
        MockAnalyzer::default()
            .with_random(FixedRandom::constant(draw))
            .with_delay(NoDelay)
    }

    #[tokio::test]
    async fn test_neutral_headline_is_real() {
        let request = AnalysisRequest::new(
            "Scientists discover revolutionary cancer treatment with 95% success rate in early trials",
        );
        let result = analyzer(0.5).analyze(&request).await.unwrap();

        assert_eq!(result.classification, Classification::Real);
        assert!((result.features.sensationalism - 0.2).abs() < 1e-9);
        assert!((result.features.clickbait - 0.15).abs() < 1e-9);
        assert!((result.features.emotional_language - 0.25).abs() < 1e-9);
        assert_eq!(result.features.source_credibility, 0.5);
        assert!((result.confidence_score - 0.53).abs() < 1e-9);
        assert_eq!(
            result.explanation,
            vec![explanation::NO_INDICATORS.to_string()]
        );
    }

    #[tokio::test]
    async fn test_breaking_shocking_is_fake() {
        let request = AnalysisRequest::new(
            "BREAKING: You won't believe what this politician was caught doing! Shocking scandal exposed!",
        );
        let result = analyzer(0.5).analyze(&request).await.unwrap();

        assert_eq!(result.classification, Classification::Fake);
        assert!((result.features.sensationalism - 0.85).abs() < 1e-9);
        assert!((result.features.clickbait - 0.9).abs() < 1e-9);
        assert!((result.confidence_score - 0.45).abs() < 1e-9);
        assert_eq!(
            result.explanation,
            vec![
                explanation::SENSATIONALIST.to_string(),
                explanation::CLICKBAIT.to_string(),
                explanation::CONTRADICTS_FACTS.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_clickbait_always_in_signal_range() {
        let analyzer = MockAnalyzer::new(&AnalysisConfig {
            delay: Duration::ZERO,
            seed: None,
        })
        .with_delay(NoDelay);
        let request = AnalysisRequest::new("This incredible trick will change your life");

        for _ in 0..200 {
            let result = analyzer.analyze(&request).await.unwrap();
            assert!((0.8..=1.0).contains(&result.features.clickbait));
            assert!(!result.explanation.is_empty());
            assert_ne!(result.classification, Classification::Unknown);
        }
    }

    #[tokio::test]
    async fn test_source_url_changes_credibility_range() {
        let request = AnalysisRequest::new("Council approves budget").with_url("https://example.com");
        let result = analyzer(0.0).analyze(&request).await.unwrap();
        assert!((result.features.source_credibility - 0.3).abs() < 1e-9);
        assert!(
            result
                .explanation
                .contains(&explanation::LOW_CREDIBILITY.to_string())
        );
    }

    #[tokio::test]
    async fn test_seeded_analyzers_agree() {
        let config = AnalysisConfig {
            delay: Duration::ZERO,
            seed: Some(99),
        };
        let a = MockAnalyzer::new(&config).with_delay(NoDelay);
        let b = MockAnalyzer::new(&config).with_delay(NoDelay);
        let request = AnalysisRequest::new("URGENT ALERT: furious residents demand answers");

        assert_eq!(
            a.analyze(&request).await.unwrap(),
            b.analyze(&request).await.unwrap()
        );
    }

    #[test]
    fn test_whitespace_text_does_not_fail() {
        let result = analyzer(0.3).analyze_now(&AnalysisRequest::new("   "));
        assert!(!result.explanation.is_empty());
    }
}
