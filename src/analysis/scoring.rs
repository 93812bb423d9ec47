//! Feature computation, weighting and verdict.
//!
//! Each content feature is drawn from a range picked by its keyword signal:
//!
//! ```text
//! feature             signal present        signal absent
//! sensationalism      0.7 + r * 0.3         r * 0.4
//! clickbait           0.8 + r * 0.2         r * 0.3
//! emotional language  0.6 + r * 0.4         r * 0.5
//! source credibility  0.3 + r * 0.4 (url)   0.5 (no url)
//! factual consistency max(0, 1 - (sensationalism + clickbait) / 2)
//! ```

use crate::analysis::random::RandomSource;
use crate::analysis::signals::Signals;
use crate::analysis::types::{Classification, Features};

/// Overall scores strictly above this are classified as fake.
pub const FAKE_THRESHOLD: f64 = 0.6;

/// Midpoint the confidence score is measured from.
pub const DECISION_MIDPOINT: f64 = 0.5;

/// Weights of the linear overall score. Credibility and consistency enter
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub sensationalism: f64,
    pub clickbait: f64,
    pub emotional_language: f64,
    pub source_credibility: f64,
    pub factual_consistency: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        sensationalism: 0.25,
        clickbait: 0.25,
        emotional_language: 0.15,
        source_credibility: 0.15,
        factual_consistency: 0.20,
    };

    pub fn total(&self) -> f64 {
        self.sensationalism
            + self.clickbait
            + self.emotional_language
            + self.source_credibility
            + self.factual_consistency
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Weighted score and the verdict derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub overall: f64,
    pub classification: Classification,
    pub confidence: f64,
}

/// Compute the five features.
///
/// Draws are taken in a fixed order: sensationalism, clickbait, emotional
/// language, then source credibility only when a source is present.
pub fn compute_features(
    signals: &Signals,
    has_source: bool,
    rng: &mut dyn RandomSource,
) -> Features {
    let sensationalism = draw(rng, signals.sensational, 0.7, 0.3, 0.4);
    let clickbait = draw(rng, signals.clickbait, 0.8, 0.2, 0.3);
    let emotional_language = draw(rng, signals.emotional, 0.6, 0.4, 0.5);

    let source_credibility = if has_source {
        0.3 + rng.next_f64() * 0.4
    } else {
        0.5
    };

    let factual_consistency = (1.0 - (sensationalism + clickbait) / 2.0).max(0.0);

    Features {
        sensationalism,
        clickbait,
        emotional_language,
        source_credibility,
        factual_consistency,
    }
}

fn draw(
    rng: &mut dyn RandomSource,
    signal: bool,
    floor: f64,
    spread_present: f64,
    spread_absent: f64,
) -> f64 {
    let r = rng.next_f64();
    let value = if signal {
        floor + r * spread_present
    } else {
        r * spread_absent
    };
    value.min(1.0)
}

/// Linear combination of the features.
pub fn overall_score(features: &Features, weights: &ScoreWeights) -> f64 {
    features.sensationalism * weights.sensationalism
        + features.clickbait * weights.clickbait
        + features.emotional_language * weights.emotional_language
        + (1.0 - features.source_credibility) * weights.source_credibility
        + (1.0 - features.factual_consistency) * weights.factual_consistency
}

pub fn classify(overall: f64) -> Classification {
    if overall > FAKE_THRESHOLD {
        Classification::Fake
    } else {
        Classification::Real
    }
}

pub fn confidence(overall: f64) -> f64 {
    (overall - DECISION_MIDPOINT).abs() * 2.0
}

/// Score a feature set.
pub fn score(features: &Features, weights: &ScoreWeights) -> Score {
    let overall = overall_score(features, weights);
    Score {
        overall,
        classification: classify(overall),
        confidence: confidence(overall),
    }
}
