//! Human-readable reasons attached to a result.

use crate::analysis::types::{Classification, Features};

pub const SENSATIONALIST: &str =
    "Contains sensationalist language typically found in misleading content";
pub const CLICKBAIT: &str = "Uses clickbait tactics common in unreliable sources";
pub const EMOTIONAL: &str = "Heavy use of emotional language often indicates manipulation";
pub const LOW_CREDIBILITY: &str = "Source has low credibility ratings in our database";
pub const CONTRADICTS_FACTS: &str = "Contains claims that contradict established facts";
pub const BALANCED: &str = "Content appears balanced and fact-based";
pub const MEASURED: &str = "Language is measured and avoids sensationalism";
pub const SUBTLE_INDICATORS: &str = "Multiple subtle indicators of potentially misleading content";
pub const NO_INDICATORS: &str = "No clear indicators of misinformation detected";

/// Per-feature trigger points. High-is-bad features fire above their
/// threshold, credibility and consistency fire below.
const SENSATIONALISM_ABOVE: f64 = 0.6;
const CLICKBAIT_ABOVE: f64 = 0.7;
const EMOTIONAL_ABOVE: f64 = 0.7;
const CREDIBILITY_BELOW: f64 = 0.4;
const CONSISTENCY_BELOW: f64 = 0.4;
const CONFIDENT_REAL_ABOVE: f64 = 0.7;

/// Build the ordered explanation list. Never empty.
pub fn explain(
    features: &Features,
    classification: Classification,
    confidence: f64,
) -> Vec<String> {
    let mut explanation = Vec::new();

    if features.sensationalism > SENSATIONALISM_ABOVE {
        explanation.push(SENSATIONALIST.to_string());
    }
    if features.clickbait > CLICKBAIT_ABOVE {
        explanation.push(CLICKBAIT.to_string());
    }
    if features.emotional_language > EMOTIONAL_ABOVE {
        explanation.push(EMOTIONAL.to_string());
    }
    if features.source_credibility < CREDIBILITY_BELOW {
        explanation.push(LOW_CREDIBILITY.to_string());
    }
    if features.factual_consistency < CONSISTENCY_BELOW {
        explanation.push(CONTRADICTS_FACTS.to_string());
    }

    if classification == Classification::Real && confidence > CONFIDENT_REAL_ABOVE {
        explanation.push(BALANCED.to_string());
        explanation.push(MEASURED.to_string());
    }

    if explanation.is_empty() {
        let fallback = if classification == Classification::Fake {
            SUBTLE_INDICATORS
        } else {
            NO_INDICATORS
        };
        explanation.push(fallback.to_string());
    }

    explanation
}
