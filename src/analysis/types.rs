//! Request and result types for content analysis.

use serde::{Deserialize, Serialize};

/// Content submitted for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-form news text, headline or claim.
    pub text: String,
    /// Optional source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AnalysisRequest {
    /// Create a request with no source URL.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }

    /// Set the source URL. Surrounding whitespace is trimmed and a blank URL
    /// leaves the request without a source.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim();
        self.url = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Whether the request carries a non-blank source URL.
    pub fn has_source(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

/// Verdict assigned to analyzed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    Real,
    Fake,
    /// No analysis has produced a verdict yet.
    #[default]
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Real => "real",
            Classification::Fake => "fake",
            Classification::Unknown => "unknown",
        }
    }

    /// Headline shown for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Real => "Likely Authentic",
            Classification::Fake => "Potentially Misleading",
            Classification::Unknown => "Inconclusive",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown travels as `null` so results keep the shape `'real' | 'fake' | null`.
impl Serialize for Classification {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Classification::Unknown => serializer.serialize_none(),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("unknown") => Ok(Classification::Unknown),
            Some("real") => Ok(Classification::Real),
            Some("fake") => Ok(Classification::Fake),
            Some(other) => Err(serde::de::Error::unknown_variant(
                other,
                &["real", "fake", "unknown"],
            )),
        }
    }
}

/// The five per-content metrics, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub sensationalism: f64,
    pub clickbait: f64,
    pub emotional_language: f64,
    pub source_credibility: f64,
    pub factual_consistency: f64,
}

impl Features {
    /// Metrics in display order, paired with their labels and whether a low
    /// value is the good outcome.
    pub fn entries(&self) -> [(&'static str, f64, bool); 5] {
        [
            ("Sensationalism", self.sensationalism, true),
            ("Clickbait Language", self.clickbait, true),
            ("Emotional Language", self.emotional_language, true),
            ("Source Credibility", self.source_credibility, false),
            ("Factual Consistency", self.factual_consistency, false),
        ]
    }
}

/// Outcome of analyzing a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub classification: Classification,
    /// Distance of the overall score from the 0.5 midpoint, scaled to `[0, 1]`.
    pub confidence_score: f64,
    pub features: Features,
    /// Ordered, human-readable reasons. Never empty.
    pub explanation: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_with_url_trims_and_drops_blank() {
        let request = AnalysisRequest::new("text").with_url("  https://example.com/a  ");
        assert_eq!(request.url.as_deref(), Some("https://example.com/a"));
        assert!(request.has_source());

        let request = AnalysisRequest::new("text").with_url("   ");
        assert_eq!(request.url, None);
        assert!(!request.has_source());
    }

    #[test]
    fn test_blank_url_field_is_not_a_source() {
        let request = AnalysisRequest {
            text: "text".to_string(),
            url: Some(String::new()),
        };
        assert!(!request.has_source());
    }

    #[test]
    fn test_result_serializes_with_camel_case_fields() {
        let result = AnalysisResult {
            classification: Classification::Fake,
            confidence_score: 0.5,
            features: Features {
                sensationalism: 1.0,
                clickbait: 0.5,
                emotional_language: 0.25,
                source_credibility: 0.5,
                factual_consistency: 0.0,
            },
            explanation: vec!["reason".to_string()],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "classification": "fake",
                "confidenceScore": 0.5,
                "features": {
                    "sensationalism": 1.0,
                    "clickbait": 0.5,
                    "emotionalLanguage": 0.25,
                    "sourceCredibility": 0.5,
                    "factualConsistency": 0.0
                },
                "explanation": ["reason"]
            })
        );

        let back: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_unknown_classification_is_null() {
        let value = serde_json::to_value(Classification::Unknown).unwrap();
        assert!(value.is_null());
        let parsed: Classification = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Classification::Unknown);
        assert!(serde_json::from_str::<Classification>("\"maybe\"").is_err());
    }
}
