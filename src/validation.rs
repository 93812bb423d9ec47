//! Request validation.
//!
//! Runs before a request reaches the analyzer. The analyzer itself accepts
//! any text, so blank submissions must be stopped here.

use url::Url;

use crate::analysis::AnalysisRequest;

/// Result of validating a request.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the request may be analyzed.
    pub is_valid: bool,
    /// Problems that block the request.
    pub errors: Vec<ValidationError>,
    /// Observations that don't block processing.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        }
    }

    pub fn error(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
            warnings: vec![],
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Merge another validation result into this one.
    pub fn merge(mut self, other: Self) -> Self {
        self.is_valid = self.is_valid && other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    /// Error messages joined for display.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation (`text` or `url`).
    pub field: String,
    pub message: String,
    pub code: ValidationErrorCode,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    Empty,
    InvalidFormat,
}

/// Validates analysis requests.
///
/// Any non-blank text is accepted whatever its length or content.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, request: &AnalysisRequest) -> ValidationResult {
        let text = &request.text;

        if text.trim().is_empty() {
            return ValidationResult::error(ValidationError {
                field: "text".to_string(),
                message: "Text cannot be empty".to_string(),
                code: ValidationErrorCode::Empty,
            });
        }

        let mut result = ValidationResult::ok();

        if let Some(url) = request.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            if let Err(message) = check_source_url(url) {
                result = result.merge(ValidationResult::error(ValidationError {
                    field: "url".to_string(),
                    message,
                    code: ValidationErrorCode::InvalidFormat,
                }));
            }
        }

        if has_excessive_repetition(text) {
            result = result.with_warning("Text has excessive character repetition");
        }

        result
    }
}

/// Source URLs must be absolute; any scheme is accepted.
fn check_source_url(raw: &str) -> Result<(), String> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| format!("Invalid source URL '{}': {}", raw, e))
}

/// A run of 20 or more identical non-whitespace characters.
fn has_excessive_repetition(s: &str) -> bool {
    const MAX_RUN: usize = 20;

    let mut last = None;
    let mut run = 0usize;
    for c in s.chars() {
        if c.is_whitespace() {
            last = None;
            run = 0;
            continue;
        }
        if Some(c) == last {
            run += 1;
            if run >= MAX_RUN {
                return true;
            }
        } else {
            last = Some(c);
            run = 1;
        }
    }
    false
}
