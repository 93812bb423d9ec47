//! Example inputs offered by the front end.

/// Sample headlines, neutral and sensational.
pub const SAMPLE_TEXTS: &[&str] = &[
    "Scientists discover revolutionary cancer treatment with 95% success rate in early trials",
    "BREAKING: You won't believe what this politician was caught doing! Shocking scandal exposed!",
    "Study finds moderate exercise improves heart health and longevity",
    "URGENT ALERT: Government hiding the TRUTH about mind-control chemicals in drinking water!!!",
];

/// Longest label shown before truncation.
const LABEL_MAX_CHARS: usize = 70;

/// Shorten a sample for display: the first 70 characters plus `...`.
pub fn label(text: &str) -> String {
    if text.chars().count() > LABEL_MAX_CHARS {
        let head: String = text.chars().take(LABEL_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Look up a sample by its 1-based number.
pub fn get(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|i| SAMPLE_TEXTS.get(i))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_truncates_long_samples() {
        let long = SAMPLE_TEXTS[1];
        let label = label(long);
        assert!(label.ends_with("..."));
        assert_eq!(label.chars().count(), 73);
        assert!(long.starts_with(label.trim_end_matches("...")));
    }

    #[test]
    fn test_label_keeps_short_samples() {
        assert_eq!(label(SAMPLE_TEXTS[2]), SAMPLE_TEXTS[2]);
        assert_eq!(label(&"x".repeat(70)), "x".repeat(70));
    }

    #[test]
    fn test_get_is_one_based() {
        assert_eq!(get(1), Some(SAMPLE_TEXTS[0]));
        assert_eq!(get(4), Some(SAMPLE_TEXTS[3]));
        assert_eq!(get(0), None);
        assert_eq!(get(5), None);
    }
}
