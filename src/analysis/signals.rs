//! Keyword signals for clickbait, sensational and emotional phrasing.

use aho_corasick::AhoCorasick;

/// Category a detected phrase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignalKind {
    Clickbait,
    Sensational,
    Emotional,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Clickbait => "clickbait",
            SignalKind::Sensational => "sensational",
            SignalKind::Emotional => "emotional",
        }
    }
}

/// Which signals fired for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub clickbait: bool,
    pub sensational: bool,
    pub emotional: bool,
}

impl Signals {
    pub fn any(&self) -> bool {
        self.clickbait || self.sensational || self.emotional
    }
}

/// A phrase found in the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMatch {
    pub kind: SignalKind,
    pub phrase: &'static str,
}

/// Signals plus the distinct phrases that triggered them.
#[derive(Debug, Clone, Default)]
pub struct SignalReport {
    pub signals: Signals,
    pub matches: Vec<SignalMatch>,
}

impl SignalReport {
    /// Phrases of one kind, in first-seen order.
    pub fn phrases(&self, kind: SignalKind) -> Vec<&'static str> {
        self.matches
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.phrase)
            .collect()
    }
}

const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "shocking",
    "mind-blowing",
    "incredible",
    "unbelievable",
];

const SENSATIONAL_PHRASES: &[&str] = &["exclusive", "breaking", "urgent", "emergency", "alert"];

const EMOTIONAL_PHRASES: &[&str] = &["outrage", "devastated", "thrilled", "furious", "ecstatic"];

/// Detects the three keyword signals in one pass over the text.
pub struct SignalDetector {
    matcher: AhoCorasick,
    patterns: Vec<(SignalKind, &'static str)>,
}

impl SignalDetector {
    /// Create a detector with the built-in phrase lists.
    pub fn new() -> Self {
        let patterns: Vec<(SignalKind, &'static str)> = CLICKBAIT_PHRASES
            .iter()
            .map(|p| (SignalKind::Clickbait, *p))
            .chain(SENSATIONAL_PHRASES.iter().map(|p| (SignalKind::Sensational, *p)))
            .chain(EMOTIONAL_PHRASES.iter().map(|p| (SignalKind::Emotional, *p)))
            .collect();

        let pattern_strings: Vec<&str> = patterns.iter().map(|(_, p)| *p).collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&pattern_strings)
            .expect("Failed to build signal matcher");

        Self { matcher, patterns }
    }

    /// Detect signals in `text`. Matching is case-insensitive.
    pub fn detect(&self, text: &str) -> SignalReport {
        let lowered = text.to_lowercase();
        let mut report = SignalReport::default();

        // Overlapping search so a phrase can never hide another one.
        for mat in self.matcher.find_overlapping_iter(&lowered) {
            let (kind, phrase) = self.patterns[mat.pattern().as_usize()];
            match kind {
                SignalKind::Clickbait => report.signals.clickbait = true,
                SignalKind::Sensational => report.signals.sensational = true,
                SignalKind::Emotional => report.signals.emotional = true,
            }
            if !report.matches.iter().any(|m| m.phrase == phrase) {
                report.matches.push(SignalMatch { kind, phrase });
            }
        }

        report
    }
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new()
    }
}
