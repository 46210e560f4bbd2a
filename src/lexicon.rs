//! Fixed-lexicon polarity matcher.
//!
//! Reports whether a text contains any positive or negative indicator term.
//! Matching is substring-based over the lowercased input: a term counts as a
//! hit anywhere inside the text, so "badass" matches "bad". Word-boundary
//! tokenization would be stricter but is a behavior change, so the substring
//! semantics are kept as-is.

/// Base positive indicator terms.
const POSITIVE_TERMS: &[&str] = &[
    "love",
    "great",
    "awesome",
    "excellent",
    "amazing",
    "wonderful",
];

/// Base negative indicator terms.
const NEGATIVE_TERMS: &[&str] = &["hate", "terrible", "awful", "horrible", "worst", "bad"];

/// Outcome of an indicator scan over one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorMatch {
    pub has_positive: bool,
    pub has_negative: bool,
}

/// Case-insensitive substring matcher over a positive and a negative term set.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Build the base lexicon, extended (never replaced) by extra terms from
    /// configuration. Extra terms are lowercased on the way in so matching
    /// stays case-insensitive.
    pub fn new(extra_positive: &[String], extra_negative: &[String]) -> Self {
        let mut positive: Vec<String> = POSITIVE_TERMS.iter().map(|t| t.to_string()).collect();
        positive.extend(extra_positive.iter().map(|t| t.to_lowercase()));

        let mut negative: Vec<String> = NEGATIVE_TERMS.iter().map(|t| t.to_string()).collect();
        negative.extend(extra_negative.iter().map(|t| t.to_lowercase()));

        Self { positive, negative }
    }

    /// Scan `text` for indicator terms. Pure and total over any input,
    /// including empty and non-ASCII strings.
    pub fn classify_indicators(&self, text: &str) -> IndicatorMatch {
        let lowered = text.to_lowercase();
        IndicatorMatch {
            has_positive: self.positive.iter().any(|t| lowered.contains(t.as_str())),
            has_negative: self.negative.iter().any(|t| lowered.contains(t.as_str())),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(&[], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_indicator() {
        let hit = Lexicon::default().classify_indicators("I love this product!");
        assert!(hit.has_positive);
        assert!(!hit.has_negative);
    }

    #[test]
    fn test_negative_indicator() {
        let hit = Lexicon::default().classify_indicators("This is terrible.");
        assert!(!hit.has_positive);
        assert!(hit.has_negative);
    }

    #[test]
    fn test_case_insensitive() {
        let hit = Lexicon::default().classify_indicators("AbSoLuTeLy WONDERFUL");
        assert!(hit.has_positive);
    }

    #[test]
    fn test_both_polarities() {
        let hit = Lexicon::default().classify_indicators("great idea, terrible execution");
        assert!(hit.has_positive);
        assert!(hit.has_negative);
    }

    #[test]
    fn test_no_indicators() {
        let hit = Lexicon::default().classify_indicators("a perfectly neutral sentence");
        assert!(!hit.has_positive);
        assert!(!hit.has_negative);
    }

    #[test]
    fn test_empty_text() {
        let hit = Lexicon::default().classify_indicators("");
        assert!(!hit.has_positive);
        assert!(!hit.has_negative);
    }

    #[test]
    fn test_substring_matching_inside_words() {
        // Documents the inherited substring semantics: "badass" contains "bad".
        let hit = Lexicon::default().classify_indicators("what a badass move");
        assert!(hit.has_negative);
    }

    #[test]
    fn test_non_ascii_text() {
        let hit = Lexicon::default().classify_indicators("すばらしい — love it");
        assert!(hit.has_positive);
        assert!(!hit.has_negative);
    }

    #[test]
    fn test_extra_terms_extend_base_sets() {
        let lex = Lexicon::new(&["stellar".to_string()], &["Dreadful".to_string()]);
        assert!(lex.classify_indicators("a stellar outcome").has_positive);
        assert!(lex.classify_indicators("a dreadful outcome").has_negative);
        // Base terms still match.
        assert!(lex.classify_indicators("simply wonderful").has_positive);
    }
}
