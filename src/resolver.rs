use std::collections::HashMap;
use tracing::trace;
use crate::data;

struct SuffixRule {
    suffix: String,
    // suffix length in chars, cached because accented endings like "âmes"
    // are longer in bytes than in chars
    chars: usize,
    replacement: String,
}

/// The rule engine: an exact table of irregular forms probed first, then a
/// longest-suffix scan over the rewrite rules.
pub struct Resolver {
    irregular: HashMap<String, String>,
    rules: Vec<SuffixRule>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::from_tables(data::load_irregular(), data::load_suffix_rules())
    }

    pub fn from_tables(
        irregular: HashMap<String, String>,
        suffixes: HashMap<String, String>,
    ) -> Self {
        let mut rules: Vec<SuffixRule> = suffixes
            .into_iter()
            .map(|(suffix, replacement)| SuffixRule {
                chars: suffix.chars().count(),
                suffix,
                replacement,
            })
            .collect();
        // Longest suffix first. Same-length ties fall back to lexicographic
        // order so the scan stays deterministic across runs.
        rules.sort_by(|a, b| b.chars.cmp(&a.chars).then_with(|| a.suffix.cmp(&b.suffix)));
        Self { irregular, rules }
    }

    /// Normalization applied once before every table probe.
    pub fn normalize(word: &str) -> String {
        word.trim().to_lowercase()
    }

    /// Best-guess infinitive for one conjugated form. Total: an unknown word
    /// comes back unchanged (normalized), never an error.
    pub fn resolve(&self, word: &str) -> String {
        let word = Self::normalize(word);

        if let Some(infinitive) = self.irregular.get(&word) {
            trace!(%word, %infinitive, "irregular form");
            return infinitive.clone();
        }

        let word_chars = word.chars().count();
        for rule in &self.rules {
            // the remaining root must be non-empty, so the word has to be
            // strictly longer than the suffix
            if word_chars > rule.chars && word.ends_with(&rule.suffix) {
                let root = &word[..word.len() - rule.suffix.len()];
                trace!(%word, suffix = %rule.suffix, "suffix rule");
                return format!("{}{}", root, rule.replacement);
            }
        }

        word
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
