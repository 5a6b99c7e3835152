use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::data;
use crate::resolver::Resolver;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier backend unavailable: {0}")]
    Unavailable(String),
}

/// What a classifier knows about one conjugated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub infinitive: String,
    pub tense: String,
    pub mood: String,
    pub person: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenseEntry {
    pub tense: String,
    pub mood: String,
    pub person: u8,
}

/// Trait for tense/mood/person providers layered on top of the rule engine.
///
/// `Ok(None)` means the word carries nothing the provider recognizes;
/// `Err` means the provider itself is broken or unreachable. Callers treat
/// both as "rule-only result", never as a failure of the lookup.
pub trait TenseClassifier: Send + Sync {
    fn classify(&self, word: &str) -> Result<Option<Classification>, ClassifierError>;
}

/// Built-in provider: a third static table mapping unambiguous verb endings
/// to their tense, mood and person. Endings shared across several cells of
/// the paradigm (bare "e", "s", "t") are deliberately absent, so the
/// classifier abstains instead of guessing.
pub struct SuffixClassifier {
    entries: Vec<(String, usize, TenseEntry)>,
    resolver: Resolver,
}

impl SuffixClassifier {
    pub fn new() -> Self {
        let mut entries: Vec<(String, usize, TenseEntry)> = data::load_tense_rules()
            .into_iter()
            .map(|(suffix, entry)| {
                let chars = suffix.chars().count();
                (suffix, chars, entry)
            })
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self {
            entries,
            resolver: Resolver::new(),
        }
    }
}

impl Default for SuffixClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TenseClassifier for SuffixClassifier {
    fn classify(&self, word: &str) -> Result<Option<Classification>, ClassifierError> {
        let word = Resolver::normalize(word);
        let word_chars = word.chars().count();
        for (suffix, chars, entry) in &self.entries {
            if word_chars > *chars && word.ends_with(suffix.as_str()) {
                return Ok(Some(Classification {
                    infinitive: self.resolver.resolve(&word),
                    tense: entry.tense.clone(),
                    mood: entry.mood.clone(),
                    person: entry.person,
                }));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_endings() {
        let classifier = SuffixClassifier::new();
        let c = classifier.classify("mangerons").unwrap().unwrap();
        assert_eq!(c.infinitive, "manger");
        assert_eq!(c.tense, "futur");
        assert_eq!(c.mood, "indicatif");
        assert_eq!(c.person, 3);
    }

    #[test]
    fn test_imperfect_over_present() {
        let classifier = SuffixClassifier::new();
        // "ions" (imparfait) must win over "ons" (présent)
        let c = classifier.classify("mangions").unwrap().unwrap();
        assert_eq!(c.tense, "imparfait");
        assert_eq!(c.person, 3);
    }

    #[test]
    fn test_second_group_present() {
        let classifier = SuffixClassifier::new();
        let c = classifier.classify("finissons").unwrap().unwrap();
        assert_eq!(c.infinitive, "finir");
        assert_eq!(c.tense, "présent");
        assert_eq!(c.person, 3);
    }

    #[test]
    fn test_abstains_on_ambiguous_endings() {
        let classifier = SuffixClassifier::new();
        assert!(classifier.classify("parle").unwrap().is_none());
        assert!(classifier.classify("xyzz").unwrap().is_none());
        assert!(classifier.classify("").unwrap().is_none());
    }
}
