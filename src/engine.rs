use regex::Regex;
use tracing::debug;
use crate::analysis::LemmaResult;
use crate::classifier::TenseClassifier;
use crate::resolver::Resolver;

/// Front door of the crate: rule lemma plus optional classifier augmentation.
pub struct Lemmatizer {
    pub resolver: Resolver,
    classifier: Option<Box<dyn TenseClassifier>>,
    token_regex: Regex,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self::with_classifier(None)
    }

    pub fn with_classifier(classifier: Option<Box<dyn TenseClassifier>>) -> Self {
        let token_regex = Regex::new(r"\p{L}+(?:['’-]\p{L}+)*").unwrap();
        Self {
            resolver: Resolver::new(),
            classifier,
            token_regex,
        }
    }

    /// First word-like token of `text`, for callers holding raw text instead
    /// of an already isolated word.
    pub fn first_token<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.token_regex.find(text).map(|m| m.as_str())
    }

    /// Analyze one word. The lemma is always the rule engine's answer; the
    /// classifier only ever adds tense/mood/person on top. A classifier
    /// error degrades to the rule-only result instead of surfacing.
    pub fn analyze(&self, word: &str) -> LemmaResult {
        let mut result = LemmaResult::rule_only(self.resolver.resolve(word));

        if let Some(classifier) = &self.classifier {
            match classifier.classify(word) {
                Ok(Some(c)) => {
                    result.tense = Some(c.tense);
                    result.mood = Some(c.mood);
                    result.person = Some(c.person);
                }
                Ok(None) => {}
                Err(e) => {
                    debug!(%word, error = %e, "classifier unavailable, rule-only result");
                }
            }
        }

        result
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
