use serde::{Deserialize, Serialize};

/// One analyzed word. `lemma` always comes from the rule engine; the
/// grammatical fields are present only when a classifier contributed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaResult {
    pub lemma: String,
    pub tense: Option<String>,
    pub mood: Option<String>,
    /// 0–5: 1st/2nd/3rd person singular, then 1st/2nd/3rd plural.
    pub person: Option<u8>,
}

impl LemmaResult {
    pub fn rule_only(lemma: String) -> Self {
        Self {
            lemma,
            tense: None,
            mood: None,
            person: None,
        }
    }
}
