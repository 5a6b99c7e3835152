use std::collections::HashMap;
use serde_json;
use crate::classifier::TenseEntry;

pub fn load_irregular() -> HashMap<String, String> {
    let data = include_str!("../data/irregular.json");
    serde_json::from_str(data).unwrap_or_default()
}

pub fn load_suffix_rules() -> HashMap<String, String> {
    let data = include_str!("../data/suffix_rules.json");
    serde_json::from_str(data).unwrap_or_default()
}

pub fn load_tense_rules() -> HashMap<String, TenseEntry> {
    let data = include_str!("../data/tense_rules.json");
    serde_json::from_str(data).unwrap_or_default()
}
