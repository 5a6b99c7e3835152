use lemme_rs::{Lemmatizer, SuffixClassifier};

fn main() {
    let lemmatizer = Lemmatizer::with_classifier(Some(Box::new(SuffixClassifier::new())));
    let text = "Mangerons du pain demain";

    println!("=== Analyse (règles + classifieur) ===");
    if let Some(word) = lemmatizer.first_token(text) {
        let result = lemmatizer.analyze(word);
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    }
}
