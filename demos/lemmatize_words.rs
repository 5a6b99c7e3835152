use lemme_rs::Lemmatizer;

fn main() {
    let lemmatizer = Lemmatizer::new();
    let words = vec!["mangeons", "finissons", "suis", "ALLONS", "devons", "xyzz"];

    println!("=== Lemmatisation (règles seules) ===");
    for word in words {
        println!("{}: {}", word, lemmatizer.resolver.resolve(word));
    }
}
