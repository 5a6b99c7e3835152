pub mod analysis;
pub mod classifier;
pub mod data;
pub mod engine;
pub mod resolver;

pub use analysis::LemmaResult;
pub use classifier::{Classification, ClassifierError, SuffixClassifier, TenseClassifier};
pub use engine::Lemmatizer;
pub use resolver::Resolver;
