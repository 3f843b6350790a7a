//! Lexicon-based sentiment analysis
//!
//! - `lexicon` - workplace sentiment vocabulary
//! - `analyzer` - polarity scoring with negation and intensity handling

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{ScoredWord, SentimentAnalyzer, SentimentResult};
pub use lexicon::{SentimentLexicon, WorkplaceLexicon};

/// Capability to score text polarity
///
/// Implementations return a value in [-1, 1]; empty or lexicon-free text
/// scores 0. The scoring pipeline depends only on this trait, so other
/// analyzers can be substituted.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}
