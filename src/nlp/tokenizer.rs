//! Text tokenizer
//!
//! Splits feedback text into lowercase word tokens. Apostrophes survive
//! cleaning so contracted negations ("don't") stay intact for lexicon
//! lookup.

/// Word tokenizer for feedback text
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length
    min_word_length: usize,
    /// Maximum token length
    max_word_length: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            min_word_length: 2,
            max_word_length: 50,
        }
    }

    /// Set the minimum token length
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Tokenize into lowercase words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| {
                let cleaned = clean_word(word);
                if cleaned.len() < self.min_word_length || cleaned.len() > self.max_word_length {
                    None
                } else {
                    Some(cleaned.to_lowercase())
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip punctuation, keeping in-word apostrophes and hyphens
fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Great collaboration across departments.");

        assert_eq!(tokens, vec!["great", "collaboration", "across", "departments"]);
    }

    #[test]
    fn test_punctuation_stripped() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("The work environment is fine, nothing special.");

        assert!(tokens.contains(&"fine".to_string()));
        assert!(tokens.contains(&"special".to_string()));
    }

    #[test]
    fn test_contractions_preserved() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("I don't feel supported.");

        assert!(tokens.contains(&"don't".to_string()));
    }

    #[test]
    fn test_min_length_filter() {
        let tokenizer = Tokenizer::new().with_min_length(3);
        let tokens = tokenizer.tokenize("It is a busy day");

        assert!(tokens.iter().all(|t| t.len() >= 3));
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }
}
