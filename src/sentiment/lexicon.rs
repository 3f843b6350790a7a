//! Workplace sentiment lexicon
//!
//! Word polarity scores for employee feedback text, plus intensity
//! modifiers and negation words.

use std::collections::HashMap;

/// Word polarity lookup
pub trait SentimentLexicon {
    /// Polarity of a word in [-1, 1], if known
    fn get_score(&self, word: &str) -> Option<f64>;

    /// Whether the word carries sentiment
    fn contains(&self, word: &str) -> bool;

    /// All sentiment words
    fn words(&self) -> Vec<&str>;
}

/// Workplace-specific sentiment lexicon
#[derive(Debug, Clone)]
pub struct WorkplaceLexicon {
    /// Positive words with scores
    positive: HashMap<String, f64>,
    /// Negative words with scores
    negative: HashMap<String, f64>,
    /// Intensity modifiers (multipliers applied to the next sentiment word)
    modifiers: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
}

impl WorkplaceLexicon {
    /// Build the lexicon with the bundled vocabulary
    pub fn new() -> Self {
        let mut positive = HashMap::new();
        let mut negative = HashMap::new();
        let mut modifiers = HashMap::new();

        // Strongly positive (0.6 - 0.9)
        let strong_positive = [
            ("motivated", 0.7),
            ("motivating", 0.7),
            ("supportive", 0.7),
            ("great", 0.7),
            ("excellent", 0.8),
            ("outstanding", 0.8),
            ("enjoy", 0.7),
            ("enjoyable", 0.7),
            ("love", 0.75),
            ("amazing", 0.8),
            ("fantastic", 0.8),
            ("rewarding", 0.7),
            ("appreciated", 0.7),
            ("inspiring", 0.75),
            ("empowered", 0.7),
            ("thriving", 0.75),
            ("satisfied", 0.6),
            ("collaboration", 0.6),
            ("collaborative", 0.6),
            ("constructive", 0.6),
        ];

        // Moderately positive (0.3 - 0.6)
        let moderate_positive = [
            ("good", 0.5),
            ("helpful", 0.55),
            ("productive", 0.55),
            ("positive", 0.5),
            ("flexible", 0.5),
            ("encouraging", 0.55),
            ("recognition", 0.5),
            ("fair", 0.45),
            ("balanced", 0.45),
            ("manageable", 0.4),
            ("friendly", 0.5),
            ("efficient", 0.5),
            ("organized", 0.45),
            ("respectful", 0.55),
            ("transparent", 0.5),
        ];

        // Strongly negative (-0.6 to -0.9)
        let strong_negative = [
            ("stressful", -0.7),
            ("overwhelming", -0.7),
            ("overwhelmed", -0.7),
            ("toxic", -0.9),
            ("burnout", -0.85),
            ("awful", -0.8),
            ("terrible", -0.8),
            ("horrible", -0.85),
            ("exhausting", -0.75),
            ("exhausted", -0.75),
            ("micromanaged", -0.75),
            ("disrespectful", -0.8),
            ("worst", -0.85),
            ("hate", -0.75),
            ("underpaid", -0.7),
            ("unbearable", -0.85),
        ];

        // Moderately negative (-0.3 to -0.6)
        let moderate_negative = [
            ("unrealistic", -0.6),
            ("lack", -0.6),
            ("lacking", -0.6),
            ("limited", -0.6),
            ("unclear", -0.6),
            ("stressed", -0.6),
            ("dissatisfied", -0.6),
            ("frustrating", -0.65),
            ("frustrated", -0.6),
            ("overworked", -0.65),
            ("understaffed", -0.6),
            ("chaotic", -0.6),
            ("unfair", -0.65),
            ("ignored", -0.6),
            ("poor", -0.55),
            ("bad", -0.5),
            ("confusing", -0.5),
            ("pressure", -0.45),
            ("tedious", -0.45),
            ("repetitive", -0.4),
            ("demanding", -0.4),
        ];

        for (word, score) in strong_positive.iter().chain(moderate_positive.iter()) {
            positive.insert(word.to_string(), *score);
        }
        for (word, score) in strong_negative.iter().chain(moderate_negative.iter()) {
            negative.insert(word.to_string(), *score);
        }

        // Intensity modifiers
        let modifier_words = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("incredibly", 1.7),
            ("highly", 1.4),
            ("truly", 1.5),
            ("absolutely", 1.6),
            ("quite", 1.2),
            ("rather", 1.1),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
        ];

        for (word, multiplier) in modifier_words {
            modifiers.insert(word.to_string(), multiplier);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
            "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
            "cant", "can't", "couldnt", "couldn't", "wont", "won't",
            "wouldnt", "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't",
            "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
            "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't",
        ]
        .into_iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            positive,
            negative,
            modifiers,
            negations,
        }
    }

    /// Whether the word negates following sentiment words
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Intensity multiplier for the word, if it is a modifier
    pub fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(&word.to_lowercase()).copied()
    }

    /// Add a custom word; negative scores go to the negative table
    pub fn add_word(&mut self, word: &str, score: f64) {
        let word_lower = word.to_lowercase();
        if score >= 0.0 {
            self.positive.insert(word_lower, score);
        } else {
            self.negative.insert(word_lower, score);
        }
    }

    /// Lexicon size statistics
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive_count: self.positive.len(),
            negative_count: self.negative.len(),
            modifier_count: self.modifiers.len(),
            negation_count: self.negations.len(),
        }
    }
}

impl Default for WorkplaceLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for WorkplaceLexicon {
    fn get_score(&self, word: &str) -> Option<f64> {
        let word_lower = word.to_lowercase();

        self.positive
            .get(&word_lower)
            .or_else(|| self.negative.get(&word_lower))
            .copied()
    }

    fn contains(&self, word: &str) -> bool {
        let word_lower = word.to_lowercase();
        self.positive.contains_key(&word_lower) || self.negative.contains_key(&word_lower)
    }

    fn words(&self) -> Vec<&str> {
        self.positive
            .keys()
            .chain(self.negative.keys())
            .map(|s| s.as_str())
            .collect()
    }
}

/// Lexicon size statistics
#[derive(Debug, Clone)]
pub struct LexiconStats {
    pub positive_count: usize,
    pub negative_count: usize,
    pub modifier_count: usize,
    pub negation_count: usize,
}
