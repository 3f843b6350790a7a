//! Sentiment analyzer
//!
//! Scores text polarity from the lexicon with negation and intensity
//! handling: a modifier multiplies the next sentiment word, a negation
//! inverts sentiment words inside a trailing window with slight damping.

use super::lexicon::{SentimentLexicon, WorkplaceLexicon};
use super::SentimentScorer;
use crate::data::types::SentimentLabel;
use crate::nlp::Tokenizer;

/// Analysis result for one text
#[derive(Debug, Clone)]
pub struct SentimentResult {
    /// Polarity in [-1, 1]
    pub score: f64,
    /// Label derived from the score thresholds
    pub label: SentimentLabel,
    /// Sentiment words that contributed to the score
    pub key_words: Vec<ScoredWord>,
}

/// Word with its contributed score
#[derive(Debug, Clone)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Lexicon-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    tokenizer: Tokenizer,
    lexicon: WorkplaceLexicon,
    /// Words after a negation that it still inverts
    negation_window: usize,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon: WorkplaceLexicon::new(),
            negation_window: 3,
        }
    }

    /// Use a custom lexicon
    pub fn with_lexicon(mut self, lexicon: WorkplaceLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Analyze one text
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = self.tokenizer.tokenize(text);

        let mut total_score = 0.0;
        let mut word_count = 0;
        let mut key_words = Vec::new();
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.get_modifier(token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = base_score * current_modifier;

                // Invert with slight damping inside the negation window
                if negation_active && words_since_negation < self.negation_window {
                    score = -score * 0.8;
                }

                total_score += score;
                word_count += 1;
                key_words.push(ScoredWord {
                    word: token.clone(),
                    score,
                });

                // A modifier applies to one word only
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        let score = if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        SentimentResult {
            score,
            label: SentimentLabel::from_score(score),
            key_words,
        }
    }

    /// Analyze several texts
    pub fn analyze_batch(&self, texts: &[String]) -> Vec<SentimentResult> {
        texts.iter().map(|t| self.analyze(t)).collect()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn score(&self, text: &str) -> f64 {
        self.analyze(text).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_feedback() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("I enjoy coming to work every day.");

        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.1);
        assert_eq!(result.key_words.len(), 1);
        assert_eq!(result.key_words[0].word, "enjoy");
    }

    #[test]
    fn test_negative_feedback() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("Deadlines are unrealistic and stressful.");

        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < -0.1);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();

        let result = analyzer.analyze("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);

        let result = analyzer.analyze("   ");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_text_without_sentiment_words_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("Work processes are okay but could be improved.");

        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!(result.key_words.is_empty());
    }

    #[test]
    fn test_balanced_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("I feel neither satisfied nor dissatisfied.");

        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_negation_flips_sentiment() {
        let analyzer = SentimentAnalyzer::new();

        let plain = analyzer.analyze("The team is supportive.");
        let negated = analyzer.analyze("The team is not supportive.");

        assert!(plain.score > 0.0);
        assert!(negated.score < 0.0);
    }

    #[test]
    fn test_negation_window_expires() {
        let analyzer = SentimentAnalyzer::new().with_negation_window(2);
        // Four tokens between the negation and the sentiment word
        let result = analyzer.analyze("not one two three four supportive");

        assert!(result.score > 0.0);
    }

    #[test]
    fn test_modifier_scales_score() {
        let analyzer = SentimentAnalyzer::new();

        let plain = analyzer.analyze("stressful");
        let intensified = analyzer.analyze("extremely stressful");
        let softened = analyzer.analyze("slightly stressful");

        assert!(intensified.score < plain.score);
        assert!(softened.score > plain.score);
        assert!(softened.score < 0.0);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("extremely toxic horrible awful terrible burnout");

        assert!(result.score >= -1.0 && result.score <= 1.0);
    }

    #[test]
    fn test_scorer_capability() {
        let analyzer = SentimentAnalyzer::new();
        let scorer: &dyn SentimentScorer = &analyzer;

        assert!(scorer.score("Great collaboration across departments.") > 0.1);
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn test_batch_analysis() {
        let analyzer = SentimentAnalyzer::new();
        let texts = vec![
            "I feel motivated by the team and our goals.".to_string(),
            "Workload feels overwhelming lately.".to_string(),
        ];

        let results = analyzer.analyze_batch(&texts);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[1].label, SentimentLabel::Negative);
    }
}
