//! Feedback scoring pipeline
//!
//! Reads a feedback CSV, scores every row through the sentiment
//! capability, writes the scored file and the label count summary, and
//! hands the summary to the chart renderer.

pub mod chart;

use crate::data::store;
use crate::data::types::{FeedbackRecord, ScoredFeedback, SentimentLabel};
use crate::sentiment::SentimentScorer;
use anyhow::Result;
use self::chart::ChartRenderer;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one scoring run
#[derive(Debug, Clone)]
pub struct ScoringReport {
    /// Number of scored records
    pub scored: usize,
    /// Label counts, descending
    pub summary: Vec<(SentimentLabel, usize)>,
    /// Files written
    pub files: Vec<PathBuf>,
}

/// Scoring pipeline wired to a sentiment capability and a chart renderer
pub struct ScoringPipeline<'a> {
    scorer: &'a dyn SentimentScorer,
    chart: &'a dyn ChartRenderer,
}

impl<'a> ScoringPipeline<'a> {
    pub fn new(scorer: &'a dyn SentimentScorer, chart: &'a dyn ChartRenderer) -> Self {
        Self { scorer, chart }
    }

    /// Score `input` and write the scored file and summary into `out_dir`
    pub fn run(&self, input: &Path, out_dir: &Path) -> Result<ScoringReport> {
        let records = store::read_feedback(input)?;
        info!("Loaded {} feedback records", records.len());

        let scored = score_records(&records, self.scorer);
        let summary = summarize(&scored);

        for (label, count) in &summary {
            info!("{}: {}", label, count);
        }

        let scored_path = out_dir.join(store::SCORED_FILE);
        let summary_path = out_dir.join(store::SUMMARY_FILE);
        store::write_scored(&scored, &scored_path)?;
        store::write_summary(&summary, &summary_path)?;

        self.chart.render(&summary);

        Ok(ScoringReport {
            scored: scored.len(),
            summary,
            files: vec![scored_path, summary_path],
        })
    }
}

/// Score every record; text is trimmed before scoring and empty text
/// scores 0 (neutral)
pub fn score_records(
    records: &[FeedbackRecord],
    scorer: &dyn SentimentScorer,
) -> Vec<ScoredFeedback> {
    records
        .iter()
        .map(|rec| {
            let text = rec.text.trim();
            let score = round_to(scorer.score(text).clamp(-1.0, 1.0), 4);
            let normalized = round_to((score + 1.0) / 2.0, 3);

            ScoredFeedback {
                employee_id: rec.employee_id.clone(),
                date: rec.date,
                text: text.to_string(),
                score,
                normalized,
                label: SentimentLabel::from_score(score),
            }
        })
        .collect()
}

/// Count records per label, ordered by count descending
///
/// Equal counts keep the Positive, Neutral, Negative order; labels with
/// no records are omitted.
pub fn summarize(scored: &[ScoredFeedback]) -> Vec<(SentimentLabel, usize)> {
    let labels = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    let mut summary: Vec<(SentimentLabel, usize)> = labels
        .iter()
        .map(|label| (*label, scored.iter().filter(|s| s.label == *label).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    summary.sort_by(|a, b| b.1.cmp(&a.1));
    summary
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentAnalyzer;
    use chrono::NaiveDate;

    fn record(id: &str, text: &str) -> FeedbackRecord {
        FeedbackRecord {
            employee_id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_score_records_derives_columns() {
        let analyzer = SentimentAnalyzer::new();
        let records = vec![
            record("E001", "I enjoy coming to work every day."),
            record("E002", "Deadlines are unrealistic and stressful."),
            record("E003", ""),
        ];

        let scored = score_records(&records, &analyzer);

        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].label, SentimentLabel::Positive);
        assert_eq!(scored[1].label, SentimentLabel::Negative);
        assert_eq!(scored[2].score, 0.0);
        assert_eq!(scored[2].normalized, 0.5);
        assert_eq!(scored[2].label, SentimentLabel::Neutral);

        for s in &scored {
            assert!(s.score >= -1.0 && s.score <= 1.0);
            assert!(s.normalized >= 0.0 && s.normalized <= 1.0);
            let expected = ((s.score + 1.0) / 2.0 * 1000.0).round() / 1000.0;
            assert!((s.normalized - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_whitespace_text_trimmed_to_neutral() {
        let analyzer = SentimentAnalyzer::new();
        let scored = score_records(&[record("E001", "   ")], &analyzer);

        assert_eq!(scored[0].text, "");
        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[0].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_summary_counts_and_order() {
        let analyzer = SentimentAnalyzer::new();
        let records = vec![
            record("E001", "I enjoy coming to work every day."),
            record("E002", "Great collaboration across departments."),
            record("E003", "Workload feels overwhelming lately."),
            record("E004", "My tasks are repetitive but manageable."),
            record("E005", "The manager gives constructive feedback regularly."),
        ];

        let scored = score_records(&records, &analyzer);
        let summary = summarize(&scored);

        let total: usize = summary.iter().map(|(_, c)| c).sum();
        assert_eq!(total, records.len());

        for pair in summary.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(summary[0].0, SentimentLabel::Positive);
        assert_eq!(summary[0].1, 3);
    }

    #[test]
    fn test_summary_omits_absent_labels() {
        let analyzer = SentimentAnalyzer::new();
        let scored = score_records(&[record("E001", "Great collaboration!")], &analyzer);
        let summary = summarize(&scored);

        assert_eq!(summary, vec![(SentimentLabel::Positive, 1)]);
    }

    #[test]
    fn test_summary_empty_input() {
        assert!(summarize(&[]).is_empty());
    }
}
