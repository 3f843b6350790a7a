//! Terminal chart rendering
//!
//! Optional side-effect collaborator for the scoring pipeline; the no-op
//! implementation keeps headless runs quiet.

use crate::data::types::SentimentLabel;

/// Renders a label distribution
pub trait ChartRenderer {
    fn render(&self, summary: &[(SentimentLabel, usize)]);
}

/// Horizontal bar chart printed to the terminal
#[derive(Debug, Clone)]
pub struct TermBarChart {
    /// Width of the longest bar in characters
    width: usize,
}

impl TermBarChart {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for TermBarChart {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ChartRenderer for TermBarChart {
    fn render(&self, summary: &[(SentimentLabel, usize)]) {
        let max = summary.iter().map(|(_, count)| *count).max().unwrap_or(0);
        if max == 0 {
            return;
        }

        println!("\nFeedback Sentiment Distribution");
        println!("──────────────────────────────────────────────");
        for (label, count) in summary {
            let bar_len = count * self.width / max;
            println!("  {:<8} {:>6} {}", label, count, "█".repeat(bar_len));
        }
        println!();
    }
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Default)]
pub struct NoopChart;

impl ChartRenderer for NoopChart {
    fn render(&self, _summary: &[(SentimentLabel, usize)]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderers_accept_any_summary() {
        let summary = vec![
            (SentimentLabel::Positive, 12),
            (SentimentLabel::Neutral, 5),
            (SentimentLabel::Negative, 3),
        ];

        // Neither renderer may panic, including on empty input
        TermBarChart::default().render(&summary);
        TermBarChart::new(10).render(&[]);
        NoopChart.render(&summary);
    }
}
