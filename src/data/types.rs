//! Workforce data structures
//!
//! Row types for the generated tables and the scored feedback output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable zero-padded identifier (E001, E002, ...)
    pub id: String,
    /// Generated full name
    pub name: String,
    /// Department name
    pub department: String,
    /// Role within the department
    pub role: String,
    /// Office location
    pub location: String,
    /// Tenure in years, rounded to one decimal
    pub tenure_years: f64,
}

/// Daily performance record, one per employee per weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub tasks_completed: u32,
    /// Hours worked, within [7, 9]
    pub hours_worked: f64,
    /// Efficiency score, within [0.2, 0.9]
    pub efficiency: f64,
}

/// Monthly feedback record, one per employee per month-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "FeedbackText")]
    pub text: String,
}

/// Feedback record with derived sentiment columns
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFeedback {
    pub employee_id: String,
    pub date: NaiveDate,
    pub text: String,
    /// Raw polarity in [-1, 1], rounded to 4 decimals
    pub score: f64,
    /// (score + 1) / 2, rounded to 3 decimals
    pub normalized: f64,
    pub label: SentimentLabel,
}

/// Categorical sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label for a raw polarity score
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            SentimentLabel::Positive
        } else if score < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
