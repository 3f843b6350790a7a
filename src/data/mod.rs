//! Data models and CSV storage

pub mod store;
pub mod types;

pub use types::{Employee, FeedbackRecord, PerformanceRecord, ScoredFeedback, SentimentLabel};
