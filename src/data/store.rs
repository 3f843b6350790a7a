//! CSV persistence for the workforce tables
//!
//! Writers emit a header row and fixed decimal formatting so a given
//! dataset always serializes to identical bytes. The feedback reader
//! skips malformed rows with a warning instead of aborting.

use super::types::{Employee, FeedbackRecord, PerformanceRecord, ScoredFeedback, SentimentLabel};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// Employee roster output file
pub const EMPLOYEE_FILE: &str = "Employee_Master.csv";
/// Daily performance output file
pub const PERFORMANCE_FILE: &str = "Performance_Data.csv";
/// Monthly feedback output file
pub const FEEDBACK_FILE: &str = "Feedback_Data.csv";
/// Scored feedback output file
pub const SCORED_FILE: &str = "Feedback_Data_Scored.csv";
/// Sentiment summary output file
pub const SUMMARY_FILE: &str = "Sentiment_Summary.csv";

/// Save the employee roster
pub fn write_employees(employees: &[Employee], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "EmployeeID",
        "Name",
        "Department",
        "Role",
        "Location",
        "Tenure_Years",
    ])?;

    for emp in employees {
        writer.write_record([
            emp.id.clone(),
            emp.name.clone(),
            emp.department.clone(),
            emp.role.clone(),
            emp.location.clone(),
            format!("{:.1}", emp.tenure_years),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save daily performance records
pub fn write_performance(records: &[PerformanceRecord], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "EmployeeID",
        "Date",
        "TasksCompleted",
        "HoursWorked",
        "EfficiencyScore",
    ])?;

    for rec in records {
        writer.write_record([
            rec.employee_id.clone(),
            rec.date.to_string(),
            rec.tasks_completed.to_string(),
            format!("{:.2}", rec.hours_worked),
            format!("{:.3}", rec.efficiency),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save monthly feedback records
pub fn write_feedback(records: &[FeedbackRecord], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["EmployeeID", "Date", "FeedbackText"])?;

    for rec in records {
        writer.write_record([rec.employee_id.clone(), rec.date.to_string(), rec.text.clone()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Load feedback records from a CSV file
///
/// Malformed rows are skipped with a warning so they never reach the
/// scored output or the summary counts.
pub fn read_feedback(path: impl AsRef<Path>) -> Result<Vec<FeedbackRecord>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open feedback file: {:?}", path.as_ref()))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.deserialize::<FeedbackRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                warn!("Skipping malformed feedback row {}: {}", i + 2, err);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed feedback rows", skipped);
    }

    Ok(records)
}

/// Save scored feedback records
pub fn write_scored(records: &[ScoredFeedback], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "EmployeeID",
        "Date",
        "FeedbackText",
        "Sentiment_Score",
        "Sentiment_Score_Normalized",
        "Sentiment_Label",
    ])?;

    for rec in records {
        writer.write_record([
            rec.employee_id.clone(),
            rec.date.to_string(),
            rec.text.clone(),
            format!("{:.4}", rec.score),
            format!("{:.3}", rec.normalized),
            rec.label.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the label -> count summary
pub fn write_summary(summary: &[(SentimentLabel, usize)], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Sentiment_Label", "Count"])?;

    for (label, count) in summary {
        writer.write_record([label.to_string(), count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
