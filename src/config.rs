//! Generator configuration
//!
//! Holds the fixed configuration the synthetic dataset generator runs from:
//! employee count, date range, department/role/location enumerations,
//! per-department efficiency ranges, feedback text pools and the random seed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of employees to generate
    pub num_employees: usize,
    /// First day of the reporting range (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the reporting range (inclusive)
    pub end_date: NaiveDate,
    /// Seed for the random source
    pub seed: u64,
    /// Departments with their role sets and efficiency ranges
    pub departments: Vec<DepartmentProfile>,
    /// Office locations
    pub locations: Vec<String>,
    /// Feedback text pools and category weights
    pub feedback: FeedbackPools,
}

/// Per-department configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentProfile {
    /// Department name
    pub name: String,
    /// Roles an employee of this department can hold
    pub roles: Vec<String>,
    /// Base efficiency range (min, max) before seasonal scaling and noise
    pub efficiency_range: (f64, f64),
}

/// Sentiment-skewed feedback text pools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPools {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
    /// Draw weights for (positive, neutral, negative)
    pub weights: [f64; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_employees: 200,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            seed: 42,
            departments: vec![
                DepartmentProfile {
                    name: "HR".to_string(),
                    roles: string_vec(&["HR Manager", "Recruiter", "HR Analyst"]),
                    efficiency_range: (0.25, 0.55),
                },
                DepartmentProfile {
                    name: "Finance".to_string(),
                    roles: string_vec(&["Accountant", "Financial Analyst", "Auditor"]),
                    efficiency_range: (0.35, 0.65),
                },
                DepartmentProfile {
                    name: "IT".to_string(),
                    roles: string_vec(&["Developer", "Data Analyst", "System Engineer"]),
                    efficiency_range: (0.45, 0.80),
                },
                DepartmentProfile {
                    name: "Marketing".to_string(),
                    roles: string_vec(&["Marketing Analyst", "SEO Specialist", "Brand Manager"]),
                    efficiency_range: (0.30, 0.60),
                },
                DepartmentProfile {
                    name: "Sales".to_string(),
                    roles: string_vec(&["Sales Executive", "Account Manager", "Sales Analyst"]),
                    efficiency_range: (0.40, 0.70),
                },
                DepartmentProfile {
                    name: "Operations".to_string(),
                    roles: string_vec(&["Operations Manager", "Logistics Coordinator", "Planner"]),
                    efficiency_range: (0.40, 0.75),
                },
            ],
            locations: string_vec(&["New York", "London", "Toronto", "Berlin", "Sydney"]),
            feedback: FeedbackPools {
                positive: string_vec(&[
                    "I feel motivated by the team and our goals.",
                    "The workload is manageable and leadership is supportive.",
                    "Great collaboration across departments.",
                    "I enjoy coming to work every day.",
                    "The manager gives constructive feedback regularly.",
                ]),
                neutral: string_vec(&[
                    "The work environment is fine, nothing special.",
                    "I feel neither satisfied nor dissatisfied.",
                    "My tasks are repetitive but manageable.",
                    "Work processes are okay but could be improved.",
                ]),
                negative: string_vec(&[
                    "Deadlines are unrealistic and stressful.",
                    "There is a lack of communication from management.",
                    "Workload feels overwhelming lately.",
                    "Limited opportunities for career growth.",
                    "The expectations are unclear for my role.",
                ]),
                weights: [0.5, 0.3, 0.2],
            },
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Look up a department profile by name
    pub fn department(&self, name: &str) -> Option<&DepartmentProfile> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_employees == 0 {
            anyhow::bail!("num_employees must be > 0");
        }
        if self.start_date > self.end_date {
            anyhow::bail!(
                "start_date {} is after end_date {}",
                self.start_date,
                self.end_date
            );
        }
        if self.departments.is_empty() {
            anyhow::bail!("at least one department is required");
        }
        for dept in &self.departments {
            if dept.roles.is_empty() {
                anyhow::bail!("department {} has no roles", dept.name);
            }
            let (min, max) = dept.efficiency_range;
            if !(0.0 < min && min <= max) {
                anyhow::bail!(
                    "department {} has invalid efficiency range ({}, {})",
                    dept.name,
                    min,
                    max
                );
            }
        }
        if self.locations.is_empty() {
            anyhow::bail!("at least one location is required");
        }
        let pools = &self.feedback;
        if pools.positive.is_empty() || pools.neutral.is_empty() || pools.negative.is_empty() {
            anyhow::bail!("every feedback pool needs at least one text");
        }
        if pools.weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            anyhow::bail!("feedback weights must be positive");
        }
        Ok(())
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
