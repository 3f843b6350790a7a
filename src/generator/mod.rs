//! Synthetic dataset generator
//!
//! Builds the employee roster, daily performance records and monthly
//! feedback records from a seeded random source. Draw order is fixed so
//! the same seed and configuration always reproduce identical tables:
//! per employee - department, role, first name, last name, location,
//! tenure; per employee x weekday - base efficiency, noise, hours,
//! throughput; per employee x month-end - category, text.

pub mod calendar;
pub mod names;

use crate::config::GeneratorConfig;
use crate::data::store;
use crate::data::types::{Employee, FeedbackRecord, PerformanceRecord};
use anyhow::Result;
use chrono::Datelike;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use self::names::NameGenerator;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Tenure bounds in years
const TENURE_RANGE: (f64, f64) = (0.5, 12.0);
/// Daily working hours bounds
const HOURS_RANGE: (f64, f64) = (7.0, 9.0);
/// Tasks-per-hour throughput factor bounds
const THROUGHPUT_RANGE: (f64, f64) = (2.5, 4.0);
/// Hard efficiency bounds after scaling and noise
const EFFICIENCY_BOUNDS: (f64, f64) = (0.2, 0.9);
/// Standard deviation of the additive efficiency noise
const EFFICIENCY_NOISE_STD: f64 = 0.05;
/// Amplitude of the seasonal efficiency multiplier
const SEASONAL_AMPLITUDE: f64 = 0.1;
/// Day-of-year divisor of the seasonal sinusoid
const SEASONAL_PERIOD_DAYS: f64 = 90.0;

/// The three generated tables of one run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkforceDataset {
    pub employees: Vec<Employee>,
    pub performance: Vec<PerformanceRecord>,
    pub feedback: Vec<FeedbackRecord>,
}

impl WorkforceDataset {
    /// Write all three tables as CSV files into `dir`, returning the paths
    pub fn write_csv(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let employee_path = dir.join(store::EMPLOYEE_FILE);
        let performance_path = dir.join(store::PERFORMANCE_FILE);
        let feedback_path = dir.join(store::FEEDBACK_FILE);

        store::write_employees(&self.employees, &employee_path)?;
        store::write_performance(&self.performance, &performance_path)?;
        store::write_feedback(&self.feedback, &feedback_path)?;

        Ok(vec![employee_path, performance_path, feedback_path])
    }
}

/// Seeded generator for the synthetic workforce tables
pub struct WorkforceGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    names: NameGenerator,
    noise: Normal<f64>,
}

impl WorkforceGenerator {
    /// Create a generator; the random source is seeded from the config
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            names: NameGenerator::new(),
            noise: Normal::new(0.0, EFFICIENCY_NOISE_STD).unwrap(),
        }
    }

    /// Generate all three tables in order
    pub fn generate(&mut self) -> WorkforceDataset {
        let employees = self.generate_employees();
        info!("Generated {} employees", employees.len());

        let performance = self.generate_performance(&employees);
        info!("Generated {} performance records", performance.len());

        let feedback = self.generate_feedback(&employees);
        info!("Generated {} feedback records", feedback.len());

        WorkforceDataset {
            employees,
            performance,
            feedback,
        }
    }

    /// Generate the employee roster
    pub fn generate_employees(&mut self) -> Vec<Employee> {
        let mut employees = Vec::with_capacity(self.config.num_employees);

        for i in 0..self.config.num_employees {
            let dept_idx = self.rng.gen_range(0..self.config.departments.len());
            let dept = &self.config.departments[dept_idx];
            let department = dept.name.clone();
            let role = dept.roles[self.rng.gen_range(0..dept.roles.len())].clone();

            let name = self.names.full_name(&mut self.rng);
            let location =
                self.config.locations[self.rng.gen_range(0..self.config.locations.len())].clone();
            let tenure = self.rng.gen_range(TENURE_RANGE.0..TENURE_RANGE.1);

            employees.push(Employee {
                id: format!("E{:03}", i + 1),
                name,
                department,
                role,
                location,
                tenure_years: (tenure * 10.0).round() / 10.0,
            });
        }

        employees
    }

    /// Generate one performance record per employee per weekday in range
    pub fn generate_performance(&mut self, employees: &[Employee]) -> Vec<PerformanceRecord> {
        let weekdays = calendar::weekdays_between(self.config.start_date, self.config.end_date);
        let mut records = Vec::with_capacity(employees.len() * weekdays.len());

        for emp in employees {
            let (eff_min, eff_max) = match self.config.department(&emp.department) {
                Some(profile) => profile.efficiency_range,
                None => {
                    warn!(
                        "Employee {} references unknown department {}",
                        emp.id, emp.department
                    );
                    continue;
                }
            };

            for day in &weekdays {
                let seasonal =
                    1.0 + (day.ordinal() as f64 / SEASONAL_PERIOD_DAYS).sin() * SEASONAL_AMPLITUDE;
                let base = self.rng.gen_range(eff_min..eff_max) * seasonal;
                let efficiency = (base + self.noise.sample(&mut self.rng))
                    .clamp(EFFICIENCY_BOUNDS.0, EFFICIENCY_BOUNDS.1);

                let hours = self.rng.gen_range(HOURS_RANGE.0..HOURS_RANGE.1);
                let throughput = self.rng.gen_range(THROUGHPUT_RANGE.0..THROUGHPUT_RANGE.1);
                let tasks = (hours * throughput * efficiency) as u32;

                records.push(PerformanceRecord {
                    employee_id: emp.id.clone(),
                    date: *day,
                    tasks_completed: tasks,
                    hours_worked: hours,
                    efficiency,
                });
            }
        }

        records
    }

    /// Generate one feedback record per employee per month-end in range
    pub fn generate_feedback(&mut self, employees: &[Employee]) -> Vec<FeedbackRecord> {
        let month_ends =
            calendar::month_ends_between(self.config.start_date, self.config.end_date);
        let category_dist = WeightedIndex::new(&self.config.feedback.weights).unwrap();
        let mut records = Vec::with_capacity(employees.len() * month_ends.len());

        for emp in employees {
            for month_end in &month_ends {
                let pool = match category_dist.sample(&mut self.rng) {
                    0 => &self.config.feedback.positive,
                    1 => &self.config.feedback.neutral,
                    _ => &self.config.feedback.negative,
                };
                let text = pool[self.rng.gen_range(0..pool.len())].clone();

                records.push(FeedbackRecord {
                    employee_id: emp.id.clone(),
                    date: *month_end,
                    text,
                });
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            num_employees: 12,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            seed: 42,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_roles_belong_to_departments() {
        let config = small_config();
        let mut generator = WorkforceGenerator::new(config.clone());
        let employees = generator.generate_employees();

        assert_eq!(employees.len(), 12);
        for emp in &employees {
            let dept = config.department(&emp.department).unwrap();
            assert!(
                dept.roles.contains(&emp.role),
                "role {} not in department {}",
                emp.role,
                emp.department
            );
            assert!(config.locations.contains(&emp.location));
        }
    }

    #[test]
    fn test_employee_ids_and_tenure() {
        let mut generator = WorkforceGenerator::new(small_config());
        let employees = generator.generate_employees();

        assert_eq!(employees[0].id, "E001");
        assert_eq!(employees[11].id, "E012");
        for emp in &employees {
            assert!(emp.tenure_years >= 0.5 && emp.tenure_years <= 12.0);
            // Rounded to one decimal
            assert!((emp.tenure_years * 10.0 - (emp.tenure_years * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_performance_bounds_and_coverage() {
        let config = small_config();
        let mut generator = WorkforceGenerator::new(config.clone());
        let employees = generator.generate_employees();
        let records = generator.generate_performance(&employees);

        let weekdays = calendar::weekdays_between(config.start_date, config.end_date);
        assert_eq!(records.len(), employees.len() * weekdays.len());

        for rec in &records {
            assert!(calendar::is_weekday(rec.date));
            assert!(rec.date >= config.start_date && rec.date <= config.end_date);
            assert!(rec.efficiency >= 0.2 && rec.efficiency <= 0.9);
            assert!(rec.hours_worked >= 7.0 && rec.hours_worked <= 9.0);
        }

        for emp in &employees {
            let count = records.iter().filter(|r| r.employee_id == emp.id).count();
            assert_eq!(count, weekdays.len());
        }
    }

    #[test]
    fn test_feedback_once_per_employee_per_month_end() {
        let config = small_config();
        let mut generator = WorkforceGenerator::new(config.clone());
        let employees = generator.generate_employees();
        let records = generator.generate_feedback(&employees);

        let month_ends = calendar::month_ends_between(config.start_date, config.end_date);
        assert_eq!(records.len(), employees.len() * month_ends.len());

        for emp in &employees {
            for month_end in &month_ends {
                let count = records
                    .iter()
                    .filter(|r| r.employee_id == emp.id && r.date == *month_end)
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn test_feedback_texts_come_from_pools() {
        let config = small_config();
        let mut generator = WorkforceGenerator::new(config.clone());
        let employees = generator.generate_employees();
        let records = generator.generate_feedback(&employees);

        let pools = &config.feedback;
        for rec in &records {
            let known = pools.positive.contains(&rec.text)
                || pools.neutral.contains(&rec.text)
                || pools.negative.contains(&rec.text);
            assert!(known, "unexpected feedback text: {}", rec.text);
        }
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let dataset_a = WorkforceGenerator::new(small_config()).generate();
        let dataset_b = WorkforceGenerator::new(small_config()).generate();

        assert_eq!(dataset_a, dataset_b);
    }

    #[test]
    fn test_different_seed_changes_dataset() {
        let mut config = small_config();
        config.seed = 7;

        let dataset_a = WorkforceGenerator::new(small_config()).generate();
        let dataset_b = WorkforceGenerator::new(config).generate();

        assert_ne!(dataset_a, dataset_b);
    }
}
