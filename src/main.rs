//! CLI for workforce dataset generation and feedback sentiment scoring
//!
//! Usage:
//! ```bash
//! cargo run -- generate
//! cargo run -- score
//! cargo run -- score --input Feedback_Data.csv --no-chart
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_workforce_analytics::config::GeneratorConfig;
use rust_workforce_analytics::generator::WorkforceGenerator;
use rust_workforce_analytics::scorer::chart::{ChartRenderer, NoopChart, TermBarChart};
use rust_workforce_analytics::scorer::ScoringPipeline;
use rust_workforce_analytics::sentiment::{SentimentAnalyzer, WorkplaceLexicon};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "workforce_analytics")]
#[command(version = "0.1.0")]
#[command(about = "Synthetic workforce data generation and feedback sentiment scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic workforce tables
    Generate {
        /// Output directory for the CSV files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Random seed override
        #[arg(short, long)]
        seed: Option<u64>,

        /// Employee count override
        #[arg(short, long)]
        employees: Option<usize>,

        /// Path to a JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Score a feedback file for sentiment
    Score {
        /// Input feedback CSV
        #[arg(short, long, default_value = "Feedback_Data.csv")]
        input: PathBuf,

        /// Output directory for the scored file and summary
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Skip the terminal bar chart
        #[arg(long)]
        no_chart: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            output_dir,
            seed,
            employees,
            config,
        } => run_generate(output_dir, seed, employees, config),
        Commands::Score {
            input,
            output_dir,
            no_chart,
        } => run_score(input, output_dir, no_chart),
    }
}

fn run_generate(
    output_dir: PathBuf,
    seed: Option<u64>,
    employees: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_json(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(count) = employees {
        config.num_employees = count;
    }
    config.validate()?;

    info!(
        "Generating dataset: {} employees, {} to {}, seed {}",
        config.num_employees, config.start_date, config.end_date, config.seed
    );

    let mut generator = WorkforceGenerator::new(config);
    let dataset = generator.generate();
    let files = dataset.write_csv(&output_dir)?;

    println!("✅ Synthetic datasets generated successfully!");
    println!("Files created:");
    for file in &files {
        println!("  - {}", file.display());
    }

    Ok(())
}

fn run_score(input: PathBuf, output_dir: PathBuf, no_chart: bool) -> Result<()> {
    let lexicon = WorkplaceLexicon::new();
    let stats = lexicon.stats();
    info!(
        "Lexicon loaded: {} positive, {} negative, {} modifiers, {} negations",
        stats.positive_count, stats.negative_count, stats.modifier_count, stats.negation_count
    );

    let analyzer = SentimentAnalyzer::new().with_lexicon(lexicon);
    let chart: Box<dyn ChartRenderer> = if no_chart {
        Box::new(NoopChart)
    } else {
        Box::new(TermBarChart::default())
    };

    let pipeline = ScoringPipeline::new(&analyzer, chart.as_ref());
    let report = pipeline.run(&input, &output_dir)?;

    println!("✅ Scored {} feedback records", report.scored);
    println!("Files created:");
    for file in &report.files {
        println!("  - {}", file.display());
    }

    Ok(())
}
