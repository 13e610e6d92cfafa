/// Drug Repurposer - a drug repurposing candidate finder
/// This tool cross-references drugs, diseases and protein targets to suggest
/// repurposing candidates
///
/// The main entry point for the drug repurposer application. It parses
/// command-line arguments and coordinates the pipeline run.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

// Import modules
mod core;
mod utils;

use crate::core::pipeline::{PipelineOptions, RepurposingPipeline};
use crate::utils::dataset::{self, DatasetNotFound};
use crate::utils::output_formatter::{self, DisplayOptions};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "drug_repurposer",
    author = "Drug Repurposer Team",
    version = "0.1.0",
    about = "A drug repurposing candidate finder based on shared protein targets",
    long_about = "This tool cross-references a drug dataset to suggest repurposing candidates:
- Collects the protein targets of the drugs approved for a source disease
- Finds every record sharing one of those targets
- Drops the source disease itself and deduplicates
- Reports one candidate per (original drug, target, new disease) pairing"
)]
struct Args {
    /// Path to the drug dataset CSV
    #[arg(name = "dataset", default_value = "drugs.csv")]
    dataset: PathBuf,

    /// Disease whose approved drugs seed the search
    #[arg(long = "disease", default_value = "hypertension")]
    disease: String,

    /// Path for the exported results CSV
    #[arg(long = "output", default_value = "repurposing_results.csv")]
    output: PathBuf,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Skip writing the results CSV
    #[arg(long = "no-export", action = ArgAction::SetTrue)]
    no_export: bool,

    /// Plain console output without emoji markers
    #[arg(long = "plain", action = ArgAction::SetTrue)]
    plain: bool,

    /// Keep disease names lower-cased instead of title-casing them
    #[arg(long = "no-title-case", action = ArgAction::SetTrue)]
    no_title_case: bool,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<String>,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: drug_repurposer.log)
    #[arg(long = "log-file", default_value = "drug_repurposer.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    // Load configuration
    let config = load_config(&args.config)?;

    // Resolve output toggles; CLI flags win over config values
    let emoji = !args.plain && config_bool(&config, "emoji", true);
    let title_case = !args.no_title_case && config_bool(&config, "title_case", true);
    let export = !args.no_export && config_bool(&config, "export", true);

    // Load the dataset
    let records = match load_dataset(&args) {
        Ok(records) => records,
        Err(e) => {
            if e.downcast_ref::<DatasetNotFound>().is_some() {
                let glyph = if emoji { "\u{274c} " } else { "" };
                eprintln!(
                    "{}{} '{}' not found. Make sure it's in the working directory.",
                    glyph,
                    "Error:".red().bold(),
                    args.dataset.display()
                );
                process::exit(1);
            }
            return Err(e);
        }
    };

    // Run the pipeline
    let pipeline = RepurposingPipeline::new(
        records,
        &args.disease,
        PipelineOptions {
            title_case_output: title_case,
        },
    );
    let report = pipeline.run();
    let candidates = report.all_candidates();

    // Print the report to console if not in quiet mode
    if !args.quiet {
        let display = DisplayOptions { emoji, title_case };
        println!("\n{}", output_formatter::format_report(&report, &display));
    }

    // Export results if any were produced
    if export {
        if output_formatter::create_csv_report(&candidates, &args.output)? {
            let glyph = if emoji { "\u{2705} " } else { "" };
            if !args.quiet {
                println!(
                    "{}Results exported to '{}'",
                    glyph,
                    args.output.display().to_string().green()
                );
            }
            info!("exported {} candidate(s) to {}", candidates.len(), args.output.display());
        }
    }

    if let Some(json_path) = &args.json {
        if output_formatter::export_results_json(&candidates, json_path)? {
            info!("exported {} candidate(s) to {}", candidates.len(), json_path.display());
        }
    }

    // Print summary
    if !args.quiet {
        let elapsed_time = start_time.elapsed();
        println!("\n{}", "Run Complete".bold());
        println!("{} {}", "Targets examined:".green(), report.target_set.len());
        println!("{} {}", "Candidates found:".green(), candidates.len());
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            elapsed_time.as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging with file output
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}

/// Load configuration from file if provided
fn load_config(config_path: &Option<String>) -> Result<serde_json::Value> {
    let config = match config_path {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                error!("Configuration file not found: {}", path.display());
                drug_repurposer::config::default_config()
            } else {
                let config_str = std::fs::read_to_string(path)?;
                match serde_json::from_str(&config_str) {
                    Ok(config) => {
                        info!("Loaded configuration from {}", path.display());
                        config
                    }
                    Err(e) => {
                        error!("Invalid JSON in configuration file: {}", e);
                        drug_repurposer::config::default_config()
                    }
                }
            }
        }
        None => drug_repurposer::config::default_config(),
    };

    Ok(config)
}

/// Read a boolean toggle from the configuration
fn config_bool(config: &serde_json::Value, key: &str, default: bool) -> bool {
    config
        .get(key)
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(default)
}

/// Load the dataset with a spinner while reading
fn load_dataset(args: &Args) -> Result<Vec<crate::core::records::DrugRecord>> {
    let spinner = if !args.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Loading dataset {}", args.dataset.display()));
        Some(pb)
    } else {
        None
    };

    let result = dataset::load_records(&args.dataset);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}
