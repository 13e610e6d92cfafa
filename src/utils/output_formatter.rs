/// Output formatter for repurposing results
///
/// This module handles rendering a pipeline report for the console and
/// exporting the emitted candidates to CSV and JSON files.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::pipeline::PipelineReport;
use crate::core::records::{title_case, RepurposingCandidate};

/// Toggles for console rendering
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Prefix report lines with emoji markers
    pub emoji: bool,

    /// Title-case the source disease when naming it
    pub title_case: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            emoji: true,
            title_case: true,
        }
    }
}

/// Pick the emoji marker or nothing
fn marker<'a>(options: &DisplayOptions, glyph: &'a str) -> &'a str {
    if options.emoji {
        glyph
    } else {
        ""
    }
}

/// Format a pipeline report for console output
///
/// # Arguments
///
/// * `report` - Result of one pipeline run
/// * `options` - Rendering toggles
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &PipelineReport, options: &DisplayOptions) -> String {
    let mut output = String::new();

    let display_disease = if options.title_case {
        title_case(&report.source_disease)
    } else {
        report.source_disease.clone()
    };

    output.push_str(&format!(
        "{}{} {}\n",
        marker(options, "\u{1f50d} "),
        "Starting with drugs for:".bold(),
        display_disease.cyan()
    ));

    let targets: Vec<&str> = report.target_set.iter().map(String::as_str).collect();
    output.push_str(&format!(
        "{}Found protein targets for {}: {:?}\n",
        marker(options, "\u{1f9ec} "),
        display_disease,
        targets
    ));

    output.push_str(&format!(
        "\n{}{}\n",
        marker(options, "\u{1f4cb} "),
        "--- Potential Drug Repurposing Candidates ---".yellow().bold()
    ));

    if report.is_empty() {
        output.push_str(&format!(
            "{}No repurposing candidates found in this dataset.\n",
            marker(options, "\u{26a0}\u{fe0f} ")
        ));
        return output;
    }

    for pairing in &report.pairings {
        output.push_str(&format!(
            "\n{}Based on shared target: {}\n",
            marker(options, "\u{1f517} "),
            pairing.target.cyan().bold()
        ));

        if pairing.original_drug.is_none() {
            continue;
        }

        if pairing.candidates.is_empty() {
            output.push_str(&format!(
                "{}No additional disease found for this target.\n",
                marker(options, "\u{26a0}\u{fe0f} ")
            ));
            continue;
        }

        for candidate in &pairing.candidates {
            output.push_str(&format!(
                "{}'{}' (for {}) may also treat '{}'\n",
                marker(options, "\u{1f48a} "),
                candidate.original_drug.green(),
                display_disease,
                candidate.potential_new_disease.green().bold()
            ));
        }
    }

    output
}

/// Create a CSV report from the emitted candidates
///
/// Writes the header row plus one row per candidate in emission order. With
/// zero candidates, no file is produced.
///
/// # Arguments
///
/// * `candidates` - Candidates in emission order
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// True when a file was written
pub fn create_csv_report(
    candidates: &[RepurposingCandidate],
    output_path: &Path,
) -> Result<bool> {
    if candidates.is_empty() {
        return Ok(false);
    }

    let file = File::create(output_path).context(format!(
        "Failed to create CSV output file: {}",
        output_path.display()
    ))?;

    let mut writer = csv::Writer::from_writer(file);

    for candidate in candidates {
        writer
            .serialize(candidate)
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(true)
}

/// Export the emitted candidates to a JSON file
///
/// Same skip-on-empty contract as the CSV report.
pub fn export_results_json(
    candidates: &[RepurposingCandidate],
    output_path: &Path,
) -> Result<bool> {
    if candidates.is_empty() {
        return Ok(false);
    }

    let file = File::create(output_path).context(format!(
        "Failed to create JSON output file: {}",
        output_path.display()
    ))?;

    serde_json::to_writer_pretty(file, candidates).context("Failed to write JSON data")?;

    Ok(true)
}
