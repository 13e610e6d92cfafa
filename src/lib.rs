/// Drug Repurposer - a drug repurposing candidate finder
///
/// This library cross-references a tabular dataset of drugs, the diseases
/// they treat, and the protein targets they act on, and suggests drugs
/// approved for one disease that share a protein target with drugs for
/// another disease.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main pipeline types for convenience
pub use crate::core::pipeline::{PipelineOptions, PipelineReport, RepurposingPipeline};
pub use crate::core::records::{DrugRecord, RepurposingCandidate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Derive repurposing candidates for one source disease
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `dataset_path` - Path to the drug dataset CSV
/// * `source_disease` - Disease whose approved drugs seed the search
///
/// # Returns
///
/// The emitted candidates in emission order
pub fn find_candidates<P: AsRef<std::path::Path>>(
    dataset_path: P,
    source_disease: &str,
) -> anyhow::Result<Vec<RepurposingCandidate>> {
    let records = crate::utils::dataset::load_records(dataset_path.as_ref())?;
    let pipeline = RepurposingPipeline::new(records, source_disease, PipelineOptions::default());

    Ok(pipeline.run().all_candidates())
}

/// Library configuration and utilities
pub mod config {
    use serde_json::Value;

    /// Create default configuration
    pub fn default_config() -> Value {
        serde_json::json!({
            "emoji": true,
            "title_case": true,
            "export": true,
            "log_level": "info",
            "log_file": "drug_repurposer.log"
        })
    }
}

/// Command-line application functionality
pub mod app {
    use crate::core::pipeline::{PipelineOptions, PipelineReport, RepurposingPipeline};
    use crate::utils::dataset::load_records;
    use std::path::Path;

    /// Run the pipeline for several source diseases against one dataset
    ///
    /// The dataset is loaded once and re-run per disease.
    ///
    /// # Arguments
    ///
    /// * `dataset_path` - Path to the drug dataset CSV
    /// * `diseases` - Source diseases to seed with
    /// * `options` - Rendering options shared by all runs
    ///
    /// # Returns
    ///
    /// One report per source disease, in input order
    pub fn run_for_diseases<P: AsRef<Path>>(
        dataset_path: P,
        diseases: &[String],
        options: &PipelineOptions,
    ) -> anyhow::Result<Vec<(String, PipelineReport)>> {
        let records = load_records(dataset_path.as_ref())?;
        let mut reports = Vec::new();

        for disease in diseases {
            let pipeline = RepurposingPipeline::new(records.clone(), disease, options.clone());
            reports.push((disease.clone(), pipeline.run()));
        }

        Ok(reports)
    }
}
