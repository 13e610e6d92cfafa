/// Core repurposing pipeline implementation
///
/// This file contains the implementation of the RepurposingPipeline, which
/// derives repurposing candidates from a drug dataset by following shared
/// protein targets out of a source disease.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::core::records::{normalize_disease, title_case, DrugRecord, RepurposingCandidate};

/// Options controlling how candidates are rendered
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Title-case disease names in emitted candidates
    pub title_case_output: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            title_case_output: true,
        }
    }
}

/// Pairing outcome for a single protein target
#[derive(Debug, Clone)]
pub struct TargetPairing {
    /// The shared protein target
    pub target: String,

    /// First source-disease drug known to act on this target. None means no
    /// source record backs the target and the pairing was skipped.
    pub original_drug: Option<String>,

    /// Candidates emitted for this target, in dataset order. Empty means no
    /// additional disease was found for the target.
    pub candidates: Vec<RepurposingCandidate>,
}

/// Full result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Normalized source disease the run was seeded with
    pub source_disease: String,

    /// Distinct protein targets of the source disease, in first-seen order
    pub target_set: Vec<String>,

    /// Pairing outcome per target, in target-set order
    pub pairings: Vec<TargetPairing>,
}

impl PipelineReport {
    /// All emitted candidates, flattened in emission order
    pub fn all_candidates(&self) -> Vec<RepurposingCandidate> {
        self.pairings
            .iter()
            .flat_map(|pairing| pairing.candidates.iter().cloned())
            .collect()
    }

    /// Number of emitted candidates
    pub fn candidate_count(&self) -> usize {
        self.pairings.iter().map(|p| p.candidates.len()).sum()
    }

    /// True when the run produced no candidates at all
    pub fn is_empty(&self) -> bool {
        self.candidate_count() == 0
    }
}

/// Core pipeline structure
///
/// Holds the normalized dataset for one run. The dataset is normalized once
/// on construction and never mutated afterwards; every derivation below is a
/// single synchronous pass over it.
pub struct RepurposingPipeline {
    /// Normalized dataset rows, in input order
    records: Vec<DrugRecord>,

    /// Normalized source disease
    source_disease: String,

    /// Rendering options
    options: PipelineOptions,
}

impl RepurposingPipeline {
    /// Create a new pipeline over a dataset
    ///
    /// # Arguments
    ///
    /// * `records` - Dataset rows as loaded; normalized here
    /// * `source_disease` - Disease whose drugs seed the search
    /// * `options` - Rendering options for emitted candidates
    pub fn new(records: Vec<DrugRecord>, source_disease: &str, options: PipelineOptions) -> Self {
        let records: Vec<DrugRecord> = records.into_iter().map(DrugRecord::normalized).collect();
        debug!("normalized {} dataset records", records.len());

        Self {
            records,
            source_disease: normalize_disease(source_disease),
            options,
        }
    }

    /// The normalized source disease
    pub fn source_disease(&self) -> &str {
        &self.source_disease
    }

    /// Distinct protein targets of the source disease's records
    ///
    /// Order is first-seen dataset order, which keeps the report and the
    /// export reproducible across runs on the same input.
    pub fn target_set(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut targets = Vec::new();

        for record in &self.records {
            if record.treats_disease == self.source_disease
                && seen.insert(record.protein_target.as_str())
            {
                targets.push(record.protein_target.clone());
            }
        }

        targets
    }

    /// Records sharing a protein target with the source disease
    pub fn lead_set<'a>(&'a self, target_set: &[String]) -> Vec<&'a DrugRecord> {
        let targets: HashSet<&str> = target_set.iter().map(String::as_str).collect();

        self.records
            .iter()
            .filter(|record| targets.contains(record.protein_target.as_str()))
            .collect()
    }

    /// Lead set minus the source disease itself, exact duplicates removed
    ///
    /// Duplicate means identical on all three normalized fields; the first
    /// occurrence wins so input order is preserved.
    pub fn candidate_set<'a>(&'a self, target_set: &[String]) -> Vec<&'a DrugRecord> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for record in self.lead_set(target_set) {
            if record.treats_disease == self.source_disease {
                continue;
            }

            let key = (
                record.drug_name.as_str(),
                record.treats_disease.as_str(),
                record.protein_target.as_str(),
            );
            if seen.insert(key) {
                candidates.push(record);
            }
        }

        candidates
    }

    /// Run the full pipeline and produce a report
    ///
    /// Targets are paired in target-set order; candidates within a target
    /// keep dataset order.
    pub fn run(&self) -> PipelineReport {
        let target_set = self.target_set();
        info!(
            "found {} protein target(s) for '{}'",
            target_set.len(),
            self.source_disease
        );

        let candidate_records = self.candidate_set(&target_set);
        debug!(
            "{} candidate record(s) after exclusion and deduplication",
            candidate_records.len()
        );

        let pairings: Vec<TargetPairing> = target_set
            .iter()
            .map(|target| self.pair_target(target, &candidate_records))
            .collect();

        PipelineReport {
            source_disease: self.source_disease.clone(),
            target_set,
            pairings,
        }
    }

    /// Pair one protein target with its candidate records
    fn pair_target(&self, target: &str, candidate_records: &[&DrugRecord]) -> TargetPairing {
        // First source-disease record for this target supplies the drug name.
        let original_drug = self
            .records
            .iter()
            .find(|record| {
                record.treats_disease == self.source_disease && record.protein_target == target
            })
            .map(|record| record.drug_name.clone());

        let drug = match &original_drug {
            Some(drug) => drug.clone(),
            None => {
                // Unreachable through run() since the target set is derived
                // from source-disease records, but handled all the same.
                warn!("no source record backs protein target '{}', skipping", target);
                return TargetPairing {
                    target: target.to_string(),
                    original_drug: None,
                    candidates: Vec::new(),
                };
            }
        };

        let candidates: Vec<RepurposingCandidate> = candidate_records
            .iter()
            .filter(|record| record.protein_target == target)
            .map(|record| RepurposingCandidate {
                original_drug: drug.clone(),
                protein_target: target.to_string(),
                potential_new_disease: if self.options.title_case_output {
                    title_case(&record.treats_disease)
                } else {
                    record.treats_disease.clone()
                },
            })
            .collect();

        if candidates.is_empty() {
            debug!("no additional disease found for target '{}'", target);
        }

        TargetPairing {
            target: target.to_string(),
            original_drug,
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(drug: &str, disease: &str, target: &str) -> DrugRecord {
        DrugRecord {
            drug_name: drug.to_string(),
            treats_disease: disease.to_string(),
            protein_target: target.to_string(),
        }
    }

    #[test]
    fn test_shared_target_emits_candidate() {
        let records = vec![
            record("DrugA", "Hypertension", "ProtX"),
            record("DrugB", "Diabetes", "ProtX"),
            record("DrugC", "Migraine", "ProtY"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        let report = pipeline.run();

        assert_eq!(report.target_set, vec!["ProtX".to_string()]);

        let candidates = report.all_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].original_drug, "DrugA");
        assert_eq!(candidates[0].protein_target, "ProtX");
        assert_eq!(candidates[0].potential_new_disease, "Diabetes");

        // ProtY is not in the target set and must never appear.
        assert!(candidates.iter().all(|c| c.protein_target != "ProtY"));
    }

    #[test]
    fn test_target_set_first_seen_order() {
        let records = vec![
            record("DrugA", "hypertension", "ACE"),
            record("DrugB", "hypertension", "AGTR1"),
            record("DrugC", "hypertension", "ACE"),
            record("DrugD", "hypertension", "ADRB1"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "hypertension", PipelineOptions::default());
        assert_eq!(pipeline.target_set(), vec!["ACE", "AGTR1", "ADRB1"]);
    }

    #[test]
    fn test_source_disease_case_and_whitespace_tolerance() {
        let records = vec![
            record("DrugA", " Hypertension ", "ACE"),
            record("DrugB", "hypertension", "AGTR1"),
            record("DrugC", "HYPERTENSION", "ADRB1"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        assert_eq!(pipeline.target_set().len(), 3);
    }

    #[test]
    fn test_duplicate_rows_emit_one_candidate() {
        let records = vec![
            record("DrugA", "Hypertension", "ProtX"),
            record("DrugB", "Heart Failure", "ProtX"),
            record("DrugB", "Heart Failure", "ProtX"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        assert_eq!(pipeline.run().candidate_count(), 1);
    }

    #[test]
    fn test_no_shared_targets_yields_empty_report() {
        let records = vec![
            record("DrugA", "Hypertension", "ProtX"),
            record("DrugB", "Diabetes", "ProtZ"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        let report = pipeline.run();

        assert!(report.is_empty());
        assert_eq!(report.target_set, vec!["ProtX".to_string()]);
        assert_eq!(report.pairings.len(), 1);
        assert!(report.pairings[0].candidates.is_empty());
        assert_eq!(report.pairings[0].original_drug.as_deref(), Some("DrugA"));
    }

    #[test]
    fn test_candidates_never_name_source_disease() {
        let records = vec![
            record("DrugA", "Hypertension", "ProtX"),
            record("DrugB", " HYPERTENSION ", "ProtX"),
            record("DrugC", "Diabetes", "ProtX"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "hypertension", PipelineOptions::default());
        let report = pipeline.run();

        for candidate in report.all_candidates() {
            assert_ne!(
                normalize_disease(&candidate.potential_new_disease),
                report.source_disease
            );
        }
        assert_eq!(report.candidate_count(), 1);
    }

    #[test]
    fn test_target_membership_invariant() {
        let records = vec![
            record("DrugA", "Hypertension", "ACE"),
            record("DrugB", "Heart Failure", "ACE"),
            record("DrugC", "Migraine", "HTR1B"),
            record("DrugD", "Angina", "ADRB1"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        let report = pipeline.run();

        for candidate in report.all_candidates() {
            assert!(report.target_set.contains(&candidate.protein_target));
        }
    }

    #[test]
    fn test_title_case_toggle() {
        let records = vec![
            record("DrugA", "Hypertension", "ProtX"),
            record("DrugB", "heart failure", "ProtX"),
        ];

        let titled = RepurposingPipeline::new(
            records.clone(),
            "Hypertension",
            PipelineOptions {
                title_case_output: true,
            },
        )
        .run();
        assert_eq!(
            titled.all_candidates()[0].potential_new_disease,
            "Heart Failure"
        );

        let plain = RepurposingPipeline::new(
            records,
            "Hypertension",
            PipelineOptions {
                title_case_output: false,
            },
        )
        .run();
        assert_eq!(
            plain.all_candidates()[0].potential_new_disease,
            "heart failure"
        );
    }

    #[test]
    fn test_original_drug_is_first_source_record() {
        let records = vec![
            record("DrugA", "Hypertension", "ACE"),
            record("DrugB", "Hypertension", "ACE"),
            record("DrugC", "Heart Failure", "ACE"),
        ];

        let pipeline =
            RepurposingPipeline::new(records, "Hypertension", PipelineOptions::default());
        let candidates = pipeline.run().all_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].original_drug, "DrugA");
    }
}
