/// Dataset loading
///
/// This module reads the drug dataset from a CSV file into typed records.
/// Rows are matched to fields by header name, so column order is free.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::core::records::DrugRecord;

/// Error when the input dataset file does not exist
#[derive(Debug, thiserror::Error)]
#[error("dataset not found: {path}")]
pub struct DatasetNotFound {
    /// Path that could not be opened
    pub path: String,
}

/// Load all records from a CSV dataset
///
/// The file must carry a header row with the columns `DrugName`,
/// `TreatsDisease` and `ProteinTarget`, in any order. Records are returned
/// as read; normalization happens in the pipeline.
///
/// # Arguments
///
/// * `path` - Path to the dataset file
///
/// # Returns
///
/// All dataset rows in file order, or `DatasetNotFound` when the file is
/// absent.
pub fn load_records(path: &Path) -> Result<Vec<DrugRecord>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            anyhow::Error::new(DatasetNotFound {
                path: path.display().to_string(),
            })
        } else {
            anyhow::Error::new(e).context(format!("Failed to open dataset: {}", path.display()))
        }
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let record: DrugRecord =
            row.context(format!("Failed to parse dataset row in {}", path.display()))?;
        records.push(record);
    }

    info!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("drugs.csv");
        std::fs::write(
            &path,
            "DrugName,TreatsDisease,ProteinTarget\n\
             Lisinopril,Hypertension,ACE\n\
             Metformin,Type 2 Diabetes,AMPK\n",
        )
        .expect("Failed to write dataset");

        let records = load_records(&path).expect("Failed to load dataset");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].drug_name, "Lisinopril");
        assert_eq!(records[1].protein_target, "AMPK");
    }

    #[test]
    fn test_load_records_column_order_is_free() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("drugs.csv");
        std::fs::write(
            &path,
            "ProteinTarget,DrugName,TreatsDisease\n\
             ACE,Lisinopril,Hypertension\n",
        )
        .expect("Failed to write dataset");

        let records = load_records(&path).expect("Failed to load dataset");
        assert_eq!(records[0].drug_name, "Lisinopril");
        assert_eq!(records[0].treats_disease, "Hypertension");
        assert_eq!(records[0].protein_target, "ACE");
    }

    #[test]
    fn test_missing_dataset_is_typed() {
        let err = load_records(Path::new("does_not_exist.csv"))
            .expect_err("missing file must not load");
        assert!(err.downcast_ref::<DatasetNotFound>().is_some());
    }
}
