/// Dataset records and string normalization
///
/// This module defines the typed rows of the drug dataset and the derived
/// repurposing candidates, together with the normalization helpers applied
/// before any comparison.

use serde::{Deserialize, Serialize};

/// One row of the source dataset
///
/// Fields are deserialized by header name, so the column order of the input
/// file does not matter. Duplicate rows are tolerated at this level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DrugRecord {
    /// Name of the drug
    #[serde(rename = "DrugName")]
    pub drug_name: String,

    /// Disease the drug is currently indicated for
    #[serde(rename = "TreatsDisease")]
    pub treats_disease: String,

    /// Protein target the drug acts upon
    #[serde(rename = "ProteinTarget")]
    pub protein_target: String,
}

impl DrugRecord {
    /// Return the record in its canonical matching form
    ///
    /// All three fields are trimmed; the disease is additionally lower-cased
    /// so that disease comparisons are case-insensitive. Protein targets keep
    /// their casing and are matched exactly.
    pub fn normalized(self) -> Self {
        Self {
            drug_name: self.drug_name.trim().to_string(),
            treats_disease: normalize_disease(&self.treats_disease),
            protein_target: self.protein_target.trim().to_string(),
        }
    }
}

/// A suggested repurposing of an existing drug
///
/// Serialized field names double as the export header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepurposingCandidate {
    /// Drug already approved for the source disease
    #[serde(rename = "Original Drug")]
    pub original_drug: String,

    /// Protein target shared between the two diseases
    #[serde(rename = "Protein Target")]
    pub protein_target: String,

    /// Disease the drug is not currently indicated for
    #[serde(rename = "Potential New Disease")]
    pub potential_new_disease: String,
}

/// Normalize a disease name for comparison (trim + lowercase)
pub fn normalize_disease(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title-case a name for display
///
/// The first character of each whitespace-separated word is upper-cased and
/// the rest lower-cased; digits and inner whitespace pass through unchanged.
pub fn title_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            output.push(c);
        } else if at_word_start {
            output.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            output.extend(c.to_lowercase());
        }
    }

    output
}
