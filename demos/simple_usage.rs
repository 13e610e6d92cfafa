/// Simple example demonstrating how to use the Drug Repurposer library

use anyhow::Result;
use drug_repurposer::find_candidates;

fn main() -> Result<()> {
    // Path to a small sample dataset
    let dataset_path = "demos/sample_drugs.csv";

    // Create sample dataset
    std::fs::write(
        dataset_path,
        "DrugName,TreatsDisease,ProteinTarget\n\
         Lisinopril,Hypertension,ACE\n\
         Omapatrilat,Heart Failure,ACE\n\
         Losartan,Hypertension,AGTR1\n\
         Metformin,Type 2 Diabetes,AMPK\n",
    )?;

    println!("Searching {} for repurposing candidates", dataset_path);

    // Derive candidates seeded by hypertension's drugs
    let candidates = find_candidates(dataset_path, "hypertension")?;

    // Display results
    for candidate in candidates {
        println!(
            "  - '{}' may also treat '{}' (shared target: {})",
            candidate.original_drug, candidate.potential_new_disease, candidate.protein_target
        );
    }

    Ok(())
}
