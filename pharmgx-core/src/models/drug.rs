use serde::{Deserialize, Serialize};

use crate::models::gene::Gene;

///
/// A supported drug and the gene whose guideline governs it.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrugEntry {
    /// Canonical (upper-case) drug key
    pub name: String,
    pub gene: Gene,
    /// The drug needs the gene product to become active
    #[serde(default)]
    pub prodrug: bool,
}

impl DrugEntry {
    pub fn new(name: &str, gene: Gene, prodrug: bool) -> Self {
        DrugEntry {
            name: canonical_drug_name(name),
            gene,
            prodrug,
        }
    }
}

///
/// Canonical lookup key for a drug name: trimmed and upper-cased.
///
pub fn canonical_drug_name(name: &str) -> String {
    name.trim().to_uppercase()
}
