use serde::Serialize;

use crate::consts::UNDETERMINED_DIPLOTYPE;
use crate::models::gene::Gene;
use crate::models::genotype::CallStatus;
use crate::models::marker::FunctionalClass;
use crate::models::phenotype::Phenotype;

///
/// What was observed at one catalog marker for the current sample.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerFinding {
    pub marker_id: String,
    pub allele: String,
    pub function: FunctionalClass,
    /// Normalized genotype string when the marker had a record
    pub genotype: Option<String>,
    /// Non-reference allele copies, 0 for no-calls and untyped markers
    pub variant_alleles: u8,
    pub status: CallStatus,
    /// Set when the genotype was present but invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MarkerFinding {
    pub fn is_uncalled(&self) -> bool {
        self.status != CallStatus::Called
    }
}

///
/// Diplotype, phenotype and activity level inferred for one gene of one sample.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneInterpretation {
    pub gene: Gene,
    pub diplotype: String,
    pub phenotype: Phenotype,
    pub activity_level: u8,
    /// Raw model score before bucketing, when the model computes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_score: Option<f64>,
    /// Findings in catalog order
    pub findings: Vec<MarkerFinding>,
}

impl GeneInterpretation {
    ///
    /// Placeholder interpretation used when no marker of the gene was called.
    ///
    pub fn not_determined(gene: Gene) -> Self {
        let phenotype = Phenotype::GenotypeNotDetermined;
        GeneInterpretation {
            gene,
            diplotype: UNDETERMINED_DIPLOTYPE.to_string(),
            phenotype,
            activity_level: phenotype.activity_level(),
            activity_score: None,
            findings: Vec::new(),
        }
    }

    pub fn uncalled_markers(&self) -> usize {
        self.findings.iter().filter(|f| f.is_uncalled()).count()
    }

    /// At least one marker carries a usable genotype.
    pub fn has_called_marker(&self) -> bool {
        self.findings.iter().any(|f| !f.is_uncalled())
    }
}
