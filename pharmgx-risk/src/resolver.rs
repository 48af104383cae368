use pharmgx_core::EngineConfig;
use pharmgx_core::consts::{DEFAULT_NO_CALL_PENALTY, GUIDELINE_REFERENCE};
use pharmgx_core::models::{DrugEntry, GeneInterpretation, Phenotype};

use crate::actions::clinical_action;
use crate::models::{RiskCategory, RiskDecision, SeverityLevel};
use crate::table::decision_cell;

const NOT_IMPLEMENTED_CONFIDENCE: u8 = 50;

///
/// Maps a gene interpretation to a risk decision through the decision table,
/// then lowers confidence for every marker that was not explicitly called.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskResolver {
    /// Confidence points removed per no-call or untyped marker
    pub no_call_penalty: u8,
}

impl Default for RiskResolver {
    fn default() -> Self {
        RiskResolver {
            no_call_penalty: DEFAULT_NO_CALL_PENALTY,
        }
    }
}

impl From<&EngineConfig> for RiskResolver {
    fn from(config: &EngineConfig) -> Self {
        RiskResolver {
            no_call_penalty: config.no_call_penalty,
        }
    }
}

impl RiskResolver {
    pub fn new(no_call_penalty: u8) -> Self {
        RiskResolver { no_call_penalty }
    }

    ///
    /// Resolve the decision for a drug from its gene interpretation.
    ///
    /// # Arguments
    /// - `drug`: catalog drug entry; its prodrug flag selects the table row
    /// - `interpretation`: output of the gene model for that drug
    ///
    pub fn resolve(&self, drug: &DrugEntry, interpretation: &GeneInterpretation) -> RiskDecision {
        let cell = decision_cell(interpretation.phenotype, drug.prodrug);
        let penalty = interpretation.uncalled_markers() as u32 * self.no_call_penalty as u32;
        let confidence = (cell.confidence as u32).saturating_sub(penalty) as u8;

        RiskDecision {
            risk: cell.risk,
            severity: cell.severity,
            severity_text: cell.severity_text(&drug.name),
            clinical_action: clinical_action(&drug.name, interpretation.phenotype),
            guideline_reference: GUIDELINE_REFERENCE.to_string(),
            confidence,
        }
    }

    ///
    /// Decision used when none of the drug's markers were found.
    ///
    pub fn not_determined(&self, drug: &DrugEntry) -> RiskDecision {
        let phenotype = Phenotype::GenotypeNotDetermined;
        let cell = decision_cell(phenotype, drug.prodrug);
        RiskDecision {
            risk: cell.risk,
            severity: cell.severity,
            severity_text: cell.severity_text(&drug.name),
            clinical_action: clinical_action(&drug.name, phenotype),
            guideline_reference: GUIDELINE_REFERENCE.to_string(),
            confidence: cell.confidence,
        }
    }

    ///
    /// Decision used for drugs outside the catalog.
    ///
    pub fn not_implemented(&self, drug: &str) -> RiskDecision {
        RiskDecision {
            risk: RiskCategory::Safe,
            severity: SeverityLevel::Low,
            severity_text: format!(
                "{} is not covered by the pharmacogenomic catalog. No genotype-based \
                 recommendation is available.",
                drug
            ),
            clinical_action: "Drug not in scope. Follow standard prescribing information."
                .to_string(),
            guideline_reference: GUIDELINE_REFERENCE.to_string(),
            confidence: NOT_IMPLEMENTED_CONFIDENCE,
        }
    }
}
