use std::fmt::{self, Display};

use serde::Serialize;

use pharmgx_core::Catalog;
use pharmgx_core::models::{Gene, GeneInterpretation};
use pharmgx_vcf::ExtractionReport;

/// Confidence below which callers should flag the decision for review.
pub const CAUTION_THRESHOLD: u8 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RiskCategory {
    Safe,
    #[serde(rename = "Adjust Dosage")]
    AdjustDosage,
    Toxic,
    Ineffective,
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskCategory::Safe => "Safe",
            RiskCategory::AdjustDosage => "Adjust Dosage",
            RiskCategory::Toxic => "Toxic",
            RiskCategory::Ineffective => "Ineffective",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
}

impl Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

///
/// Final recommendation for one drug.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskDecision {
    pub risk: RiskCategory,
    pub severity: SeverityLevel,
    /// Narrative explaining the risk for this drug
    pub severity_text: String,
    pub clinical_action: String,
    pub guideline_reference: String,
    /// 0-100
    pub confidence: u8,
}

impl RiskDecision {
    pub fn needs_caution(&self) -> bool {
        self.confidence < CAUTION_THRESHOLD
    }
}

///
/// Which path the dispatcher took for a request.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Markers were found and the gene model ran
    Interpreted,
    /// None of the drug's markers had a usable genotype in the input
    GenotypeNotDetermined,
    /// The drug is not in the catalog
    NotImplemented,
}

///
/// Bookkeeping from the VCF scan, reported alongside the decision.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub lines_scanned: usize,
    pub data_lines: usize,
    pub malformed_lines: usize,
    pub markers_requested: usize,
    pub markers_found: usize,
    /// False when the header declared no FORMAT column, so every call is a no-call
    pub has_genotype_column: bool,
    pub genes_covered: Vec<Gene>,
}

impl ExtractionSummary {
    pub fn from_report(
        catalog: &Catalog,
        report: &ExtractionReport,
        markers_requested: usize,
    ) -> Self {
        ExtractionSummary {
            lines_scanned: report.lines_scanned,
            data_lines: report.data_lines,
            malformed_lines: report.malformed_lines,
            markers_requested,
            markers_found: report.calls.len(),
            has_genotype_column: report.has_genotype_column,
            genes_covered: report.genes_covered(catalog),
        }
    }
}

///
/// Complete answer for one (file, drug) request.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interpretation {
    /// Canonical drug key
    pub drug: String,
    pub status: OutcomeStatus,
    /// Absent only for drugs outside the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genotype: Option<GeneInterpretation>,
    pub decision: RiskDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<ExtractionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn decision(confidence: u8) -> RiskDecision {
        RiskDecision {
            risk: RiskCategory::Safe,
            severity: SeverityLevel::Low,
            severity_text: String::new(),
            clinical_action: String::new(),
            guideline_reference: "CPIC".to_string(),
            confidence,
        }
    }

    #[rstest]
    #[case(0, true)]
    #[case(49, true)]
    #[case(50, false)]
    #[case(98, false)]
    fn test_needs_caution(#[case] confidence: u8, #[case] expected: bool) {
        assert_eq!(decision(confidence).needs_caution(), expected);
    }

    #[rstest]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::AdjustDosage).unwrap(),
            "\"Adjust Dosage\""
        );
        assert_eq!(
            serde_json::to_string(&SeverityLevel::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(
            serde_json::to_string(&OutcomeStatus::GenotypeNotDetermined).unwrap(),
            "\"genotype_not_determined\""
        );
    }
}
