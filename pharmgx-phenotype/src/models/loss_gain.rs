//! Two-bucket activity model: loss-of-function copies and gain-of-function
//! copies are counted separately, the rest of the diploid genome is assumed
//! to carry the reference allele.

use pharmgx_core::models::{FunctionalClass, MarkerFinding, Phenotype, ThresholdScheme};

use crate::classifier::{ActivityClassifier, Classification, pair_labels};

const REFERENCE_WEIGHT: f64 = 1.0;
const GAIN_WEIGHT: f64 = 1.5;

pub struct LossGainClassifier<'a> {
    pub reference_label: &'a str,
    pub thresholds: ThresholdScheme,
}

impl ActivityClassifier for LossGainClassifier<'_> {
    fn classify(&self, findings: &[MarkerFinding]) -> Classification {
        let mut loss_labels: Vec<&str> = Vec::new();
        let mut gain_labels: Vec<&str> = Vec::new();

        for finding in findings {
            for _ in 0..finding.variant_alleles {
                if finding.function.is_loss() {
                    loss_labels.push(&finding.allele);
                } else if finding.function == FunctionalClass::Increased {
                    gain_labels.push(&finding.allele);
                }
            }
        }

        let loss = loss_labels.len().min(2);
        let gain = gain_labels.len();
        let reference = 2usize.saturating_sub(loss + gain);
        let score = reference as f64 * REFERENCE_WEIGHT + gain as f64 * GAIN_WEIGHT;

        // loss alleles take priority over gain alleles in the label
        let diplotype = pair_labels(
            self.reference_label,
            loss_labels.iter().chain(gain_labels.iter()),
        );

        Classification {
            diplotype,
            phenotype: Phenotype::Metabolizer(self.thresholds.bucket(score)),
            activity_score: Some(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pharmgx_core::models::FunctionalClass::*;
    use pharmgx_core::models::MetabolizerStatus;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::test_utils::{called, no_call, untyped};

    #[fixture]
    fn classifier() -> LossGainClassifier<'static> {
        LossGainClassifier {
            reference_label: "*1",
            thresholds: ThresholdScheme::Standard,
        }
    }

    fn cyp2c19(star2: u8, star3: u8, star17: u8) -> Vec<MarkerFinding> {
        vec![
            called("rs4244285", "*2", NoFunction, star2),
            called("rs4986893", "*3", NoFunction, star3),
            called("rs12248560", "*17", Increased, star17),
        ]
    }

    #[rstest]
    #[case(0, 0, 0, "*1/*1", MetabolizerStatus::Normal, 2.0)]
    #[case(1, 0, 0, "*1/*2", MetabolizerStatus::Intermediate, 1.0)]
    #[case(2, 0, 0, "*2/*2", MetabolizerStatus::Poor, 0.0)]
    #[case(1, 1, 0, "*2/*3", MetabolizerStatus::Poor, 0.0)]
    #[case(0, 0, 1, "*1/*17", MetabolizerStatus::Ultrarapid, 2.5)]
    #[case(0, 0, 2, "*17/*17", MetabolizerStatus::Ultrarapid, 3.0)]
    #[case(1, 0, 1, "*2/*17", MetabolizerStatus::Normal, 1.5)]
    fn test_cyp2c19_table(
        classifier: LossGainClassifier<'static>,
        #[case] star2: u8,
        #[case] star3: u8,
        #[case] star17: u8,
        #[case] diplotype: &str,
        #[case] status: MetabolizerStatus,
        #[case] score: f64,
    ) {
        let result = classifier.classify(&cyp2c19(star2, star3, star17));
        assert_eq!(result.diplotype, diplotype);
        assert_eq!(result.phenotype, Phenotype::Metabolizer(status));
        assert_eq!(result.activity_score, Some(score));
    }

    #[rstest]
    fn test_no_calls_count_as_reference(classifier: LossGainClassifier<'static>) {
        let findings = vec![
            no_call("rs4244285", "*2", NoFunction),
            untyped("rs4986893", "*3", NoFunction),
            called("rs12248560", "*17", Increased, 0),
        ];
        let result = classifier.classify(&findings);
        assert_eq!(result.diplotype, "*1/*1");
        assert_eq!(result.phenotype, Phenotype::Metabolizer(MetabolizerStatus::Normal));
    }

    #[rstest]
    fn test_normal_function_markers_are_ignored(classifier: LossGainClassifier<'static>) {
        // SLCO1B1: *5 decreased counts as loss, *1B normal never counts
        let findings = vec![
            called("rs4149056", "*5", Decreased, 1),
            called("rs2306283", "*1B", Normal, 2),
        ];
        let result = classifier.classify(&findings);
        assert_eq!(result.diplotype, "*1/*5");
        assert_eq!(
            result.phenotype,
            Phenotype::Metabolizer(MetabolizerStatus::Intermediate)
        );
    }

    #[rstest]
    fn test_loss_is_capped_at_two_copies(classifier: LossGainClassifier<'static>) {
        // TPMT *3B and *3C both homozygous
        let findings = vec![
            called("rs1800462", "*2", NoFunction, 0),
            called("rs1800460", "*3B", NoFunction, 2),
            called("rs1142345", "*3C", NoFunction, 2),
        ];
        let result = classifier.classify(&findings);
        assert_eq!(result.diplotype, "*3B/*3B");
        assert_eq!(result.activity_score, Some(0.0));
        assert_eq!(result.phenotype, Phenotype::Metabolizer(MetabolizerStatus::Poor));
    }
}
