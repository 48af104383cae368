//! Multi-marker activity model: every variant copy contributes an allele
//! weight, the two worst weights stand for the diploid genotype.

use pharmgx_core::models::{
    FunctionalClass, MarkerFinding, Phenotype, ThresholdScheme, WeightLabels,
};

use crate::classifier::{ActivityClassifier, Classification, pair_labels};

const REFERENCE_WEIGHT: f64 = 1.0;

pub struct RankedPairClassifier<'a> {
    pub reference_label: &'a str,
    pub thresholds: ThresholdScheme,
    pub weight_labels: Option<&'a WeightLabels>,
}

impl RankedPairClassifier<'_> {
    fn label_for<'s>(&'s self, finding: &'s MarkerFinding) -> &'s str {
        let Some(labels) = self.weight_labels else {
            return &finding.allele;
        };
        match finding.function {
            FunctionalClass::NoFunction => labels.no_function.as_str(),
            FunctionalClass::Decreased => labels.decreased.as_str(),
            FunctionalClass::Increased => labels.increased.as_deref().unwrap_or(&finding.allele),
            _ => finding.allele.as_str(),
        }
    }
}

impl ActivityClassifier for RankedPairClassifier<'_> {
    fn classify(&self, findings: &[MarkerFinding]) -> Classification {
        let mut ranked: Vec<(f64, &str)> = findings
            .iter()
            .filter(|f| !matches!(f.function, FunctionalClass::Normal | FunctionalClass::Unknown))
            .flat_map(|f| {
                let copy = (f.function.weight(), self.label_for(f));
                std::iter::repeat_n(copy, f.variant_alleles as usize)
            })
            .collect();

        // worst first; stable so catalog order breaks ties
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.truncate(2);

        let score = ranked.iter().map(|(w, _)| *w).sum::<f64>()
            + (2 - ranked.len()) as f64 * REFERENCE_WEIGHT;
        let diplotype = pair_labels(self.reference_label, ranked.iter().map(|(_, l)| *l));

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

    use crate::models::test_utils::{called, no_call};

    fn cyp2c9(star2: u8, star3: u8) -> Vec<MarkerFinding> {
        vec![
            called("rs1799853", "*2", Decreased, star2),
            called("rs1057910", "*3", NoFunction, star3),
        ]
    }

    #[rstest]
    #[case(0, 0, "*1/*1", MetabolizerStatus::Normal, 2.0)]
    #[case(1, 0, "*1/*2", MetabolizerStatus::Intermediate, 1.5)]
    #[case(0, 1, "*1/*3", MetabolizerStatus::Intermediate, 1.0)]
    #[case(2, 0, "*2/*2", MetabolizerStatus::Intermediate, 1.0)]
    #[case(1, 1, "*3/*2", MetabolizerStatus::Poor, 0.5)]
    #[case(0, 2, "*3/*3", MetabolizerStatus::Poor, 0.0)]
    #[case(2, 2, "*3/*3", MetabolizerStatus::Poor, 0.0)]
    fn test_cyp2c9_capped(
        #[case] star2: u8,
        #[case] star3: u8,
        #[case] diplotype: &str,
        #[case] status: MetabolizerStatus,
        #[case] score: f64,
    ) {
        let classifier = RankedPairClassifier {
            reference_label: "*1",
            thresholds: ThresholdScheme::Capped,
            weight_labels: None,
        };
        let result = classifier.classify(&cyp2c9(star2, star3));
        assert_eq!(result.diplotype, diplotype);
        assert_eq!(result.phenotype, Phenotype::Metabolizer(status));
        assert_eq!(result.activity_score, Some(score));
    }

    #[fixture]
    fn cyp2d6_labels() -> WeightLabels {
        WeightLabels {
            no_function: "*4".to_string(),
            decreased: "*10".to_string(),
            increased: None,
        }
    }

    #[rstest]
    fn test_weight_labels_replace_marker_labels(cyp2d6_labels: WeightLabels) {
        let classifier = RankedPairClassifier {
            reference_label: "*1",
            thresholds: ThresholdScheme::Standard,
            weight_labels: Some(&cyp2d6_labels),
        };
        // *41 is decreased function but renders with the decreased label
        let findings = vec![
            called("rs3892097", "*4", NoFunction, 0),
            called("rs1065852", "*10", Decreased, 0),
            called("rs28371725", "*41", Decreased, 1),
        ];
        let result = classifier.classify(&findings);
        assert_eq!(result.diplotype, "*1/*10");
        assert_eq!(
            result.phenotype,
            Phenotype::Metabolizer(MetabolizerStatus::Normal)
        );
        assert_eq!(result.activity_score, Some(1.5));
    }

    #[rstest]
    fn test_order_of_findings_does_not_change_result(cyp2d6_labels: WeightLabels) {
        let classifier = RankedPairClassifier {
            reference_label: "*1",
            thresholds: ThresholdScheme::Standard,
            weight_labels: Some(&cyp2d6_labels),
        };
        let forward = vec![
            called("rs1065852", "*10", Decreased, 2),
            called("rs3892097", "*4", NoFunction, 1),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = classifier.classify(&forward);
        let b = classifier.classify(&reversed);
        assert_eq!(a, b);
        assert_eq!(a.diplotype, "*4/*10");
        assert_eq!(a.activity_score, Some(0.5));
        assert_eq!(
            a.phenotype,
            Phenotype::Metabolizer(MetabolizerStatus::Intermediate)
        );
    }

    #[rstest]
    fn test_no_calls_contribute_nothing(cyp2d6_labels: WeightLabels) {
        let classifier = RankedPairClassifier {
            reference_label: "*1",
            thresholds: ThresholdScheme::Standard,
            weight_labels: Some(&cyp2d6_labels),
        };
        let findings = vec![
            no_call("rs3892097", "*4", NoFunction),
            called("rs1065852", "*10", Decreased, 0),
        ];
        let result = classifier.classify(&findings);
        assert_eq!(result.diplotype, "*1/*1");
        assert_eq!(result.activity_score, Some(2.0));
    }
}
