//! Capped-subtraction model for dosage-sensitive enzymes.

use pharmgx_core::models::{DosageStatus, FunctionalClass, MarkerFinding, Phenotype};

use crate::classifier::{ActivityClassifier, Classification};

const FULL_ACTIVITY: f64 = 2.0;
const DECREASED_DEFICIT: f64 = 0.5;

pub struct DosageThresholdClassifier<'a> {
    pub reference_label: &'a str,
}

/// Highest variant count among findings of one functional class, with the
/// label of the marker that carries it.
fn max_copies(findings: &[MarkerFinding], function: FunctionalClass) -> (u8, Option<&str>) {
    findings
        .iter()
        .filter(|f| f.function == function && f.variant_alleles > 0)
        .fold((0, None), |best, f| {
            if f.variant_alleles > best.0 {
                (f.variant_alleles, Some(f.allele.as_str()))
            } else {
                best
            }
        })
}

///
/// Bucket remaining activity into a dosage status.
///
pub fn dosage_status(activity: f64) -> DosageStatus {
    if activity <= 0.0 {
        DosageStatus::Deficient
    } else if activity < 1.5 {
        DosageStatus::Intermediate
    } else {
        DosageStatus::Normal
    }
}

impl ActivityClassifier for DosageThresholdClassifier<'_> {
    fn classify(&self, findings: &[MarkerFinding]) -> Classification {
        let (no_function, nf_label) = max_copies(findings, FunctionalClass::NoFunction);
        let (decreased, dec_label) = max_copies(findings, FunctionalClass::Decreased);

        let no_function = no_function.min(2);
        // decreased copies only fill what no-function copies left
        let decreased_counted = (2 - no_function).min(decreased);
        let activity = (FULL_ACTIVITY
            - no_function as f64
            - DECREASED_DEFICIT * decreased_counted as f64)
            .max(0.0);

        let mut labels: Vec<&str> = Vec::with_capacity(2);
        if let Some(label) = nf_label {
            labels.extend(std::iter::repeat_n(label, no_function as usize));
        }
        if let Some(label) = dec_label {
            labels.extend(std::iter::repeat_n(label, decreased_counted as usize));
        }
        while labels.len() < 2 {
            labels.insert(0, self.reference_label);
        }

        Classification {
            diplotype: labels.join("/"),
            phenotype: Phenotype::Dosage(dosage_status(activity)),
            activity_score: Some(activity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pharmgx_core::models::FunctionalClass::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::test_utils::called;

    #[fixture]
    fn classifier() -> DosageThresholdClassifier<'static> {
        DosageThresholdClassifier {
            reference_label: "*1",
        }
    }

    fn dpyd(star2a: u8, star13: u8, hapb3: u8) -> Vec<MarkerFinding> {
        vec![
            called("rs3918290", "*2A", NoFunction, star2a),
            called("rs55886062", "*13", NoFunction, star13),
            called("rs67376798", "c.2846A>T", Decreased, hapb3),
        ]
    }

    #[rstest]
    #[case(0, 0, 0, "*1/*1", DosageStatus::Normal, 2.0)]
    #[case(0, 0, 1, "*1/c.2846A>T", DosageStatus::Normal, 1.5)]
    #[case(0, 0, 2, "c.2846A>T/c.2846A>T", DosageStatus::Intermediate, 1.0)]
    #[case(1, 0, 0, "*1/*2A", DosageStatus::Intermediate, 1.0)]
    #[case(1, 0, 1, "*2A/c.2846A>T", DosageStatus::Intermediate, 0.5)]
    #[case(2, 0, 0, "*2A/*2A", DosageStatus::Deficient, 0.0)]
    #[case(2, 0, 2, "*2A/*2A", DosageStatus::Deficient, 0.0)]
    #[case(1, 1, 0, "*1/*2A", DosageStatus::Intermediate, 1.0)]
    fn test_dpyd_activity(
        classifier: DosageThresholdClassifier<'static>,
        #[case] star2a: u8,
        #[case] star13: u8,
        #[case] hapb3: u8,
        #[case] diplotype: &str,
        #[case] status: DosageStatus,
        #[case] activity: f64,
    ) {
        let result = classifier.classify(&dpyd(star2a, star13, hapb3));
        assert_eq!(result.diplotype, diplotype);
        assert_eq!(result.phenotype, Phenotype::Dosage(status));
        assert_eq!(result.activity_score, Some(activity));
    }

    #[rstest]
    fn test_no_function_dominates_decreased(classifier: DosageThresholdClassifier<'static>) {
        for hapb3 in 0..=2 {
            let result = classifier.classify(&dpyd(2, 0, hapb3));
            assert_eq!(result.activity_score, Some(0.0));
            assert_eq!(result.phenotype, Phenotype::Dosage(DosageStatus::Deficient));
        }
    }

    #[rstest]
    #[case(0.0, DosageStatus::Deficient)]
    #[case(0.5, DosageStatus::Intermediate)]
    #[case(1.0, DosageStatus::Intermediate)]
    #[case(1.5, DosageStatus::Normal)]
    #[case(2.0, DosageStatus::Normal)]
    fn test_dosage_status(#[case] activity: f64, #[case] expected: DosageStatus) {
        assert_eq!(dosage_status(activity), expected);
    }
}
