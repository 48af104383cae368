use pharmgx_core::GeneEntry;
use pharmgx_core::models::{GeneModel, MarkerFinding, Phenotype};

use crate::models::{
    CarrierClassifier, DosageThresholdClassifier, LossGainClassifier, RankedPairClassifier,
};

///
/// Outcome of classifying one gene's marker findings.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub diplotype: String,
    pub phenotype: Phenotype,
    pub activity_score: Option<f64>,
}

///
/// A gene interpretation model: turns ordered marker findings into a
/// diplotype and phenotype. Implementations carry their per-gene
/// configuration (thresholds, labels) and hold no other state.
///
pub trait ActivityClassifier {
    fn classify(&self, findings: &[MarkerFinding]) -> Classification;
}

///
/// Build the classifier configured for a catalog gene entry.
///
pub fn classifier_for(entry: &GeneEntry) -> Box<dyn ActivityClassifier + '_> {
    let reference_label = entry.reference_label.as_str();
    match &entry.model {
        GeneModel::LossGain { thresholds } => Box::new(LossGainClassifier {
            reference_label,
            thresholds: *thresholds,
        }),
        GeneModel::RankedPair {
            thresholds,
            weight_labels,
        } => Box::new(RankedPairClassifier {
            reference_label,
            thresholds: *thresholds,
            weight_labels: weight_labels.as_ref(),
        }),
        GeneModel::DosageThreshold => Box::new(DosageThresholdClassifier { reference_label }),
        GeneModel::Carrier => Box::new(CarrierClassifier { reference_label }),
    }
}

///
/// Render a diplotype from the two highest-priority variant labels, padding
/// with the reference label on the left.
///
pub fn pair_labels<I, S>(reference_label: &str, labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut labels = labels.into_iter();
    match (labels.next(), labels.next()) {
        (None, _) => format!("{}/{}", reference_label, reference_label),
        (Some(a), None) => format!("{}/{}", reference_label, a.as_ref()),
        (Some(a), Some(b)) => format!("{}/{}", a.as_ref(), b.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "*1/*1")]
    #[case(vec!["*2"], "*1/*2")]
    #[case(vec!["*2", "*3"], "*2/*3")]
    #[case(vec!["*2", "*3", "*17"], "*2/*3")]
    fn test_pair_labels(#[case] labels: Vec<&str>, #[case] expected: &str) {
        assert_eq!(pair_labels("*1", labels), expected);
    }
}
