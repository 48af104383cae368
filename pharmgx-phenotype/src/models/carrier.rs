//! Single-marker carrier status for drug-keyed risk alleles.

use pharmgx_core::consts::UNDETERMINED_DIPLOTYPE;
use pharmgx_core::models::{CarrierStatus, MarkerFinding, Phenotype};

use crate::classifier::{ActivityClassifier, Classification};

pub struct CarrierClassifier<'a> {
    pub reference_label: &'a str,
}

impl ActivityClassifier for CarrierClassifier<'_> {
    fn classify(&self, findings: &[MarkerFinding]) -> Classification {
        // an absent or uncalled risk marker is never read as a negative result
        let Some(finding) = findings.iter().find(|f| !f.is_uncalled()) else {
            return Classification {
                diplotype: UNDETERMINED_DIPLOTYPE.to_string(),
                phenotype: Phenotype::Carrier(CarrierStatus::NotGenotyped),
                activity_score: None,
            };
        };

        let allele = finding.allele.as_str();
        let (diplotype, status) = match finding.variant_alleles {
            0 => (
                format!("{}/{}", self.reference_label, self.reference_label),
                CarrierStatus::NonCarrier,
            ),
            1 => (
                format!("{}/{}", self.reference_label, allele),
                CarrierStatus::Carrier,
            ),
            _ => (format!("{}/{}", allele, allele), CarrierStatus::Carrier),
        };

        Classification {
            diplotype,
            phenotype: Phenotype::Carrier(status),
            activity_score: None,
        }
    }
}
