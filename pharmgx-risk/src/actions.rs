use pharmgx_core::models::{CarrierStatus, DosageStatus, MetabolizerStatus, Phenotype};

const STANDARD_DOSE: &str = "Standard dose.";

/// Drug-specific action keyed by phenotype code.
fn drug_action(drug: &str, code: &str) -> Option<&'static str> {
    let action = match (drug, code) {
        ("CODEINE", "PM") => "Avoid codeine; use alternative analgesic.",
        ("CODEINE", "IM") => "Consider reduced dose or alternative.",
        ("CODEINE", "UM") => "Avoid codeine; risk of toxicity.",
        ("TRAMADOL", "PM") => "Avoid tramadol; use an analgesic not activated by CYP2D6.",
        ("TRAMADOL", "IM") => "Consider reduced dose or alternative.",
        ("TRAMADOL", "UM") => "Avoid tramadol; risk of toxicity.",
        ("WARFARIN", "PM") => "Use low dose; consider alternative.",
        ("WARFARIN", "IM") => "Consider dose reduction.",
        ("CLOPIDOGREL", "PM") => "Consider alternative antiplatelet (e.g. prasugrel/ticagrelor).",
        ("CLOPIDOGREL", "IM") => "Consider alternative or monitor.",
        ("CLOPIDOGREL", "UM") => "Standard dose; monitor.",
        ("SIMVASTATIN", "PM") => "Use low dose or alternative statin.",
        ("SIMVASTATIN", "IM") => "Consider reduced dose.",
        ("AZATHIOPRINE", "PM") => "Use very low dose or alternative.",
        ("AZATHIOPRINE", "IM") => "Reduce dose.",
        ("FLUOROURACIL" | "CAPECITABINE", "DEF") => "Do not use full dose; consider alternative.",
        ("FLUOROURACIL" | "CAPECITABINE", "INT") => "Start at 50% dose reduction.",
        ("ABACAVIR", "POS") => "Do not use abacavir; choose an alternative antiretroviral.",
        ("CARBAMAZEPINE", "POS") => "Avoid carbamazepine; use an alternative anticonvulsant.",
        ("ALLOPURINOL", "POS") => "Avoid allopurinol; use an alternative urate-lowering therapy.",
        _ => return None,
    };
    Some(action)
}

/// Fallback when a drug has no specific action for the phenotype.
fn family_default(phenotype: Phenotype) -> &'static str {
    match phenotype {
        Phenotype::Metabolizer(MetabolizerStatus::Normal)
        | Phenotype::Dosage(DosageStatus::Normal)
        | Phenotype::Carrier(CarrierStatus::NonCarrier) => STANDARD_DOSE,
        Phenotype::Metabolizer(_) => "Adjust therapy per the CPIC guideline for this gene.",
        Phenotype::Dosage(_) => "Reduce starting dose and monitor for toxicity.",
        Phenotype::Carrier(CarrierStatus::Carrier) => "Avoid the drug; choose an alternative.",
        Phenotype::Carrier(CarrierStatus::NotGenotyped) | Phenotype::GenotypeNotDetermined => {
            "Confirm genotype with a validated test before prescribing."
        }
    }
}

///
/// Clinical action text for a drug and phenotype.
///
/// # Arguments
/// - `drug`: canonical drug key
/// - `phenotype`: phenotype produced by the gene model
///
pub fn clinical_action(drug: &str, phenotype: Phenotype) -> String {
    drug_action(drug, phenotype.code())
        .unwrap_or_else(|| family_default(phenotype))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(
        "CLOPIDOGREL",
        Phenotype::Metabolizer(MetabolizerStatus::Poor),
        "Consider alternative antiplatelet (e.g. prasugrel/ticagrelor)."
    )]
    #[case(
        "CAPECITABINE",
        Phenotype::Dosage(DosageStatus::Intermediate),
        "Start at 50% dose reduction."
    )]
    #[case("WARFARIN", Phenotype::Metabolizer(MetabolizerStatus::Normal), "Standard dose.")]
    #[case("ABACAVIR", Phenotype::Carrier(CarrierStatus::NonCarrier), "Standard dose.")]
    #[case(
        "SIMVASTATIN",
        Phenotype::Metabolizer(MetabolizerStatus::Ultrarapid),
        "Adjust therapy per the CPIC guideline for this gene."
    )]
    #[case(
        "CARBAMAZEPINE",
        Phenotype::Carrier(CarrierStatus::NotGenotyped),
        "Confirm genotype with a validated test before prescribing."
    )]
    fn test_clinical_action(#[case] drug: &str, #[case] phenotype: Phenotype, #[case] expected: &str) {
        assert_eq!(clinical_action(drug, phenotype), expected);
    }
}
