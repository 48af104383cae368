//! Guideline decision table.
//!
//! One cell per (gene family, phenotype, prodrug) combination. The family is
//! carried by the [Phenotype] variant, so the matches below are exhaustive
//! and a new phenotype cannot compile without a cell.

use pharmgx_core::models::{CarrierStatus, DosageStatus, MetabolizerStatus, Phenotype};

use crate::models::{RiskCategory, SeverityLevel};

const DRUG_PLACEHOLDER: &str = "{drug}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionCell {
    pub risk: RiskCategory,
    pub severity: SeverityLevel,
    /// Confidence before no-call adjustment
    pub confidence: u8,
    template: &'static str,
}

impl DecisionCell {
    const fn new(
        risk: RiskCategory,
        severity: SeverityLevel,
        confidence: u8,
        template: &'static str,
    ) -> Self {
        DecisionCell {
            risk,
            severity,
            confidence,
            template,
        }
    }

    ///
    /// Render the severity narrative for a drug.
    ///
    pub fn severity_text(&self, drug: &str) -> String {
        self.template.replace(DRUG_PLACEHOLDER, drug)
    }
}

use RiskCategory::*;
use SeverityLevel::*;

fn metabolizer_cell(status: MetabolizerStatus, prodrug: bool) -> DecisionCell {
    match (status, prodrug) {
        (MetabolizerStatus::Poor, true) => DecisionCell::new(
            AdjustDosage,
            High,
            92,
            "{drug} needs enzymatic activation that this genotype barely provides. \
             Little active metabolite is formed and the expected effect is greatly reduced.",
        ),
        (MetabolizerStatus::Poor, false) => DecisionCell::new(
            AdjustDosage,
            High,
            90,
            "{drug} is cleared very slowly with this genotype. \
             Standard doses lead to accumulation and a higher risk of adverse effects.",
        ),
        (MetabolizerStatus::Intermediate, true) => DecisionCell::new(
            AdjustDosage,
            Moderate,
            85,
            "Activation of {drug} is reduced with this genotype, which may lower the therapeutic response.",
        ),
        (MetabolizerStatus::Intermediate, false) => DecisionCell::new(
            AdjustDosage,
            Moderate,
            80,
            "Clearance of {drug} is reduced with this genotype, which may raise exposure at standard doses.",
        ),
        (MetabolizerStatus::Normal, _) => DecisionCell::new(
            Safe,
            Low,
            90,
            "Normal metabolism of {drug} is expected. Standard dosing applies.",
        ),
        (MetabolizerStatus::Ultrarapid, true) => DecisionCell::new(
            Toxic,
            High,
            88,
            "{drug} is activated unusually fast with this genotype. \
             The active metabolite can reach toxic levels even at standard doses.",
        ),
        (MetabolizerStatus::Ultrarapid, false) => DecisionCell::new(
            Ineffective,
            Moderate,
            84,
            "{drug} is cleared unusually fast with this genotype and may not reach therapeutic levels.",
        ),
    }
}

fn dosage_cell(status: DosageStatus) -> DecisionCell {
    match status {
        DosageStatus::Deficient => DecisionCell::new(
            Toxic,
            High,
            96,
            "Enzyme activity is deficient. {drug} at standard doses carries a high risk of severe, \
             potentially fatal toxicity.",
        ),
        DosageStatus::Intermediate => DecisionCell::new(
            AdjustDosage,
            Moderate,
            93,
            "Enzyme activity is partially reduced. {drug} at standard doses carries an increased \
             risk of toxicity.",
        ),
        DosageStatus::Normal => DecisionCell::new(
            Safe,
            Low,
            94,
            "Enzyme activity is normal. Standard {drug} dosing applies.",
        ),
    }
}

fn carrier_cell(status: CarrierStatus) -> DecisionCell {
    match status {
        CarrierStatus::Carrier => DecisionCell::new(
            Toxic,
            High,
            98,
            "The risk allele associated with {drug} hypersensitivity was detected. \
             Severe immune-mediated reactions are likely.",
        ),
        CarrierStatus::NonCarrier => DecisionCell::new(
            Safe,
            Low,
            95,
            "The risk allele associated with {drug} hypersensitivity was not detected.",
        ),
        CarrierStatus::NotGenotyped => DecisionCell::new(
            AdjustDosage,
            Moderate,
            0,
            "The risk allele associated with {drug} hypersensitivity could not be genotyped. \
             Carrier status is unknown and must not be assumed negative.",
        ),
    }
}

///
/// Look up the decision cell for a phenotype.
///
/// # Arguments
/// - `phenotype`: phenotype produced by the gene model
/// - `prodrug`: the drug needs the gene product to become active
///
pub fn decision_cell(phenotype: Phenotype, prodrug: bool) -> DecisionCell {
    match phenotype {
        Phenotype::Metabolizer(status) => metabolizer_cell(status, prodrug),
        Phenotype::Dosage(status) => dosage_cell(status),
        Phenotype::Carrier(status) => carrier_cell(status),
        Phenotype::GenotypeNotDetermined => DecisionCell::new(
            AdjustDosage,
            Moderate,
            0,
            "Genotype not determined: none of the markers needed to assess {drug} were found \
             in the file. Metabolizer status is unknown.",
        ),
    }
}
