use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

use crate::consts::GENOTYPE_NOT_DETERMINED;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetabolizerStatus {
    Poor,
    Intermediate,
    Normal,
    Ultrarapid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DosageStatus {
    Deficient,
    Intermediate,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarrierStatus {
    Carrier,
    NonCarrier,
    NotGenotyped,
}

///
/// Functional category derived from a gene's diplotype. Each gene family has
/// its own closed set of categories.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phenotype {
    Metabolizer(MetabolizerStatus),
    Dosage(DosageStatus),
    Carrier(CarrierStatus),
    /// No marker for the gene or drug was found in the input
    GenotypeNotDetermined,
}

impl Phenotype {
    ///
    /// Normalized 0-3 activity level shared by all gene families.
    ///
    pub fn activity_level(&self) -> u8 {
        match self {
            Phenotype::Metabolizer(MetabolizerStatus::Poor)
            | Phenotype::Dosage(DosageStatus::Deficient)
            | Phenotype::Carrier(CarrierStatus::Carrier) => 0,
            Phenotype::Metabolizer(MetabolizerStatus::Intermediate)
            | Phenotype::Dosage(DosageStatus::Intermediate) => 1,
            Phenotype::Metabolizer(MetabolizerStatus::Normal)
            | Phenotype::Dosage(DosageStatus::Normal)
            | Phenotype::Carrier(CarrierStatus::NonCarrier) => 2,
            Phenotype::Metabolizer(MetabolizerStatus::Ultrarapid) => 3,
            Phenotype::Carrier(CarrierStatus::NotGenotyped) | Phenotype::GenotypeNotDetermined => 1,
        }
    }

    ///
    /// Short code used in clinical-action lookups (PM, IM, NM, UM, ...).
    ///
    pub fn code(&self) -> &'static str {
        match self {
            Phenotype::Metabolizer(MetabolizerStatus::Poor) => "PM",
            Phenotype::Metabolizer(MetabolizerStatus::Intermediate) => "IM",
            Phenotype::Metabolizer(MetabolizerStatus::Normal) => "NM",
            Phenotype::Metabolizer(MetabolizerStatus::Ultrarapid) => "UM",
            Phenotype::Dosage(DosageStatus::Deficient) => "DEF",
            Phenotype::Dosage(DosageStatus::Intermediate) => "INT",
            Phenotype::Dosage(DosageStatus::Normal) => "NORM",
            Phenotype::Carrier(CarrierStatus::Carrier) => "POS",
            Phenotype::Carrier(CarrierStatus::NonCarrier) => "NEG",
            Phenotype::Carrier(CarrierStatus::NotGenotyped) => "NA",
            Phenotype::GenotypeNotDetermined => "ND",
        }
    }
}

impl Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phenotype::Metabolizer(MetabolizerStatus::Poor) => "Poor Metabolizer",
            Phenotype::Metabolizer(MetabolizerStatus::Intermediate) => "Intermediate Metabolizer",
            Phenotype::Metabolizer(MetabolizerStatus::Normal) => "Normal Metabolizer",
            Phenotype::Metabolizer(MetabolizerStatus::Ultrarapid) => "Ultrarapid Metabolizer",
            Phenotype::Dosage(DosageStatus::Deficient) => "Deficient Activity",
            Phenotype::Dosage(DosageStatus::Intermediate) => "Intermediate Activity",
            Phenotype::Dosage(DosageStatus::Normal) => "Normal Activity",
            Phenotype::Carrier(CarrierStatus::Carrier) => "Carrier",
            Phenotype::Carrier(CarrierStatus::NonCarrier) => "Non-carrier",
            Phenotype::Carrier(CarrierStatus::NotGenotyped) => "Not genotyped",
            Phenotype::GenotypeNotDetermined => GENOTYPE_NOT_DETERMINED,
        };
        write!(f, "{}", s)
    }
}

impl Serialize for Phenotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
