use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::models::phenotype::MetabolizerStatus;

///
/// Genes the engine knows how to interpret.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gene {
    #[serde(rename = "CYP2C19")]
    Cyp2c19,
    #[serde(rename = "CYP2C9")]
    Cyp2c9,
    #[serde(rename = "CYP2D6")]
    Cyp2d6,
    #[serde(rename = "SLCO1B1")]
    Slco1b1,
    #[serde(rename = "TPMT")]
    Tpmt,
    #[serde(rename = "DPYD")]
    Dpyd,
    #[serde(rename = "HLA-B")]
    HlaB,
}

impl Gene {
    pub fn symbol(&self) -> &'static str {
        match self {
            Gene::Cyp2c19 => "CYP2C19",
            Gene::Cyp2c9 => "CYP2C9",
            Gene::Cyp2d6 => "CYP2D6",
            Gene::Slco1b1 => "SLCO1B1",
            Gene::Tpmt => "TPMT",
            Gene::Dpyd => "DPYD",
            Gene::HlaB => "HLA-B",
        }
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gene {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CYP2C19" => Ok(Gene::Cyp2c19),
            "CYP2C9" => Ok(Gene::Cyp2c9),
            "CYP2D6" => Ok(Gene::Cyp2d6),
            "SLCO1B1" => Ok(Gene::Slco1b1),
            "TPMT" => Ok(Gene::Tpmt),
            "DPYD" => Ok(Gene::Dpyd),
            "HLA-B" | "HLAB" => Ok(Gene::HlaB),
            other => Err(CatalogError::UnknownGeneSymbol(other.to_string())),
        }
    }
}

///
/// The decision-table family a gene belongs to. Derived from its model.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneFamily {
    ActivityScore,
    DosageThreshold,
    Carrier,
}

///
/// Score cut-offs that bucket a summed activity score into a metabolizer status.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdScheme {
    /// 0 poor, (0, 1] intermediate, (1, 2.5) normal, >= 2.5 ultrarapid
    Standard,
    /// <= 0.5 poor, (0.5, 1.5] intermediate, else normal. No ultrarapid bucket.
    Capped,
}

impl ThresholdScheme {
    pub fn bucket(&self, score: f64) -> MetabolizerStatus {
        match self {
            ThresholdScheme::Standard => {
                if score <= 0.0 {
                    MetabolizerStatus::Poor
                } else if score <= 1.0 {
                    MetabolizerStatus::Intermediate
                } else if score < 2.5 {
                    MetabolizerStatus::Normal
                } else {
                    MetabolizerStatus::Ultrarapid
                }
            }
            ThresholdScheme::Capped => {
                if score <= 0.5 {
                    MetabolizerStatus::Poor
                } else if score <= 1.5 {
                    MetabolizerStatus::Intermediate
                } else {
                    MetabolizerStatus::Normal
                }
            }
        }
    }
}

///
/// Display labels used when a ranked-pair gene renders its diplotype from
/// activity weights rather than from the matched markers.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightLabels {
    pub no_function: String,
    pub decreased: String,
    #[serde(default)]
    pub increased: Option<String>,
}

///
/// Per-gene interpretation model and its configuration.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneModel {
    /// Loss-of-function and gain-of-function copies are counted separately.
    LossGain { thresholds: ThresholdScheme },
    /// The two worst observed allele weights represent the diploid genotype.
    RankedPair {
        thresholds: ThresholdScheme,
        #[serde(default)]
        weight_labels: Option<WeightLabels>,
    },
    /// Remaining activity after capped subtraction of no-function and decreased copies.
    DosageThreshold,
    /// One drug-keyed marker, any variant copy makes a carrier.
    Carrier,
}

impl GeneModel {
    pub fn family(&self) -> GeneFamily {
        match self {
            GeneModel::LossGain { .. } | GeneModel::RankedPair { .. } => GeneFamily::ActivityScore,
            GeneModel::DosageThreshold => GeneFamily::DosageThreshold,
            GeneModel::Carrier => GeneFamily::Carrier,
        }
    }
}
