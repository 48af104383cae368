use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// Functional consequence of the allele a marker tags.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalClass {
    Normal,
    Decreased,
    NoFunction,
    Increased,
    Unknown,
}

impl FunctionalClass {
    ///
    /// Activity weight of one allele copy of this class.
    ///
    pub fn weight(&self) -> f64 {
        match self {
            FunctionalClass::NoFunction => 0.0,
            FunctionalClass::Decreased => 0.5,
            FunctionalClass::Normal | FunctionalClass::Unknown => 1.0,
            FunctionalClass::Increased => 1.5,
        }
    }

    ///
    /// Whether a copy of this allele reduces function.
    ///
    pub fn is_loss(&self) -> bool {
        matches!(self, FunctionalClass::NoFunction | FunctionalClass::Decreased)
    }
}

impl Display for FunctionalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FunctionalClass::Normal => "normal function",
            FunctionalClass::Decreased => "decreased function",
            FunctionalClass::NoFunction => "no function",
            FunctionalClass::Increased => "increased function",
            FunctionalClass::Unknown => "unknown function",
        };
        write!(f, "{}", s)
    }
}

///
/// A genomic position with a stable accession that tags a named allele.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// External accession, e.g. `rs4244285`
    pub id: String,
    /// Allele label the variant tags, e.g. `*2`
    pub allele: String,
    pub function: FunctionalClass,
    /// Canonical drug key for markers of carrier-status genes
    #[serde(default)]
    pub drug: Option<String>,
}

impl Marker {
    pub fn new(id: &str, allele: &str, function: FunctionalClass) -> Self {
        Marker {
            id: id.to_string(),
            allele: allele.to_string(),
            function,
            drug: None,
        }
    }

    pub fn keyed_to(mut self, drug: &str) -> Self {
        self.drug = Some(drug.to_string());
        self
    }
}
