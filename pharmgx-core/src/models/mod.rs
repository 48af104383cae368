pub mod drug;
pub mod gene;
pub mod genotype;
pub mod interpretation;
pub mod marker;
pub mod phenotype;

// re-export for cleaner imports
pub use self::drug::{DrugEntry, canonical_drug_name};
pub use self::gene::{Gene, GeneFamily, GeneModel, ThresholdScheme, WeightLabels};
pub use self::genotype::{CallStatus, GenotypeCall};
pub use self::interpretation::{GeneInterpretation, MarkerFinding};
pub use self::marker::{FunctionalClass, Marker};
pub use self::phenotype::{CarrierStatus, DosageStatus, MetabolizerStatus, Phenotype};
