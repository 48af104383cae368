//! # pharmgx-phenotype
//!
//! Gene interpreters that turn marker genotype calls into a diplotype, a
//! phenotype category and a normalized activity level. Each catalog gene
//! model maps to one [classifier::ActivityClassifier] implementation.

pub mod classifier;
pub mod interpret;
pub mod models;
pub mod observe;

// re-exports
pub use classifier::{ActivityClassifier, Classification, classifier_for};
pub use interpret::{interpret_drug, interpret_gene};
pub use observe::observe_markers;
