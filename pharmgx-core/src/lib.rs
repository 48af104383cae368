//! # pharmgx-core
//!
//! Shared models and the marker catalog for the pharmgx pharmacogenomic
//! interpretation engine:
//!
//! - genes, markers and their functional classes
//! - genotype calls and per-marker findings
//! - phenotype categories and the gene interpretation record
//! - the immutable [catalog::Catalog] of markers, gene models and drugs
//! - engine configuration loaded from TOML

pub mod catalog;
pub mod config;
pub mod consts;
pub mod drug_match;
pub mod errors;
pub mod models;

// re-exports
pub use catalog::{Catalog, CatalogFile, GeneEntry};
pub use config::EngineConfig;
pub use drug_match::{DrugMatch, match_drug_in_text};
pub use errors::{CatalogError, ConfigError, GenotypeError};
