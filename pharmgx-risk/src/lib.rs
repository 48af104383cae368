//! # pharmgx-risk
//!
//! Turns a gene interpretation into a drug risk decision and runs the full
//! per-drug pipeline over VCF text.
//!
//! ```rust,no_run
//! use pharmgx_core::Catalog;
//! use pharmgx_risk::Dispatcher;
//!
//! let catalog = Catalog::builtin();
//! let text = std::fs::read_to_string("sample.vcf").unwrap();
//! let result = Dispatcher::new(&catalog).interpret(&text, "clopidogrel");
//! println!("{} ({}%)", result.decision.risk, result.decision.confidence);
//! ```

pub mod actions;
pub mod dispatch;
pub mod models;
pub mod resolver;
pub mod table;

// re-exports
pub use dispatch::Dispatcher;
pub use models::{
    ExtractionSummary, Interpretation, OutcomeStatus, RiskCategory, RiskDecision, SeverityLevel,
};
pub use resolver::RiskResolver;
