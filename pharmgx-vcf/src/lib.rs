//! # Pharmacogenomic marker extraction from VCF
//!
//! This crate turns VCF text into genotype calls for a requested set of
//! catalog markers. It provides:
//!
//! - ID-column resolution (first `rs` token of a `;`-separated list)
//! - first-sample GT extraction with `|`/`/` normalization and no-call defaults
//! - lenient line handling: malformed records are skipped and counted
//! - plain and gzip input loading with a size cap

pub mod errors;
pub mod extract;
pub mod reader;

pub use errors::VcfError;
pub use extract::{
    ExtractionReport, extract_for_drug, extract_genotype_calls, marker_set, resolve_marker_id,
};
pub use reader::{decode_vcf_bytes, read_vcf_text};
