//! # pharmgx
//!
//! Umbrella crate for the pharmgx workspace. Each member is re-exported
//! behind a feature of the same name; `risk` (the default) pulls in the
//! whole pipeline.

#[cfg(feature = "core")]
#[doc(inline)]
pub use pharmgx_core as core;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use pharmgx_vcf as vcf;

#[cfg(feature = "phenotype")]
#[doc(inline)]
pub use pharmgx_phenotype as phenotype;

#[cfg(feature = "risk")]
#[doc(inline)]
pub use pharmgx_risk as risk;
