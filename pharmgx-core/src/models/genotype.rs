use serde::Serialize;

use crate::consts::NO_CALL;
use crate::errors::GenotypeError;

///
/// Genotype observed for one catalog marker in the first sample of a VCF.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenotypeCall {
    pub marker_id: String,
    pub chrom: String,
    pub pos: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    /// Normalized genotype with `/` separators, `./.` when no call was made
    pub genotype: String,
}

impl GenotypeCall {
    ///
    /// Count non-reference alleles in the genotype.
    ///
    /// # Returns
    /// - `Ok(Some(n))` with n in 0..=2 for a called genotype
    /// - `Ok(None)` when both alleles are missing
    /// - `Err` for haploid, polyploid or unparseable genotypes
    ///
    pub fn variant_allele_count(&self) -> Result<Option<u8>, GenotypeError> {
        count_variant_alleles(&self.genotype)
    }

    pub fn is_no_call(&self) -> bool {
        self.genotype == NO_CALL
    }
}

///
/// Normalize phased `|` separators to `/`.
///
pub fn normalize_genotype(gt: &str) -> String {
    gt.trim().replace('|', "/")
}

pub fn count_variant_alleles(gt: &str) -> Result<Option<u8>, GenotypeError> {
    let normalized = normalize_genotype(gt);
    let alleles: Vec<&str> = normalized.split('/').collect();

    match alleles.len() {
        1 => return Err(GenotypeError::Haploid(gt.to_string())),
        2 => {}
        _ => return Err(GenotypeError::Polyploid(gt.to_string())),
    }

    let mut called = 0;
    let mut variant = 0;
    for allele in alleles {
        let allele = allele.trim();
        if allele == "." || allele.is_empty() {
            continue;
        }
        let index: u32 = allele
            .parse()
            .map_err(|_| GenotypeError::Unparseable(gt.to_string()))?;
        called += 1;
        if index >= 1 {
            variant += 1;
        }
    }

    if called == 0 {
        return Ok(None);
    }
    Ok(Some(variant))
}

///
/// How a catalog marker was observed in the input.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    /// Explicit genotype, reference or not
    Called,
    /// Record present but the genotype could not be determined
    NoCall,
    /// No record for the marker in the input
    NotTyped,
}
