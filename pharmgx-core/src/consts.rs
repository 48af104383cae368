pub const NO_CALL: &str = "./.";
pub const DEFAULT_MARKER_PREFIX: &str = "rs";
pub const DEFAULT_REFERENCE_LABEL: &str = "*1";
pub const CARRIER_REFERENCE_LABEL: &str = "Other";
pub const UNDETERMINED_DIPLOTYPE: &str = "Unknown";
pub const GENOTYPE_NOT_DETERMINED: &str = "Genotype not determined";
pub const GUIDELINE_REFERENCE: &str = "CPIC";

pub const DEFAULT_MAX_VCF_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_NO_CALL_PENALTY: u8 = 10;

// drug text matching
pub const DRUG_MATCH_MIN_CONFIDENCE: f64 = 0.6;
pub const DRUG_MATCH_MAX_CONFIDENCE: f64 = 0.99;
pub const DRUG_MATCH_EXACT_FLOOR: f64 = 0.8;
