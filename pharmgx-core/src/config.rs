use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::consts::{DEFAULT_MAX_VCF_BYTES, DEFAULT_NO_CALL_PENALTY};
use crate::errors::{CatalogError, ConfigError};

fn default_max_vcf_bytes() -> u64 {
    DEFAULT_MAX_VCF_BYTES
}

fn default_no_call_penalty() -> u8 {
    DEFAULT_NO_CALL_PENALTY
}

///
/// Engine settings read from a TOML file.
///
/// ```toml
/// catalog = "catalog.toml"
/// max_vcf_bytes = 5242880
/// no_call_penalty = 10
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Alternate marker catalog; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_max_vcf_bytes")]
    pub max_vcf_bytes: u64,
    /// Confidence points removed per uncalled marker
    #[serde(default = "default_no_call_penalty")]
    pub no_call_penalty: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            catalog: None,
            max_vcf_bytes: DEFAULT_MAX_VCF_BYTES,
            no_call_penalty: DEFAULT_NO_CALL_PENALTY,
        }
    }
}

impl EngineConfig {
    ///
    /// Load the configured catalog, or the built-in one.
    ///
    /// A relative catalog path is resolved against `base_dir` when given.
    ///
    pub fn load_catalog(&self, base_dir: Option<&Path>) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => {
                let path = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                Catalog::try_from(path.as_path())
            }
            None => Ok(Catalog::builtin()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_vcf_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_vcf_bytes must be greater than zero".to_string(),
            ));
        }
        if self.no_call_penalty > 100 {
            return Err(ConfigError::Invalid(
                "no_call_penalty must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for EngineConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
