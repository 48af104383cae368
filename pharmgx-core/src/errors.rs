use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Can't read catalog file: {0}")]
    FileReadError(String),

    #[error("Drug {drug} references gene {gene} which has no catalog entry")]
    UnknownGene { drug: String, gene: String },

    #[error("Marker {0} is declared more than once")]
    DuplicateMarker(String),

    #[error("Gene {0} is declared more than once")]
    DuplicateGene(String),

    #[error("Drug {0} is declared more than once")]
    DuplicateDrug(String),

    #[error("Carrier gene {gene} needs exactly one marker keyed to {drug}, found {found}")]
    CarrierMarker {
        gene: String,
        drug: String,
        found: usize,
    },

    #[error("Unknown gene symbol: {0}")]
    UnknownGeneSymbol(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenotypeError {
    #[error("Haploid genotype `{0}` is not valid for a diploid marker")]
    Haploid(String),

    #[error("Genotype `{0}` carries more than two alleles")]
    Polyploid(String),

    #[error("Genotype `{0}` contains a non-numeric allele index")]
    Unparseable(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
