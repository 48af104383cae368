use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcfError {
    #[error("Can't read VCF file: {0}")]
    FileReadError(String),

    #[error("VCF is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: u64, max: u64 },

    #[error("VCF content is not valid UTF-8 text")]
    NotUtf8,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
