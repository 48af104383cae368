//! Load VCF text into memory, plain or gzip/bgzf compressed.
//!
//! The engine itself works on an already-materialized buffer; this is the
//! thin I/O adapter the command line uses in front of it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::VcfError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode raw file bytes into VCF text, inflating gzip content when present.
///
/// # Arguments
/// - `bytes`: file content as uploaded
/// - `max_bytes`: cap on the decoded size
pub fn decode_vcf_bytes(bytes: &[u8], max_bytes: u64) -> Result<String, VcfError> {
    let decoded = if bytes.starts_with(&GZIP_MAGIC) {
        let mut buf = Vec::new();
        MultiGzDecoder::new(bytes)
            .take(max_bytes + 1)
            .read_to_end(&mut buf)?;
        buf
    } else {
        bytes.to_vec()
    };

    if decoded.len() as u64 > max_bytes {
        return Err(VcfError::TooLarge {
            size: decoded.len() as u64,
            max: max_bytes,
        });
    }

    String::from_utf8(decoded).map_err(|_| VcfError::NotUtf8)
}

/// Read a VCF file from disk into a string.
pub fn read_vcf_text(path: &Path, max_bytes: u64) -> Result<String, VcfError> {
    let file = File::open(path)
        .map_err(|e| VcfError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let size = file.metadata()?.len();
    if size > max_bytes {
        return Err(VcfError::TooLarge {
            size,
            max: max_bytes,
        });
    }

    let mut bytes = Vec::with_capacity(size as usize);
    file.take(max_bytes + 1).read_to_end(&mut bytes)?;
    decode_vcf_bytes(&bytes, max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    const VCF: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\nchr10\t94781859\trs4244285\tG\tA\t.\tPASS\t.\tGT\t0/1\n";

    #[rstest]
    fn test_plain_bytes() {
        let text = decode_vcf_bytes(VCF.as_bytes(), 1024).unwrap();
        assert_eq!(text, VCF);
    }

    #[rstest]
    fn test_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(VCF.as_bytes()).unwrap();
        let gz = encoder.finish().unwrap();

        let text = decode_vcf_bytes(&gz, 1024).unwrap();
        assert_eq!(text, VCF);
    }

    #[rstest]
    fn test_decoded_size_cap() {
        let result = decode_vcf_bytes(VCF.as_bytes(), 10);
        assert_eq!(matches!(result, Err(VcfError::TooLarge { max: 10, .. })), true);
    }

    #[rstest]
    fn test_invalid_utf8() {
        let result = decode_vcf_bytes(&[0xff, 0xfe, 0x00], 1024);
        assert_eq!(matches!(result, Err(VcfError::NotUtf8)), true);
    }

    #[rstest]
    fn test_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.vcf.gz");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(VCF.as_bytes()).unwrap();
            encoder.finish().unwrap();
        }

        let text = read_vcf_text(&path, 1024).unwrap();
        assert_eq!(text, VCF);
    }

    #[rstest]
    fn test_missing_file() {
        let result = read_vcf_text(Path::new("no/such/file.vcf"), 1024);
        assert_eq!(matches!(result, Err(VcfError::FileReadError(_))), true);
    }
}
