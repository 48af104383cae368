//! Genotype extraction from VCF text.
//!
//! Scans VCF text line by line, keeps only records whose identifier is one of
//! the requested markers, and reads the first sample's genotype. Lines that
//! cannot be parsed are skipped and counted, never fatal: variant files from
//! different callers are formatted inconsistently.

use fxhash::FxHashSet;
use log::debug;
use serde::Serialize;

use pharmgx_core::Catalog;
use pharmgx_core::consts::NO_CALL;
use pharmgx_core::models::{Gene, GenotypeCall};
use pharmgx_core::models::genotype::normalize_genotype;

/// Fixed VCF columns before FORMAT.
const MIN_COLUMNS: usize = 8;
const FORMAT_COLUMN: &str = "FORMAT";
const GENOTYPE_KEY: &str = "GT";

/// Genotype calls found in a VCF plus bookkeeping about the scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    pub calls: Vec<GenotypeCall>,
    pub lines_scanned: usize,
    pub data_lines: usize,
    pub malformed_lines: usize,
    /// A `#CHROM` header declaring a FORMAT column was seen
    pub has_genotype_column: bool,
}

impl ExtractionReport {
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// First call recorded for a marker, if any.
    pub fn call_for(&self, marker_id: &str) -> Option<&GenotypeCall> {
        self.calls.iter().find(|c| c.marker_id == marker_id)
    }

    /// Catalog genes with at least one call, in order of first appearance.
    pub fn genes_covered(&self, catalog: &Catalog) -> Vec<Gene> {
        let mut genes: Vec<Gene> = Vec::new();
        for gene in self
            .calls
            .iter()
            .filter_map(|c| catalog.gene_for_marker(&c.marker_id))
        {
            if !genes.contains(&gene) {
                genes.push(gene);
            }
        }
        genes
    }
}

/// Build the membership set for a list of marker accessions.
pub fn marker_set<I, S>(ids: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Into::into).collect()
}

/// Column layout declared by the `#CHROM` header line.
#[derive(Debug, Clone, Copy, Default)]
struct HeaderLayout {
    format_idx: Option<usize>,
}

impl HeaderLayout {
    fn from_header(line: &str) -> Self {
        let format_idx = line
            .trim_start_matches('#')
            .split('\t')
            .position(|col| col.trim() == FORMAT_COLUMN);
        HeaderLayout { format_idx }
    }
}

/// Pick the marker accession out of a VCF ID column.
///
/// The column may hold several `;`-separated ids; the first one carrying the
/// marker prefix wins. Otherwise the raw column is used unless it is empty or
/// the `.` placeholder.
pub fn resolve_marker_id<'a>(id_column: &'a str, marker_prefix: &str) -> Option<&'a str> {
    let prefixed = id_column
        .split(';')
        .map(str::trim)
        .find(|token| token.starts_with(marker_prefix));
    if prefixed.is_some() {
        return prefixed;
    }

    let raw = id_column.trim();
    if raw.is_empty() || raw == "." {
        None
    } else {
        Some(raw)
    }
}

/// Read the GT sub-field of the first sample, normalized, or the no-call token.
fn first_sample_genotype(fields: &[&str], layout: HeaderLayout) -> String {
    let Some(format_idx) = layout.format_idx else {
        return NO_CALL.to_string();
    };
    let (Some(format), Some(sample)) = (fields.get(format_idx), fields.get(format_idx + 1)) else {
        return NO_CALL.to_string();
    };
    let Some(gt_idx) = format.split(':').position(|key| key == GENOTYPE_KEY) else {
        return NO_CALL.to_string();
    };

    match sample.split(':').nth(gt_idx).map(str::trim) {
        Some(gt) if !gt.is_empty() && gt != "." => normalize_genotype(gt),
        _ => NO_CALL.to_string(),
    }
}

/// Extract genotype calls for the requested markers from VCF text.
///
/// # Arguments
/// - `text`: full VCF content
/// - `marker_ids`: accessions to keep
/// - `marker_prefix`: prefix that marks an accession in the ID column, e.g. `rs`
///
/// # Returns
/// An [ExtractionReport]; markers absent from the text are simply missing from `calls`.
pub fn extract_genotype_calls(
    text: &str,
    marker_ids: &FxHashSet<String>,
    marker_prefix: &str,
) -> ExtractionReport {
    let mut report = ExtractionReport::default();
    let mut layout = HeaderLayout::default();

    if marker_ids.is_empty() {
        return report;
    }

    for (line_no, raw_line) in text.lines().enumerate() {
        report.lines_scanned += 1;
        let line = raw_line.trim_end_matches('\r');

        if line.starts_with("##") {
            continue;
        }
        if line.starts_with('#') {
            layout = HeaderLayout::from_header(line);
            report.has_genotype_column = layout.format_idx.is_some();
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        report.data_lines += 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_COLUMNS {
            debug!(
                "Skipping line {}: expected at least {} columns, found {}",
                line_no + 1,
                MIN_COLUMNS,
                fields.len()
            );
            report.malformed_lines += 1;
            continue;
        }

        let Some(marker_id) = resolve_marker_id(fields[2], marker_prefix) else {
            continue;
        };
        if !marker_ids.contains(marker_id) {
            continue;
        }

        let pos = match fields[1].trim().parse::<u64>() {
            Ok(pos) => pos,
            Err(_) => {
                debug!("Skipping line {}: invalid POS `{}`", line_no + 1, fields[1]);
                report.malformed_lines += 1;
                continue;
            }
        };

        report.calls.push(GenotypeCall {
            marker_id: marker_id.to_string(),
            chrom: fields[0].to_string(),
            pos,
            ref_allele: fields[3].to_string(),
            alt_allele: fields[4].to_string(),
            genotype: first_sample_genotype(&fields, layout),
        });
    }

    debug!(
        "Scanned {} lines: {} data lines, {} malformed, {} marker calls",
        report.lines_scanned,
        report.data_lines,
        report.malformed_lines,
        report.calls.len()
    );

    report
}

/// Extract the calls relevant to one drug, using the catalog's marker subset.
///
/// Returns `None` when the drug is not in the catalog.
pub fn extract_for_drug(catalog: &Catalog, text: &str, drug: &str) -> Option<ExtractionReport> {
    let ids = catalog.marker_ids_for_drug(drug)?;
    let set = marker_set(ids);
    Some(extract_genotype_calls(text, &set, catalog.marker_prefix()))
}
