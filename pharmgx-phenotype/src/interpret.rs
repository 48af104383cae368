use log::debug;

use pharmgx_core::models::{GeneInterpretation, GenotypeCall, Marker};
use pharmgx_core::{Catalog, GeneEntry};

use crate::classifier::classifier_for;
use crate::observe::observe_markers;

///
/// Interpret one gene from its catalog entry and the extracted calls.
///
/// # Arguments
/// - `entry`: catalog gene entry holding the model configuration
/// - `markers`: the subset of the gene's markers to consider, in catalog order
/// - `calls`: genotype calls from the input
///
pub fn interpret_gene(
    entry: &GeneEntry,
    markers: &[&Marker],
    calls: &[GenotypeCall],
) -> GeneInterpretation {
    let findings = observe_markers(markers, calls);
    let classification = classifier_for(entry).classify(&findings);

    debug!(
        "{}: {} -> {}",
        entry.gene, classification.diplotype, classification.phenotype
    );

    GeneInterpretation {
        gene: entry.gene,
        diplotype: classification.diplotype,
        phenotype: classification.phenotype,
        activity_level: classification.phenotype.activity_level(),
        activity_score: classification.activity_score,
        findings,
    }
}

///
/// Interpret the gene behind a drug.
///
/// # Returns
/// - `None` when the catalog does not know the drug
/// - the genotype-not-determined placeholder when none of the drug's markers
///   carries a usable genotype; the findings are kept so callers can see
///   which markers were missing or uncalled
/// - the gene interpretation otherwise
///
pub fn interpret_drug(
    catalog: &Catalog,
    drug: &str,
    calls: &[GenotypeCall],
) -> Option<GeneInterpretation> {
    let entry = catalog.drug(drug).and_then(|d| catalog.gene(d.gene))?;
    let markers = catalog.markers_for_drug(drug)?;

    let interpretation = interpret_gene(entry, &markers, calls);
    if interpretation.has_called_marker() {
        return Some(interpretation);
    }

    debug!("{}: no called markers for {}", entry.gene, drug);
    Some(GeneInterpretation {
        findings: interpretation.findings,
        ..GeneInterpretation::not_determined(entry.gene)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pharmgx_core::models::{Gene, MetabolizerStatus, Phenotype};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn call(id: &str, genotype: &str) -> GenotypeCall {
        GenotypeCall {
            marker_id: id.to_string(),
            chrom: "chr1".to_string(),
            pos: 1,
            ref_allele: "C".to_string(),
            alt_allele: "T".to_string(),
            genotype: genotype.to_string(),
        }
    }

    #[rstest]
    fn test_unknown_drug(catalog: Catalog) {
        assert_eq!(interpret_drug(&catalog, "aspirin", &[]), None);
    }

    #[rstest]
    fn test_no_calls_is_not_determined(catalog: Catalog) {
        let result = interpret_drug(&catalog, "warfarin", &[call("rs4244285", "1/1")]).unwrap();
        assert_eq!(result.phenotype, Phenotype::GenotypeNotDetermined);
        assert_eq!(result.diplotype, "Unknown");
        assert_eq!(result.findings.len(), 2);
        assert_eq!(result.uncalled_markers(), 2);
    }

    #[rstest]
    #[case(vec![call("rs1799853", "./."), call("rs1057910", "./.")])]
    #[case(vec![call("rs1799853", "1"), call("rs1057910", "./.")])]
    fn test_only_uncalled_records_is_not_determined(
        catalog: Catalog,
        #[case] calls: Vec<GenotypeCall>,
    ) {
        let result = interpret_drug(&catalog, "WARFARIN", &calls).unwrap();

        assert_eq!(result.gene, Gene::Cyp2c9);
        assert_eq!(result.phenotype, Phenotype::GenotypeNotDetermined);
        assert_eq!(result.activity_score, None);
        assert_eq!(result.has_called_marker(), false);
        assert_eq!(
            result.findings.iter().map(|f| f.marker_id.as_str()).collect::<Vec<_>>(),
            vec!["rs1799853", "rs1057910"]
        );
    }

    #[rstest]
    fn test_activity_level_follows_phenotype(catalog: Catalog) {
        let calls = vec![call("rs4244285", "1/1"), call("rs4986893", "0/0")];
        let result = interpret_drug(&catalog, " Clopidogrel ", &calls).unwrap();

        assert_eq!(result.gene, Gene::Cyp2c19);
        assert_eq!(result.diplotype, "*2/*2");
        assert_eq!(
            result.phenotype,
            Phenotype::Metabolizer(MetabolizerStatus::Poor)
        );
        assert_eq!(result.activity_level, 0);
        assert_eq!(result.findings.len(), 3);
    }

    #[rstest]
    fn test_carrier_uses_drug_marker_only(catalog: Catalog) {
        // rs2395029 belongs to abacavir, not carbamazepine
        let calls = vec![call("rs2395029", "0/1"), call("rs144012689", "0/0")];
        let result = interpret_drug(&catalog, "carbamazepine", &calls).unwrap();

        assert_eq!(result.gene, Gene::HlaB);
        assert_eq!(result.diplotype, "Other/Other");
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].marker_id, "rs144012689");
    }
}
