use log::warn;

use pharmgx_core::models::{CallStatus, GenotypeCall, Marker, MarkerFinding};

///
/// Pair each catalog marker with its genotype call.
///
/// The first call for a marker wins when a file repeats a record. Markers
/// without a record are `NotTyped`; records whose genotype is missing or
/// invalid become `NoCall` with zero variant alleles.
///
/// # Arguments
/// - `markers`: catalog markers in catalog order
/// - `calls`: calls extracted from the input
///
/// # Returns
/// - one finding per marker, in the order of `markers`
///
pub fn observe_markers(markers: &[&Marker], calls: &[GenotypeCall]) -> Vec<MarkerFinding> {
    markers
        .iter()
        .map(|marker| {
            let call = calls.iter().find(|c| c.marker_id == marker.id);
            let mut finding = MarkerFinding {
                marker_id: marker.id.clone(),
                allele: marker.allele.clone(),
                function: marker.function,
                genotype: call.map(|c| c.genotype.clone()),
                variant_alleles: 0,
                status: CallStatus::NotTyped,
                note: None,
            };

            let Some(call) = call else {
                return finding;
            };

            match call.variant_allele_count() {
                Ok(Some(count)) => {
                    finding.variant_alleles = count.min(2);
                    finding.status = CallStatus::Called;
                }
                Ok(None) => finding.status = CallStatus::NoCall,
                Err(e) => {
                    warn!("Treating {} as a no-call: {}", marker.id, e);
                    finding.status = CallStatus::NoCall;
                    finding.note = Some(e.to_string());
                }
            }
            finding
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pharmgx_core::models::FunctionalClass;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn call(id: &str, genotype: &str) -> GenotypeCall {
        GenotypeCall {
            marker_id: id.to_string(),
            chrom: "chr10".to_string(),
            pos: 1,
            ref_allele: "G".to_string(),
            alt_allele: "A".to_string(),
            genotype: genotype.to_string(),
        }
    }

    #[fixture]
    fn markers() -> Vec<Marker> {
        vec![
            Marker::new("rs4244285", "*2", FunctionalClass::NoFunction),
            Marker::new("rs4986893", "*3", FunctionalClass::NoFunction),
            Marker::new("rs12248560", "*17", FunctionalClass::Increased),
        ]
    }

    #[rstest]
    fn test_statuses(markers: Vec<Marker>) {
        let refs: Vec<&Marker> = markers.iter().collect();
        let calls = vec![call("rs12248560", "./."), call("rs4244285", "0/1")];

        let findings = observe_markers(&refs, &calls);
        let summary: Vec<(&str, CallStatus, u8)> = findings
            .iter()
            .map(|f| (f.marker_id.as_str(), f.status, f.variant_alleles))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("rs4244285", CallStatus::Called, 1),
                ("rs4986893", CallStatus::NotTyped, 0),
                ("rs12248560", CallStatus::NoCall, 0),
            ]
        );
        assert_eq!(findings[1].genotype, None);
    }

    #[rstest]
    fn test_first_record_wins(markers: Vec<Marker>) {
        let refs: Vec<&Marker> = markers.iter().take(1).collect();
        let calls = vec![call("rs4244285", "1/1"), call("rs4244285", "0/0")];

        let findings = observe_markers(&refs, &calls);
        assert_eq!(findings[0].variant_alleles, 2);
    }

    #[rstest]
    #[case("1")]
    #[case("0/1/1")]
    #[case("A/G")]
    fn test_invalid_genotype_becomes_annotated_no_call(markers: Vec<Marker>, #[case] gt: &str) {
        let refs: Vec<&Marker> = markers.iter().take(1).collect();
        let findings = observe_markers(&refs, &[call("rs4244285", gt)]);

        assert_eq!(findings[0].status, CallStatus::NoCall);
        assert_eq!(findings[0].variant_alleles, 0);
        assert_eq!(findings[0].note.is_some(), true);
    }

    #[rstest]
    fn test_half_called_genotype(markers: Vec<Marker>) {
        let refs: Vec<&Marker> = markers.iter().take(1).collect();
        let findings = observe_markers(&refs, &[call("rs4244285", "./1")]);

        assert_eq!(findings[0].status, CallStatus::Called);
        assert_eq!(findings[0].variant_alleles, 1);
    }
}
