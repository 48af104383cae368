//!
//! Match supported drug names in free text, e.g. the text recovered from a
//! drug label. Text recognition itself happens upstream.
//!
use crate::catalog::Catalog;
use crate::consts::{DRUG_MATCH_EXACT_FLOOR, DRUG_MATCH_MAX_CONFIDENCE, DRUG_MATCH_MIN_CONFIDENCE};

#[derive(Clone, Debug, PartialEq)]
pub struct DrugMatch {
    /// Canonical drug key
    pub drug: String,
    pub occurrences: usize,
    /// 0.0-1.0, rounded to two decimals
    pub confidence: f64,
}

///
/// Find the catalog drug mentioned most often in `text`.
///
/// Ties go to the longer drug name. Confidence is the share of the text
/// covered by the matches, raised to a floor for any exact match and
/// clamped to the accepted range.
///
pub fn match_drug_in_text(catalog: &Catalog, text: &str) -> Option<DrugMatch> {
    let upper = text.trim().to_uppercase();
    if upper.is_empty() {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for drug in catalog.drugs() {
        let count = upper.matches(drug.name.as_str()).count();
        if count == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((name, best_count)) => {
                count > best_count || (count == best_count && drug.name.len() > name.len())
            }
        };
        if better {
            best = Some((drug.name.as_str(), count));
        }
    }

    let (drug, occurrences) = best?;
    let total_len = upper.chars().count().max(1) as f64;
    let raw = (drug.len() * occurrences) as f64 / total_len;
    let confidence = raw
        .max(DRUG_MATCH_EXACT_FLOOR)
        .clamp(DRUG_MATCH_MIN_CONFIDENCE, DRUG_MATCH_MAX_CONFIDENCE);

    Some(DrugMatch {
        drug: drug.to_string(),
        occurrences,
        confidence: (confidence * 100.0).round() / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_label_text_matches_drug() {
        let catalog = Catalog::builtin();
        let found = match_drug_in_text(&catalog, "Codeine Phosphate Tablets 30 mg").unwrap();
        assert_eq!(found.drug, "CODEINE");
        assert_eq!(found.confidence, 0.8);
    }

    #[rstest]
    fn test_most_frequent_drug_wins() {
        let catalog = Catalog::builtin();
        let text = "warfarin sodium. Take warfarin daily. Not codeine.";
        let found = match_drug_in_text(&catalog, text).unwrap();
        assert_eq!(found.drug, "WARFARIN");
        assert_eq!(found.occurrences, 2);
    }

    #[rstest]
    fn test_bare_name_caps_confidence() {
        let catalog = Catalog::builtin();
        let found = match_drug_in_text(&catalog, "ABACAVIR").unwrap();
        assert_eq!(found.confidence, 0.99);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("ibuprofen 200mg")]
    fn test_no_match(#[case] text: &str) {
        let catalog = Catalog::builtin();
        assert_eq!(match_drug_in_text(&catalog, text), None);
    }
}
