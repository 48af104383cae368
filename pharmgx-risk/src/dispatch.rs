//! Per-drug analysis pipeline: extract, interpret, resolve.

use log::{debug, warn};
use rayon::prelude::*;

use pharmgx_core::Catalog;
use pharmgx_core::models::{GeneInterpretation, Phenotype, canonical_drug_name};
use pharmgx_phenotype::interpret_drug;
use pharmgx_vcf::extract_for_drug;

use crate::models::{ExtractionSummary, Interpretation, OutcomeStatus};
use crate::resolver::RiskResolver;

///
/// Runs requests against a shared, read-only catalog. Holds no request
/// state, so one dispatcher can serve any number of threads.
///
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'a> {
    catalog: &'a Catalog,
    resolver: RiskResolver,
}

impl<'a> Dispatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Dispatcher {
            catalog,
            resolver: RiskResolver::default(),
        }
    }

    pub fn with_resolver(catalog: &'a Catalog, resolver: RiskResolver) -> Self {
        Dispatcher { catalog, resolver }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    ///
    /// Analyse one drug against VCF text.
    ///
    /// # Arguments
    /// - `text`: full VCF content
    /// - `drug`: drug name in any case
    ///
    /// # Returns
    /// - an [Interpretation]; unknown drugs and files without the drug's
    ///   markers produce distinguished outcomes rather than errors
    ///
    pub fn interpret(&self, text: &str, drug: &str) -> Interpretation {
        let name = canonical_drug_name(drug);

        let Some(entry) = self.catalog.drug(&name) else {
            warn!("{} is not in the catalog", name);
            return Interpretation {
                decision: self.resolver.not_implemented(&name),
                drug: name,
                status: OutcomeStatus::NotImplemented,
                genotype: None,
                extraction: None,
            };
        };

        // catalog validation guarantees the marker subset exists
        let (Some(markers), Some(report)) = (
            self.catalog.markers_for_drug(&name),
            extract_for_drug(self.catalog, text, &name),
        ) else {
            return Interpretation {
                decision: self.resolver.not_implemented(&name),
                drug: name,
                status: OutcomeStatus::NotImplemented,
                genotype: None,
                extraction: None,
            };
        };

        let extraction = ExtractionSummary::from_report(self.catalog, &report, markers.len());
        let genotype = match interpret_drug(self.catalog, &name, &report.calls) {
            Some(genotype) => genotype,
            None => GeneInterpretation::not_determined(entry.gene),
        };

        if genotype.phenotype == Phenotype::GenotypeNotDetermined {
            if report.is_empty() {
                warn!(
                    "No {} markers found for {}; genotype not determined",
                    entry.gene, name
                );
            } else {
                warn!(
                    "{} of {} {} markers found for {} but none has a usable genotype; \
                     genotype not determined",
                    extraction.markers_found, extraction.markers_requested, entry.gene, name
                );
            }
            return Interpretation {
                decision: self.resolver.not_determined(entry),
                drug: name,
                status: OutcomeStatus::GenotypeNotDetermined,
                genotype: Some(genotype),
                extraction: Some(extraction),
            };
        }

        debug!(
            "{} -> {} ({} of {} markers found)",
            name,
            entry.gene,
            extraction.markers_found,
            extraction.markers_requested
        );

        let decision = self.resolver.resolve(entry, &genotype);

        Interpretation {
            drug: name,
            status: OutcomeStatus::Interpreted,
            genotype: Some(genotype),
            decision,
            extraction: Some(extraction),
        }
    }

    ///
    /// Analyse several drugs against the same VCF text in parallel.
    ///
    /// Results are returned in the order of `drugs`.
    ///
    pub fn interpret_many<S>(&self, text: &str, drugs: &[S]) -> Vec<Interpretation>
    where
        S: AsRef<str> + Sync,
    {
        drugs
            .par_iter()
            .map(|drug| self.interpret(text, drug.as_ref()))
            .collect()
    }
}
