//!
//! The marker catalog: which markers tag which alleles of which gene, how each
//! gene is interpreted, and which gene governs each supported drug.
//!
//! The catalog is built once (either [Catalog::builtin] or loaded from a TOML
//! file) and is read-only afterwards, so a single instance can be shared by
//! reference across concurrent analyses.
//!
use std::collections::{HashMap, HashSet};
use std::fs::read_to_string;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::consts::{CARRIER_REFERENCE_LABEL, DEFAULT_MARKER_PREFIX, DEFAULT_REFERENCE_LABEL};
use crate::errors::CatalogError;
use crate::models::{
    DrugEntry, FunctionalClass, Gene, GeneModel, Marker, ThresholdScheme, WeightLabels,
    canonical_drug_name,
};

///
/// One gene: its interpretation model and the markers resolved for it.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneEntry {
    pub gene: Gene,
    pub model: GeneModel,
    #[serde(default = "default_reference_label")]
    pub reference_label: String,
    pub markers: Vec<Marker>,
}

fn default_reference_label() -> String {
    DEFAULT_REFERENCE_LABEL.to_string()
}

fn default_marker_prefix() -> String {
    DEFAULT_MARKER_PREFIX.to_string()
}

///
/// On-disk layout of a catalog file.
///
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct CatalogFile {
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,
    pub genes: Vec<GeneEntry>,
    pub drugs: Vec<DrugEntry>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    marker_prefix: String,
    genes: Vec<GeneEntry>,
    drugs: Vec<DrugEntry>,
    gene_index: HashMap<Gene, usize>,
    drug_index: HashMap<String, usize>,
    marker_index: HashMap<String, Gene>,
}

impl Catalog {
    ///
    /// Build a validated catalog.
    ///
    /// # Arguments
    /// - `marker_prefix`: prefix that identifies marker accessions in a VCF ID column
    /// - `genes`: gene entries with their markers
    /// - `drugs`: supported drugs
    ///
    pub fn new(
        marker_prefix: &str,
        mut genes: Vec<GeneEntry>,
        mut drugs: Vec<DrugEntry>,
    ) -> Result<Self, CatalogError> {
        for entry in genes.iter_mut() {
            for marker in entry.markers.iter_mut() {
                marker.drug = marker.drug.as_deref().map(canonical_drug_name);
            }
        }
        for drug in drugs.iter_mut() {
            drug.name = canonical_drug_name(&drug.name);
        }

        let mut seen_genes = HashSet::new();
        let mut seen_markers = HashSet::new();
        for entry in genes.iter() {
            if !seen_genes.insert(entry.gene) {
                return Err(CatalogError::DuplicateGene(entry.gene.to_string()));
            }
            for marker in entry.markers.iter() {
                if !seen_markers.insert(marker.id.as_str()) {
                    return Err(CatalogError::DuplicateMarker(marker.id.clone()));
                }
            }
        }

        let mut seen_drugs = HashSet::new();
        for drug in drugs.iter() {
            if !seen_drugs.insert(drug.name.as_str()) {
                return Err(CatalogError::DuplicateDrug(drug.name.clone()));
            }
            let entry = genes.iter().find(|g| g.gene == drug.gene).ok_or_else(|| {
                CatalogError::UnknownGene {
                    drug: drug.name.clone(),
                    gene: drug.gene.to_string(),
                }
            })?;
            if entry.model == GeneModel::Carrier {
                let found = entry
                    .markers
                    .iter()
                    .filter(|m| m.drug.as_deref() == Some(drug.name.as_str()))
                    .count();
                if found != 1 {
                    return Err(CatalogError::CarrierMarker {
                        gene: entry.gene.to_string(),
                        drug: drug.name.clone(),
                        found,
                    });
                }
            }
        }

        Ok(Self::index(marker_prefix, genes, drugs))
    }

    fn index(marker_prefix: &str, genes: Vec<GeneEntry>, drugs: Vec<DrugEntry>) -> Self {
        let gene_index = genes
            .iter()
            .enumerate()
            .map(|(i, g)| (g.gene, i))
            .collect();
        let drug_index = drugs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i))
            .collect();
        let marker_index = genes
            .iter()
            .flat_map(|g| g.markers.iter().map(move |m| (m.id.clone(), g.gene)))
            .collect();

        Catalog {
            marker_prefix: marker_prefix.to_string(),
            genes,
            drugs,
            gene_index,
            drug_index,
            marker_index,
        }
    }

    ///
    /// Parse a catalog from TOML text.
    ///
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Catalog::new(&file.marker_prefix, file.genes, file.drugs)
    }

    ///
    /// The default catalog covering seven genes and eleven drugs.
    ///
    pub fn builtin() -> Self {
        use FunctionalClass::*;

        let genes = vec![
            GeneEntry {
                gene: Gene::Cyp2c19,
                model: GeneModel::LossGain {
                    thresholds: ThresholdScheme::Standard,
                },
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs4244285", "*2", NoFunction),
                    Marker::new("rs4986893", "*3", NoFunction),
                    Marker::new("rs12248560", "*17", Increased),
                ],
            },
            GeneEntry {
                gene: Gene::Cyp2c9,
                model: GeneModel::RankedPair {
                    thresholds: ThresholdScheme::Capped,
                    weight_labels: None,
                },
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs1799853", "*2", Decreased),
                    Marker::new("rs1057910", "*3", NoFunction),
                ],
            },
            GeneEntry {
                gene: Gene::Cyp2d6,
                model: GeneModel::RankedPair {
                    thresholds: ThresholdScheme::Standard,
                    weight_labels: Some(WeightLabels {
                        no_function: "*4".to_string(),
                        decreased: "*10".to_string(),
                        increased: None,
                    }),
                },
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs3892097", "*4", NoFunction),
                    Marker::new("rs5030655", "*6", NoFunction),
                    Marker::new("rs1065852", "*10", Decreased),
                    Marker::new("rs28371725", "*41", Decreased),
                ],
            },
            GeneEntry {
                gene: Gene::Slco1b1,
                model: GeneModel::LossGain {
                    thresholds: ThresholdScheme::Standard,
                },
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs4149056", "*5", Decreased),
                    Marker::new("rs2306283", "*1B", Normal),
                ],
            },
            GeneEntry {
                gene: Gene::Tpmt,
                model: GeneModel::LossGain {
                    thresholds: ThresholdScheme::Standard,
                },
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs1800462", "*2", NoFunction),
                    Marker::new("rs1800460", "*3B", NoFunction),
                    Marker::new("rs1142345", "*3C", NoFunction),
                ],
            },
            GeneEntry {
                gene: Gene::Dpyd,
                model: GeneModel::DosageThreshold,
                reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs3918290", "*2A", NoFunction),
                    Marker::new("rs55886062", "*13", NoFunction),
                    Marker::new("rs67376798", "c.2846A>T", Decreased),
                ],
            },
            GeneEntry {
                gene: Gene::HlaB,
                model: GeneModel::Carrier,
                reference_label: CARRIER_REFERENCE_LABEL.to_string(),
                markers: vec![
                    Marker::new("rs2395029", "*57:01", NoFunction).keyed_to("ABACAVIR"),
                    Marker::new("rs144012689", "*15:02", NoFunction).keyed_to("CARBAMAZEPINE"),
                    Marker::new("rs9263726", "*58:01", NoFunction).keyed_to("ALLOPURINOL"),
                ],
            },
        ];

        let drugs = vec![
            DrugEntry::new("CODEINE", Gene::Cyp2d6, true),
            DrugEntry::new("TRAMADOL", Gene::Cyp2d6, true),
            DrugEntry::new("CLOPIDOGREL", Gene::Cyp2c19, true),
            DrugEntry::new("WARFARIN", Gene::Cyp2c9, false),
            DrugEntry::new("SIMVASTATIN", Gene::Slco1b1, false),
            DrugEntry::new("AZATHIOPRINE", Gene::Tpmt, false),
            DrugEntry::new("FLUOROURACIL", Gene::Dpyd, false),
            DrugEntry::new("CAPECITABINE", Gene::Dpyd, false),
            DrugEntry::new("ABACAVIR", Gene::HlaB, false),
            DrugEntry::new("CARBAMAZEPINE", Gene::HlaB, false),
            DrugEntry::new("ALLOPURINOL", Gene::HlaB, false),
        ];

        Self::index(DEFAULT_MARKER_PREFIX, genes, drugs)
    }

    pub fn marker_prefix(&self) -> &str {
        &self.marker_prefix
    }

    pub fn genes(&self) -> &[GeneEntry] {
        &self.genes
    }

    pub fn drugs(&self) -> &[DrugEntry] {
        &self.drugs
    }

    pub fn gene(&self, gene: Gene) -> Option<&GeneEntry> {
        self.gene_index.get(&gene).map(|&i| &self.genes[i])
    }

    ///
    /// Look up a drug by name. The name is canonicalized first.
    ///
    pub fn drug(&self, name: &str) -> Option<&DrugEntry> {
        self.drug_index
            .get(&canonical_drug_name(name))
            .map(|&i| &self.drugs[i])
    }

    ///
    /// Gene a marker accession belongs to.
    ///
    pub fn gene_for_marker(&self, marker_id: &str) -> Option<Gene> {
        self.marker_index.get(marker_id).copied()
    }

    ///
    /// Markers relevant to a drug, in catalog order. Carrier-status genes only
    /// contribute the marker keyed to that drug; every other gene contributes
    /// all of its markers.
    ///
    pub fn markers_for_drug(&self, name: &str) -> Option<Vec<&Marker>> {
        let drug = self.drug(name)?;
        let entry = self.gene(drug.gene)?;
        let markers = match entry.model {
            GeneModel::Carrier => entry
                .markers
                .iter()
                .filter(|m| m.drug.as_deref() == Some(drug.name.as_str()))
                .collect(),
            _ => entry.markers.iter().collect(),
        };
        Some(markers)
    }

    ///
    /// Marker accessions an uploaded file should contain to analyse a drug.
    ///
    pub fn marker_ids_for_drug(&self, name: &str) -> Option<Vec<String>> {
        self.markers_for_drug(name)
            .map(|markers| markers.iter().map(|m| m.id.clone()).collect())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

impl TryFrom<&Path> for Catalog {
    type Error = CatalogError;

    ///
    /// Load a catalog from a TOML file on disk.
    ///
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)
            .map_err(|e| CatalogError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let catalog = Catalog::from_toml_str(&toml_str)?;
        info!(
            "Loaded catalog from {} ({} genes, {} drugs)",
            path.display(),
            catalog.genes.len(),
            catalog.drugs.len()
        );
        Ok(catalog)
    }
}
