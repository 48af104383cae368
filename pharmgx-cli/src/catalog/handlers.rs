use std::fs::read_to_string;
use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::ArgMatches;

use pharmgx_core::match_drug_in_text;

use crate::settings::load_settings;

pub fn run_markers(matches: &ArgMatches) -> Result<()> {
    let drug = matches
        .get_one::<String>("drug")
        .context("A drug name is required.")?;

    let (_, catalog) = load_settings(matches)?;
    let Some(entry) = catalog.drug(drug) else {
        bail!("{} is not in the catalog", drug);
    };
    let markers = catalog.markers_for_drug(drug).unwrap_or_default();

    let mut stdout = io::stdout().lock();
    for marker in markers {
        writeln!(
            stdout,
            "{}\t{}\t{}\t{}",
            marker.id, entry.gene, marker.allele, marker.function
        )?;
    }
    Ok(())
}

pub fn run_drugs(matches: &ArgMatches) -> Result<()> {
    let (_, catalog) = load_settings(matches)?;

    let mut stdout = io::stdout().lock();
    for drug in catalog.drugs() {
        let kind = if drug.prodrug { "prodrug" } else { "active" };
        writeln!(stdout, "{}\t{}\t{}", drug.name, drug.gene, kind)?;
    }
    Ok(())
}

pub fn run_detect(matches: &ArgMatches) -> Result<()> {
    let text = match (
        matches.get_one::<String>("text"),
        matches.get_one::<String>("file"),
    ) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        (None, None) => bail!("Provide the text to search or --file"),
    };

    let (_, catalog) = load_settings(matches)?;
    let Some(found) = match_drug_in_text(&catalog, &text) else {
        bail!("No supported drug found in the text");
    };

    writeln!(io::stdout().lock(), "{}\t{:.2}", found.drug, found.confidence)?;
    Ok(())
}
