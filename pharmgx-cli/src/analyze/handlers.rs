use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use pharmgx_risk::{Dispatcher, RiskResolver};
use pharmgx_vcf::read_vcf_text;

use crate::output::{FORMAT_JSON, render, write_output};
use crate::settings::load_settings;

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .context("A path to a VCF file is required.")?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(FORMAT_JSON);
    let output = matches.get_one::<String>("output").map(String::as_str);

    let (mut config, catalog) = load_settings(matches)?;
    if let Some(max) = matches.get_one::<u64>("max-vcf-bytes") {
        config.max_vcf_bytes = *max;
    }
    if let Some(penalty) = matches.get_one::<u8>("no-call-penalty") {
        config.no_call_penalty = *penalty;
    }

    let drugs: Vec<String> = match matches.get_many::<String>("drug") {
        Some(drugs) => drugs.cloned().collect(),
        None => catalog.drugs().iter().map(|d| d.name.clone()).collect(),
    };

    let text = read_vcf_text(Path::new(vcf), config.max_vcf_bytes)
        .with_context(|| format!("Failed to read {}", vcf))?;
    info!("Read {} bytes from {}", text.len(), vcf);

    let dispatcher = Dispatcher::with_resolver(&catalog, RiskResolver::from(&config));
    let results = dispatcher.interpret_many(&text, &drugs);

    for result in results.iter().filter(|r| r.decision.needs_caution()) {
        warn!(
            "{}: low confidence ({}%), review before use",
            result.drug, result.decision.confidence
        );
    }

    write_output(&render(&results, format)?, output)
}
