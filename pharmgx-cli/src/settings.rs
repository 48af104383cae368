//! Options shared by every subcommand: where the engine config and the
//! marker catalog come from.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, arg};
use log::info;

use pharmgx_core::{Catalog, EngineConfig};

pub fn with_settings_args(cmd: Command) -> Command {
    cmd.arg(arg!(--config <config>).help("Engine configuration file (TOML)"))
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("catalog")
                .help("Marker catalog file (TOML); overrides the catalog named in --config"),
        )
}

///
/// Resolve the engine configuration and the catalog from command line options.
///
/// A relative catalog path inside the config file is resolved against the
/// config file's directory.
///
pub fn load_settings(matches: &ArgMatches) -> Result<(EngineConfig, Catalog)> {
    let (config, base_dir) = match matches.get_one::<String>("config") {
        Some(path) => {
            let path = Path::new(path);
            let config = EngineConfig::try_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, path.parent().map(Path::to_path_buf))
        }
        None => (EngineConfig::default(), None),
    };

    let catalog = match matches.get_one::<String>("catalog") {
        Some(path) => Catalog::try_from(Path::new(path))
            .with_context(|| format!("Failed to load catalog {}", path))?,
        None => config
            .load_catalog(base_dir.as_deref())
            .context("Failed to load the configured catalog")?,
    };

    info!(
        "Using catalog with {} genes and {} drugs",
        catalog.genes().len(),
        catalog.drugs().len()
    );

    Ok((config, catalog))
}
