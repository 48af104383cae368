mod analyze;
mod catalog;
mod output;
mod settings;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "pharmgx";
    pub const BIN_NAME: &str = "pharmgx";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Pharmacogenomic risk interpretation: genotype calls from a VCF file to guideline-based drug recommendations.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages (overridden by RUST_LOG)"),
        )
        .subcommand(analyze::cli::create_analyze_cli())
        .subcommand(catalog::cli::create_markers_cli())
        .subcommand(catalog::cli::create_drugs_cli())
        .subcommand(catalog::cli::create_detect_cli())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // ANALYZE
        //
        Some((analyze::cli::ANALYZE_CMD, matches)) => {
            analyze::handlers::run_analyze(matches)?;
        }

        //
        // CATALOG QUERIES
        //
        Some((catalog::cli::MARKERS_CMD, matches)) => {
            catalog::handlers::run_markers(matches)?;
        }
        Some((catalog::cli::DRUGS_CMD, matches)) => {
            catalog::handlers::run_drugs(matches)?;
        }
        Some((catalog::cli::DETECT_CMD, matches)) => {
            catalog::handlers::run_detect(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
