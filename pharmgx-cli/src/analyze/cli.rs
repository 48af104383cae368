use clap::{Arg, ArgAction, Command, arg, value_parser};

use crate::output::{FORMAT_JSON, FORMATS};
use crate::settings::with_settings_args;

pub const ANALYZE_CMD: &str = "analyze";

pub fn create_analyze_cli() -> Command {
    let cmd = Command::new(ANALYZE_CMD)
        .author("Databio")
        .about("Interpret a VCF file for one or more drugs and report the risk decisions.")
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("VCF file, plain or gzip compressed"),
        )
        .arg(
            Arg::new("drug")
                .long("drug")
                .short('d')
                .action(ArgAction::Append)
                .help("Drug to analyse; repeat for several. Defaults to every catalog drug"),
        )
        .arg(
            arg!(--format <format>)
                .value_parser(FORMATS)
                .default_value(FORMAT_JSON),
        )
        .arg(arg!(--output <output>).help("Write the report here instead of stdout"))
        .arg(
            arg!(--"max-vcf-bytes" <bytes>)
                .value_parser(value_parser!(u64))
                .help("Override the configured input size cap"),
        )
        .arg(
            arg!(--"no-call-penalty" <points>)
                .value_parser(value_parser!(u8).range(0..=100))
                .help("Override the configured confidence penalty per uncalled marker"),
        );
    with_settings_args(cmd)
}
