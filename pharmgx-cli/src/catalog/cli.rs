use clap::{Arg, Command, arg};

use crate::settings::with_settings_args;

pub const MARKERS_CMD: &str = "markers";
pub const DRUGS_CMD: &str = "drugs";
pub const DETECT_CMD: &str = "detect";

pub fn create_markers_cli() -> Command {
    let cmd = Command::new(MARKERS_CMD)
        .author("Databio")
        .about("List the markers a VCF file must contain to analyse a drug.")
        .arg(arg!(--drug <drug>).required(true));
    with_settings_args(cmd)
}

pub fn create_drugs_cli() -> Command {
    let cmd = Command::new(DRUGS_CMD)
        .author("Databio")
        .about("List supported drugs with their gene.");
    with_settings_args(cmd)
}

pub fn create_detect_cli() -> Command {
    let cmd = Command::new(DETECT_CMD)
        .author("Databio")
        .about("Find which supported drug is named in free text, e.g. text read off a drug label.")
        .arg(Arg::new("text").help("Text to search; read from --file when omitted"))
        .arg(arg!(--file <file>).help("Read the text from a file"));
    with_settings_args(cmd)
}
