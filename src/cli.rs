use clap::Parser;
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Print the base58 program id of a keypair file and save it to disk
#[derive(Parser, Debug)]
#[command(version, about = "Offline keypair program id extractor")]
pub struct Cli {
    /// Path to the keypair JSON (array of 64 byte values)
    #[arg(long, default_value = Defaults::KEYPAIR_PATH)]
    pub keypair: PathBuf,

    /// Path the program id is written to (overwritten every run)
    #[arg(long, default_value = Defaults::OUTPUT_PATH)]
    pub out: PathBuf,

    /// Only print the id, don't touch the output file
    #[arg(long)]
    pub print_only: bool,
}
