//! CLI type definitions: command enum and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rom-babel")]
#[command(about = "Match local ROM names against reference catalogs and emit gamelist metadata", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Match a list of ROM filenames to canonical names and write gamelist.xml
    Translate {
        /// System whose catalog to use (e.g. nes, snes, ps1); selects
        /// <csv-dir>/<system>.csv
        system: String,

        /// Directory containing per-system catalog CSV files
        #[arg(long, default_value = ".")]
        csv_dir: PathBuf,

        /// File with newline-delimited ROM filenames, or "-" for stdin
        #[arg(long, default_value = "-")]
        rom_list: String,

        /// Auto-accept cutoff: matches scoring at or above this skip review
        #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,

        /// Output metadata file
        #[arg(short, long, default_value = "gamelist.xml")]
        output: PathBuf,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },

    /// List available per-system catalogs in a directory
    List {
        /// Directory containing per-system catalog CSV files
        #[arg(long, default_value = ".")]
        csv_dir: PathBuf,
    },
}
