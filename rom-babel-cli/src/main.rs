//! rom-babel CLI
//!
//! Matches locally-named ROM files against per-system reference catalogs
//! and emits gamelist metadata for frontend use.

mod cli_types;
mod commands;
mod error;
mod review;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands};
use commands::list::run_list;
use commands::translate::{TranslateArgs, run_translate};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Translate {
            system,
            csv_dir,
            rom_list,
            threshold,
            output,
            force,
        } => run_translate(TranslateArgs {
            system,
            csv_dir,
            rom_list,
            threshold,
            output,
            force,
            quiet: cli.quiet,
        }),
        Commands::List { csv_dir } => run_list(&csv_dir),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(e.exit_code());
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !verbose {
        // Plain messages for normal CLI output; timestamps and levels only
        // help when debugging
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
