use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_babel_catalog::{AliasMap, Catalog, CatalogIndex};
use rom_babel_frontend::{EsDeFrontend, Frontend, GameEntry};
use rom_babel_lib::{
    MatchSource, Resolution, ResolveOptions, ResolveProgress, ResolveSummary, read_file_list,
    resolve_names,
};

use crate::error::CliError;
use crate::review::ConsoleReviewer;

pub(crate) struct TranslateArgs {
    pub system: String,
    pub csv_dir: PathBuf,
    pub rom_list: String,
    pub threshold: u8,
    pub output: PathBuf,
    pub force: bool,
    pub quiet: bool,
}

pub(crate) fn run_translate(args: TranslateArgs) -> Result<(), CliError> {
    // Overwrite protection up front, before any interactive work happens
    if args.output.exists() && !args.force {
        return Err(CliError::config(format!(
            "output file {} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }

    let csv_path = args.csv_dir.join(format!("{}.csv", args.system));
    let catalog = Catalog::load(&csv_path)?;
    log::info!(
        "Loaded {} catalog entries from {}",
        catalog.len(),
        csv_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let aliases = AliasMap::load(&args.csv_dir);
    if !aliases.is_empty() {
        log::info!("Loaded {} name aliases", aliases.len());
    }
    let index = CatalogIndex::build(&catalog, aliases);

    if args.rom_list == "-" {
        log::debug!("Reading ROM list from stdin; interactive review needs --rom-list FILE");
    }
    let files = read_file_list(&args.rom_list).map_err(CliError::Resolve)?;
    log::info!("{} ROM names to resolve", files.len());

    let options = ResolveOptions {
        threshold: args.threshold,
        ..Default::default()
    };

    // Spinner for the matching pass (hidden in quiet mode)
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress = |event: ResolveProgress| match event {
        ResolveProgress::Matching {
            ref file_name,
            file_index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Matching {}", file_index + 1, total, file_name));
            pb.tick();
        }
        ResolveProgress::ReviewStart { pending } => {
            pb.finish_and_clear();
            log::info!(
                "{}",
                format!("{pending} titles need review")
                    .if_supports_color(Stdout, |t| t.yellow()),
            );
        }
        ResolveProgress::Done => {
            pb.finish_and_clear();
        }
    };

    let mut reviewer = ConsoleReviewer;
    let resolutions = resolve_names(&files, &index, &options, &mut reviewer, &progress)?;

    print_mappings(&resolutions);

    let games: Vec<GameEntry> = resolutions
        .iter()
        .filter(|r| r.accepted())
        .map(|r| GameEntry {
            rom_filename: r.file_name.clone(),
            name: r.canonical.clone(),
        })
        .collect();

    EsDeFrontend::new().write_metadata(&games, &args.output)?;

    print_summary(&resolutions, args.threshold, &args.output);
    Ok(())
}

/// One `file -> alternate -> canonical` line per resolution, for a final
/// eyeball pass over the mapping.
fn print_mappings(resolutions: &[Resolution]) {
    log::info!("");
    for r in resolutions {
        match r.source {
            MatchSource::Skipped => {
                log::info!(
                    "{} -> {}",
                    r.file_name,
                    "(skipped)".if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            _ => {
                log::info!("{} -> {} -> {}", r.file_name, r.alternate, r.canonical);
            }
        }
    }
}

fn print_summary(resolutions: &[Resolution], threshold: u8, output: &std::path::Path) {
    let summary = ResolveSummary::of(resolutions);
    let pct = |n: usize| {
        if summary.total == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", n as f64 * 100.0 / summary.total as f64)
        }
    };

    log::info!("");
    log::info!("Total: {}", summary.total);
    log::info!(
        "Auto-accepted (>= {threshold}): {} ({})",
        summary.auto_accepted,
        pct(summary.auto_accepted),
    );
    log::info!(
        "Reviewed (< {threshold}): {} ({})",
        summary.reviewed,
        pct(summary.reviewed),
    );
    log::info!("Skipped: {} ({})", summary.skipped, pct(summary.skipped));
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
