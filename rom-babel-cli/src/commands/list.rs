use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_babel_catalog::Catalog;

use crate::error::CliError;

/// List the per-system catalog CSVs in a directory with entry counts.
pub(crate) fn run_list(csv_dir: &Path) -> Result<(), CliError> {
    if !csv_dir.is_dir() {
        return Err(CliError::config(format!(
            "catalog directory not found: {}",
            csv_dir.display()
        )));
    }

    let mut systems: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(csv_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                systems.push(stem.to_string());
            }
        }
    }
    systems.sort();

    if systems.is_empty() {
        log::warn!("No catalog CSV files in {}", csv_dir.display());
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Catalogs in {}", csv_dir.display()).if_supports_color(Stdout, |t| t.bold()),
    );
    for system in systems {
        let path = csv_dir.join(format!("{system}.csv"));
        match Catalog::load(&path) {
            Ok(catalog) => log::info!(
                "  {} {}",
                system.if_supports_color(Stdout, |t| t.cyan()),
                format!("({} entries)", catalog.len()).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            Err(e) => log::warn!("  {system} (unreadable: {e})"),
        }
    }

    Ok(())
}
