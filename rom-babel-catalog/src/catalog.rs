//! Per-system reference catalog loader.
//!
//! A catalog is a CSV file with (at least) a `Name CN` column holding the
//! locally-used alternate title and a `Name EN` column holding the canonical
//! English title. Column headers are located case-insensitively, so
//! `name cn` / `NAME EN` variants all work. The reference CSVs are exported
//! as `utf-8-sig`; the csv crate strips the BOM for us.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;

/// One alternate-name → canonical-name mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Locally-used alternate title (e.g. the Chinese release name).
    pub alternate: String,
    /// Canonical English title.
    pub canonical: String,
}

/// An immutable reference catalog for one system.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog from a CSV file.
    ///
    /// Malformed rows are skipped with a warning. Rows with an empty
    /// alternate or canonical cell are skipped silently. Duplicate alternate
    /// names resolve last-seen-wins, with the entry keeping its
    /// first-encountered position so tie-breaking downstream stays stable.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.is_file() {
            return Err(CatalogError::not_found(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let find_column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let (cn_col, en_col) = match (find_column("name cn"), find_column("name en")) {
            (Some(cn), Some(en)) => (cn, en),
            _ => {
                let found: Vec<&str> = headers.iter().collect();
                return Err(CatalogError::missing_columns(found.join(", ")));
            }
        };

        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Skipping malformed catalog row: {e}");
                    continue;
                }
            };

            let alternate = record.get(cn_col).unwrap_or("").trim();
            let canonical = record.get(en_col).unwrap_or("").trim();
            if alternate.is_empty() || canonical.is_empty() {
                continue;
            }

            match seen.get(alternate) {
                Some(&i) => {
                    log::debug!(
                        "Duplicate alternate \"{alternate}\": replacing \"{}\" with \"{canonical}\"",
                        entries[i].canonical
                    );
                    entries[i].canonical = canonical.to_string();
                }
                None => {
                    seen.insert(alternate.to_string(), entries.len());
                    entries.push(CatalogEntry {
                        alternate: alternate.to_string(),
                        canonical: canonical.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Build a catalog directly from entries (used by tests and tools).
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
