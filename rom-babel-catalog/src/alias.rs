//! Community alias table.
//!
//! The catalog directory may carry a `name_alias(Chinese).json` file mapping
//! well-known shorthand to the default catalog spelling:
//!
//! ```json
//! {
//!   "Final Fantasy": {
//!     "default": "最终幻想",
//!     "alias": ["太空战士"],
//!     "others": ["FF"],
//!     "alias-en": ["Final Fantasy"]
//!   }
//! }
//! ```
//!
//! Every alias (and the default itself) resolves to the default spelling, so
//! a query written with a regional nickname lands on the catalog's wording
//! before fuzzy scoring runs.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::normalize::normalize_title;

/// Filename of the alias table inside a catalog directory.
pub const ALIAS_FILE_NAME: &str = "name_alias(Chinese).json";

#[derive(Debug, Deserialize)]
pub(crate) struct AliasRecord {
    default: Option<String>,
    #[serde(default)]
    alias: Vec<String>,
    #[serde(default)]
    others: Vec<String>,
    #[serde(default, rename = "alias-en")]
    alias_en: Vec<String>,
}

/// Normalized-alias → default-spelling lookup.
///
/// Stored as a vector sorted longest-alias-first so substring replacement is
/// deterministic. All keys and values are normalized and lowercased.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: Vec<(String, String)>,
}

impl AliasMap {
    /// Load the alias table from a catalog directory.
    ///
    /// A missing file yields an empty map. An unreadable or malformed file
    /// logs a warning and also yields an empty map; aliases are an
    /// enhancement, never a hard requirement.
    pub fn load(catalog_dir: &Path) -> Self {
        let path = catalog_dir.join(ALIAS_FILE_NAME);
        if !path.is_file() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Could not read alias file {}: {e}", path.display());
                return Self::default();
            }
        };

        let records: HashMap<String, AliasRecord> = match serde_json::from_str(&content) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Malformed alias file {}: {e}", path.display());
                return Self::default();
            }
        };

        Self::from_records(records)
    }

    pub(crate) fn from_records(records: HashMap<String, AliasRecord>) -> Self {
        let mut entries = Vec::new();
        for record in records.into_values() {
            let Some(default) = record.default.filter(|d| !d.is_empty()) else {
                continue;
            };
            let target = key_of(&default);

            entries.push((target.clone(), target.clone()));
            for alias in record
                .alias
                .iter()
                .chain(&record.others)
                .chain(&record.alias_en)
            {
                if !alias.is_empty() {
                    entries.push((key_of(alias), target.clone()));
                }
            }
        }

        // Longest alias first, then lexicographic: substring replacement
        // picks the most specific alias, deterministically.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(&b.0)));
        entries.dedup_by(|a, b| a.0 == b.0);

        Self { entries }
    }

    /// Apply aliases to a normalized, lowercased query string.
    ///
    /// Exact match replaces the whole string; otherwise the first (longest)
    /// alias found as a substring is replaced in place.
    pub fn apply(&self, s: &str) -> String {
        if self.entries.is_empty() {
            return s.to_string();
        }

        for (alias, target) in &self.entries {
            if s == alias {
                return target.clone();
            }
        }
        for (alias, target) in &self.entries {
            if let Some(pos) = s.find(alias.as_str()) {
                let mut out = String::with_capacity(s.len());
                out.push_str(&s[..pos]);
                out.push_str(target);
                out.push_str(&s[pos + alias.len()..]);
                return out;
            }
        }

        s.to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key_of(s: &str) -> String {
    normalize_title(s).to_lowercase()
}
