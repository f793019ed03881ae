//! Fuzzy title matching against a loaded catalog.
//!
//! Builds an in-memory index from catalog entries with a precomputed match
//! key per entry (normalized, lowercased, alias-resolved, numeral-folded).
//! Lookups are pure functions of (query, index): no I/O, no hidden state.

use std::collections::BTreeSet;

use crate::alias::AliasMap;
use crate::catalog::{Catalog, CatalogEntry};
use crate::numerals::{fold_numerals, sequel_tokens};
use crate::normalize::normalize_title;

/// A catalog entry scored against a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Index into the catalog's entry list.
    pub entry_index: usize,
    /// Similarity in [0, 100]; 100 means exact modulo
    /// case/whitespace/width/numeral differences.
    pub score: u8,
}

struct IndexedEntry {
    entry: CatalogEntry,
    key: String,
    sequels: BTreeSet<u8>,
}

/// An indexed view of a catalog for fuzzy lookups.
pub struct CatalogIndex {
    entries: Vec<IndexedEntry>,
    aliases: AliasMap,
}

impl CatalogIndex {
    /// Build an index from a loaded catalog and alias map.
    pub fn build(catalog: &Catalog, aliases: AliasMap) -> Self {
        let entries = catalog
            .entries()
            .iter()
            .map(|entry| {
                let key = match_key(&entry.alternate, &aliases);
                let sequels = sequel_tokens(&key);
                IndexedEntry {
                    entry: entry.clone(),
                    key,
                    sequels,
                }
            })
            .collect();

        Self { entries, aliases }
    }

    /// Reduce a raw query (filename stem) to its match key.
    pub fn query_key(&self, raw: &str) -> String {
        match_key(raw, &self.aliases)
    }

    /// Score a query key against every entry and return the single best
    /// candidate. Ties break to the first-encountered catalog entry; this is
    /// a deliberate, documented policy, not incidental iteration order.
    ///
    /// Returns `None` only when the index is empty.
    pub fn best_match(&self, query_key: &str) -> Option<MatchCandidate> {
        let query_sequels = sequel_tokens(query_key);
        let mut best: Option<MatchCandidate> = None;

        for (i, indexed) in self.entries.iter().enumerate() {
            let score = similarity(query_key, &query_sequels, indexed);
            let beats = match &best {
                Some(b) => score > b.score,
                None => true,
            };
            if beats {
                best = Some(MatchCandidate {
                    entry_index: i,
                    score,
                });
            }
        }

        best
    }

    /// The best `limit` candidates, score-descending. Stable for ties, so
    /// equal-scored entries keep catalog order.
    pub fn top_candidates(&self, query_key: &str, limit: usize) -> Vec<MatchCandidate> {
        let query_sequels = sequel_tokens(query_key);
        let mut scored: Vec<MatchCandidate> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, indexed)| MatchCandidate {
                entry_index: i,
                score: similarity(query_key, &query_sequels, indexed),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }

    /// Catalog entry behind a candidate.
    pub fn entry(&self, index: usize) -> &CatalogEntry {
        &self.entries[index].entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reduce a title to its match key: normalize, lowercase, resolve aliases,
/// fold numerals, drop whitespace. Whitespace is dropped last so alias and
/// numeral word boundaries still see it.
fn match_key(raw: &str, aliases: &AliasMap) -> String {
    fold_numerals(&aliases.apply(&normalize_title(raw).to_lowercase()))
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Penalty factor applied when query and candidate both carry sequel
/// numbers and the sets are disjoint. Keeps "Final Fantasy 6" from
/// auto-accepting against "Final Fantasy 7".
const SEQUEL_MISMATCH_NUM: u32 = 3;
const SEQUEL_MISMATCH_DEN: u32 = 5;

fn similarity(query_key: &str, query_sequels: &BTreeSet<u8>, indexed: &IndexedEntry) -> u8 {
    if query_key == indexed.key {
        return 100;
    }
    if query_key.is_empty() || indexed.key.is_empty() {
        return 0;
    }

    let ratio = strsim::normalized_levenshtein(query_key, &indexed.key);
    let mut score = (ratio * 100.0).round() as u32;

    let mismatch = !query_sequels.is_empty()
        && !indexed.sequels.is_empty()
        && query_sequels.is_disjoint(&indexed.sequels);
    if mismatch {
        score = score * SEQUEL_MISMATCH_NUM / SEQUEL_MISMATCH_DEN;
    }

    // 100 is reserved for key equality; near-identical keys cap at 99.
    score.min(99) as u8
}
