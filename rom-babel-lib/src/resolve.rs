//! The resolution loop: match every input filename against the catalog,
//! auto-accept confident matches, and route the rest through a reviewer.
//!
//! The reviewer is a synchronous request/response seam. The CLI plugs in an
//! interactive console prompt; tests plug in a scripted double, so the whole
//! state machine runs without real interaction.

use rom_babel_catalog::CatalogIndex;

use crate::error::ResolveError;
use crate::input::stem_of;

/// Options controlling the resolution loop.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Auto-accept cutoff: matches scoring at or above this never prompt.
    pub threshold: u8,
    /// How many candidates a review request carries.
    pub candidate_limit: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            threshold: 90,
            candidate_limit: 6,
        }
    }
}

/// How a resolution reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// Score met the threshold; no prompt.
    Auto,
    /// Operator confirmed or overrode during review.
    Manual,
    /// Operator skipped the item; excluded from output.
    Skipped,
}

/// Terminal state for one input item. Exactly one per input filename,
/// in input order.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Original filename, extension included.
    pub file_name: String,
    /// Query stem derived from the filename.
    pub query: String,
    /// Matched catalog alternate name (empty for manual overrides).
    pub alternate: String,
    /// Accepted canonical name (empty when skipped).
    pub canonical: String,
    /// Best-match confidence in [0, 100].
    pub score: u8,
    pub source: MatchSource,
}

impl Resolution {
    /// Accepted items make it into the output document.
    pub fn accepted(&self) -> bool {
        !matches!(self.source, MatchSource::Skipped)
    }
}

/// One candidate presented to the reviewer.
#[derive(Debug, Clone)]
pub struct ReviewCandidate {
    /// Catalog alternate name (the side the query was scored against).
    pub alternate: String,
    /// Canonical name this candidate maps to.
    pub canonical: String,
    pub score: u8,
}

/// A request for one operator decision.
#[derive(Debug)]
pub struct ReviewRequest<'a> {
    pub file_name: &'a str,
    pub query: &'a str,
    /// Best candidates, score-descending. Never empty.
    pub candidates: &'a [ReviewCandidate],
    /// Pending items left to review, this one included.
    pub remaining: usize,
}

/// Operator decision for one pending item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Accept the top candidate.
    AcceptBest,
    /// Accept candidate at this index in the request's candidate list.
    AcceptCandidate(usize),
    /// Use a free-text canonical name instead.
    Override(String),
    /// Leave this item out of the output.
    Skip,
}

/// Synchronous operator boundary for low-confidence matches.
pub trait Reviewer {
    fn review(&mut self, request: &ReviewRequest<'_>) -> Result<ReviewDecision, ResolveError>;
}

/// Progress events for the matching pass, for spinners and logging.
#[derive(Debug, Clone)]
pub enum ResolveProgress {
    Matching {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    ReviewStart {
        pending: usize,
    },
    Done,
}

/// Counts for the end-of-run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub total: usize,
    pub auto_accepted: usize,
    pub reviewed: usize,
    pub skipped: usize,
}

impl ResolveSummary {
    pub fn of(resolutions: &[Resolution]) -> Self {
        let mut summary = Self {
            total: resolutions.len(),
            ..Self::default()
        };
        for r in resolutions {
            match r.source {
                MatchSource::Auto => summary.auto_accepted += 1,
                MatchSource::Manual => summary.reviewed += 1,
                MatchSource::Skipped => {
                    summary.reviewed += 1;
                    summary.skipped += 1;
                }
            }
        }
        summary
    }
}

/// Resolve every input filename to a terminal state.
///
/// Two passes: first every item is matched in input order and confident
/// matches auto-accept; then pending items are reviewed, also in input
/// order, one prompt each. Decisions are final. Fails fast before touching
/// any item when the catalog is empty, the input list is empty, or the
/// threshold is out of range.
pub fn resolve_names(
    files: &[String],
    index: &CatalogIndex,
    options: &ResolveOptions,
    reviewer: &mut dyn Reviewer,
    progress: &dyn Fn(ResolveProgress),
) -> Result<Vec<Resolution>, ResolveError> {
    if options.threshold > 100 {
        return Err(ResolveError::InvalidThreshold(options.threshold));
    }
    if index.is_empty() {
        return Err(ResolveError::EmptyCatalog);
    }
    if files.is_empty() {
        return Err(ResolveError::NoInput);
    }

    let total = files.len();
    let mut resolutions: Vec<Resolution> = Vec::with_capacity(total);
    let mut pending: Vec<usize> = Vec::new();

    for (i, file_name) in files.iter().enumerate() {
        progress(ResolveProgress::Matching {
            file_name: file_name.clone(),
            file_index: i,
            total,
        });

        let query = stem_of(file_name);
        let key = index.query_key(&query);
        // Non-empty index, so best_match always yields a candidate.
        let best = index
            .best_match(&key)
            .ok_or(ResolveError::EmptyCatalog)?;
        let entry = index.entry(best.entry_index);

        if best.score >= options.threshold {
            log::debug!(
                "auto-accept {file_name} -> {} (score {})",
                entry.canonical,
                best.score
            );
            resolutions.push(Resolution {
                file_name: file_name.clone(),
                query,
                alternate: entry.alternate.clone(),
                canonical: entry.canonical.clone(),
                score: best.score,
                source: MatchSource::Auto,
            });
        } else {
            pending.push(resolutions.len());
            resolutions.push(Resolution {
                file_name: file_name.clone(),
                query,
                alternate: entry.alternate.clone(),
                canonical: entry.canonical.clone(),
                score: best.score,
                source: MatchSource::Skipped, // placeholder until reviewed
            });
        }
    }

    if !pending.is_empty() {
        progress(ResolveProgress::ReviewStart {
            pending: pending.len(),
        });
    }

    let pending_total = pending.len();
    // At least one candidate so AcceptBest always has a target
    let candidate_limit = options.candidate_limit.max(1);
    for (done, &ri) in pending.iter().enumerate() {
        let candidates = candidates_for(index, &resolutions[ri], candidate_limit);
        let request = ReviewRequest {
            file_name: &resolutions[ri].file_name,
            query: &resolutions[ri].query,
            candidates: &candidates,
            remaining: pending_total - done,
        };
        let decision = reviewer.review(&request)?;

        let resolution = &mut resolutions[ri];
        match decision {
            ReviewDecision::AcceptBest => {
                let top = &candidates[0];
                resolution.alternate = top.alternate.clone();
                resolution.canonical = top.canonical.clone();
                resolution.source = MatchSource::Manual;
            }
            ReviewDecision::AcceptCandidate(i) => {
                let chosen = candidates.get(i).unwrap_or(&candidates[0]);
                resolution.alternate = chosen.alternate.clone();
                resolution.canonical = chosen.canonical.clone();
                resolution.source = MatchSource::Manual;
            }
            ReviewDecision::Override(name) => {
                resolution.alternate = String::new();
                resolution.canonical = name;
                resolution.source = MatchSource::Manual;
            }
            ReviewDecision::Skip => {
                resolution.canonical = String::new();
                resolution.source = MatchSource::Skipped;
            }
        }
    }

    progress(ResolveProgress::Done);
    Ok(resolutions)
}

fn candidates_for(
    index: &CatalogIndex,
    resolution: &Resolution,
    limit: usize,
) -> Vec<ReviewCandidate> {
    let key = index.query_key(&resolution.query);
    index
        .top_candidates(&key, limit)
        .into_iter()
        .map(|c| {
            let entry = index.entry(c.entry_index);
            ReviewCandidate {
                alternate: entry.alternate.clone(),
                canonical: entry.canonical.clone(),
                score: c.score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rom_babel_catalog::{AliasMap, Catalog, CatalogEntry};

    fn index_of(pairs: &[(&str, &str)]) -> CatalogIndex {
        let entries = pairs
            .iter()
            .map(|(alt, canon)| CatalogEntry {
                alternate: alt.to_string(),
                canonical: canon.to_string(),
            })
            .collect();
        CatalogIndex::build(&Catalog::from_entries(entries), AliasMap::default())
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Scripted reviewer double: feeds canned decisions, records requests.
    struct ScriptedReviewer {
        decisions: Vec<ReviewDecision>,
        requests: Vec<(String, String, Vec<ReviewCandidate>, usize)>,
    }

    impl ScriptedReviewer {
        fn new(decisions: Vec<ReviewDecision>) -> Self {
            Self {
                decisions,
                requests: Vec::new(),
            }
        }
    }

    impl Reviewer for ScriptedReviewer {
        fn review(&mut self, request: &ReviewRequest<'_>) -> Result<ReviewDecision, ResolveError> {
            self.requests.push((
                request.file_name.to_string(),
                request.query.to_string(),
                request.candidates.to_vec(),
                request.remaining,
            ));
            if self.decisions.is_empty() {
                return Err(ResolveError::Aborted);
            }
            Ok(self.decisions.remove(0))
        }
    }

    fn no_progress(_: ResolveProgress) {}

    #[test]
    fn test_auto_accept_never_prompts() {
        let index = index_of(&[("ff7", "Final Fantasy VII")]);
        let mut reviewer = ScriptedReviewer::new(vec![]);
        let options = ResolveOptions {
            threshold: 80,
            ..Default::default()
        };

        let resolutions = resolve_names(
            &files(&["FF7.sfc"]),
            &index,
            &options,
            &mut reviewer,
            &no_progress,
        )
        .unwrap();

        assert!(reviewer.requests.is_empty());
        assert_eq!(resolutions.len(), 1);
        assert_eq!(resolutions[0].canonical, "Final Fantasy VII");
        assert_eq!(resolutions[0].score, 100);
        assert_eq!(resolutions[0].source, MatchSource::Auto);
        assert!(resolutions[0].accepted());
    }

    #[test]
    fn test_below_threshold_prompts_exactly_once() {
        let index = index_of(&[("Final Fantasy VII", "Final Fantasy VII")]);
        let mut reviewer = ScriptedReviewer::new(vec![ReviewDecision::AcceptBest]);
        let options = ResolveOptions {
            threshold: 80,
            ..Default::default()
        };

        let resolutions = resolve_names(
            &files(&["Final Fantasy VI.sfc"]),
            &index,
            &options,
            &mut reviewer,
            &no_progress,
        )
        .unwrap();

        assert_eq!(reviewer.requests.len(), 1);
        let (file, query, candidates, remaining) = &reviewer.requests[0];
        assert_eq!(file, "Final Fantasy VI.sfc");
        assert_eq!(query, "Final Fantasy VI");
        assert_eq!(candidates[0].alternate, "Final Fantasy VII");
        assert_eq!(*remaining, 1);
        assert!(resolutions[0].score < 80);
        assert_eq!(resolutions[0].source, MatchSource::Manual);
        assert_eq!(resolutions[0].canonical, "Final Fantasy VII");
    }

    #[test]
    fn test_override_and_skip() {
        let index = index_of(&[("某游戏", "Some Game")]);
        let mut reviewer = ScriptedReviewer::new(vec![
            ReviewDecision::Override("My Custom Name".into()),
            ReviewDecision::Skip,
        ]);
        let options = ResolveOptions {
            threshold: 90,
            ..Default::default()
        };

        let resolutions = resolve_names(
            &files(&["unknown one.nes", "unknown two.nes"]),
            &index,
            &options,
            &mut reviewer,
            &no_progress,
        )
        .unwrap();

        assert_eq!(resolutions[0].canonical, "My Custom Name");
        assert_eq!(resolutions[0].source, MatchSource::Manual);
        assert!(resolutions[0].accepted());

        assert_eq!(resolutions[1].source, MatchSource::Skipped);
        assert!(!resolutions[1].accepted());
        assert!(resolutions[1].canonical.is_empty());
    }

    #[test]
    fn test_accept_numbered_candidate() {
        let index = index_of(&[("魂斗罗一", "Contra"), ("魂斗罗二", "Super Contra")]);
        let mut reviewer = ScriptedReviewer::new(vec![ReviewDecision::AcceptCandidate(1)]);
        // Threshold 100 forces review for anything short of an exact match
        let options = ResolveOptions {
            threshold: 100,
            ..Default::default()
        };

        let resolutions = resolve_names(
            &files(&["魂斗罗二代.nes"]),
            &index,
            &options,
            &mut reviewer,
            &no_progress,
        )
        .unwrap();

        let candidates = &reviewer.requests[0].2;
        assert_eq!(resolutions[0].canonical, candidates[1].canonical);
        assert_eq!(resolutions[0].source, MatchSource::Manual);
    }

    #[test]
    fn test_empty_catalog_fails_before_any_prompt() {
        let index = index_of(&[]);
        let mut reviewer = ScriptedReviewer::new(vec![ReviewDecision::AcceptBest]);

        let err = resolve_names(
            &files(&["a.nes"]),
            &index,
            &ResolveOptions::default(),
            &mut reviewer,
            &no_progress,
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::EmptyCatalog));
        assert!(reviewer.requests.is_empty());
    }

    #[test]
    fn test_empty_input_fails() {
        let index = index_of(&[("a", "A")]);
        let mut reviewer = ScriptedReviewer::new(vec![]);
        let err = resolve_names(
            &[],
            &index,
            &ResolveOptions::default(),
            &mut reviewer,
            &no_progress,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::NoInput));
    }

    #[test]
    fn test_abort_propagates() {
        let index = index_of(&[("某游戏", "Some Game")]);
        let mut reviewer = ScriptedReviewer::new(vec![]); // aborts on first request
        let err = resolve_names(
            &files(&["unrelated name.nes"]),
            &index,
            &ResolveOptions::default(),
            &mut reviewer,
            &no_progress,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::Aborted));
    }

    #[test]
    fn test_one_resolution_per_item_in_input_order() {
        let index = index_of(&[("ff7", "Final Fantasy VII"), ("某游戏", "Some Game")]);
        let mut reviewer = ScriptedReviewer::new(vec![ReviewDecision::Skip]);
        let options = ResolveOptions {
            threshold: 80,
            ..Default::default()
        };

        let input = files(&["zz unmatched.nes", "ff7.sfc"]);
        let resolutions =
            resolve_names(&input, &index, &options, &mut reviewer, &no_progress).unwrap();

        assert_eq!(resolutions.len(), input.len());
        assert_eq!(resolutions[0].file_name, "zz unmatched.nes");
        assert_eq!(resolutions[1].file_name, "ff7.sfc");

        let summary = ResolveSummary::of(&resolutions);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.auto_accepted, 1);
        assert_eq!(summary.reviewed, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_invalid_threshold() {
        let index = index_of(&[("a", "A")]);
        let mut reviewer = ScriptedReviewer::new(vec![]);
        let options = ResolveOptions {
            threshold: 101,
            ..Default::default()
        };
        let err = resolve_names(
            &files(&["a.nes"]),
            &index,
            &options,
            &mut reviewer,
            &no_progress,
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidThreshold(101)));
    }

    #[test]
    fn test_review_remaining_counts_down() {
        let index = index_of(&[("某游戏", "Some Game")]);
        let mut reviewer =
            ScriptedReviewer::new(vec![ReviewDecision::Skip, ReviewDecision::Skip]);

        resolve_names(
            &files(&["first unmatched.nes", "second unmatched.nes"]),
            &index,
            &ResolveOptions::default(),
            &mut reviewer,
            &no_progress,
        )
        .unwrap();

        assert_eq!(reviewer.requests[0].3, 2);
        assert_eq!(reviewer.requests[1].3, 1);
    }
}
