//! Name resolution pipeline: input parsing and the fuzzy-match /
//! human-review loop.
//!
//! The heavy lifting (catalog loading, normalization, scoring) lives in
//! `rom-babel-catalog`; this crate owns the per-item state machine and the
//! operator seam.

pub mod error;
pub mod input;
pub mod resolve;

pub use error::ResolveError;
pub use input::{parse_file_list, read_file_list, stem_of};
pub use resolve::{
    MatchSource, Resolution, ResolveOptions, ResolveProgress, ResolveSummary, ReviewCandidate,
    ReviewDecision, ReviewRequest, Reviewer, resolve_names,
};
