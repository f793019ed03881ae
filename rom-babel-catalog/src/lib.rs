//! Reference catalog loading and fuzzy title matching.
//!
//! A catalog is a per-system CSV mapping locally-used alternate titles
//! (typically Chinese release names) to canonical English titles. This crate
//! loads catalogs, normalizes titles across script/width/numeral variants,
//! resolves community aliases, and scores queries against the catalog with
//! an edit-distance similarity in [0, 100].

pub mod alias;
pub mod catalog;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod numerals;

pub use alias::{ALIAS_FILE_NAME, AliasMap};
pub use catalog::{Catalog, CatalogEntry};
pub use error::CatalogError;
pub use matcher::{CatalogIndex, MatchCandidate};
pub use normalize::normalize_title;
