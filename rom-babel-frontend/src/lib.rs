//! Frontend metadata generation.
//!
//! Turns accepted name resolutions into a metadata document a gaming
//! frontend can consume. ES-DE style `gamelist.xml` is the one format
//! implemented; the trait keeps the seam open for others.

pub mod error;
pub mod esde;

pub use error::FrontendError;
pub use esde::{EsDeFrontend, render_gamelist};

use std::path::Path;

/// One game record destined for the metadata document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Original ROM filename, extension included. Downstream scrapers use
    /// this to associate existing local assets.
    pub rom_filename: String,
    /// Canonical display name.
    pub name: String,
}

/// Trait for gaming frontend metadata generators.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// Write the metadata document for a set of games.
    ///
    /// An empty game list still produces a valid (empty) document. Output is
    /// deterministic: the same entry list yields byte-identical files.
    fn write_metadata(&self, games: &[GameEntry], output: &Path) -> Result<(), FrontendError>;
}
