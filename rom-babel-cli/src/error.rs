use thiserror::Error;

use rom_babel_catalog::CatalogError;
use rom_babel_frontend::FrontendError;
use rom_babel_lib::ResolveError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog loading failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resolution loop failed or was aborted
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Metadata emission failed
    #[error("Frontend error: {0}")]
    Frontend(#[from] FrontendError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Configuration problems exit 2; everything else exits 1.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::Catalog(_)
            | Self::Resolve(ResolveError::EmptyCatalog)
            | Self::Resolve(ResolveError::NoInput)
            | Self::Resolve(ResolveError::InvalidThreshold(_)) => 2,
            _ => 1,
        }
    }
}
