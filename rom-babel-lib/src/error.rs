use thiserror::Error;

/// Errors that can occur while resolving names.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// I/O error reading the input list
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog has no usable entries for this system
    #[error("catalog has no entries; check the system name and CSV file")]
    EmptyCatalog,

    /// Nothing to resolve
    #[error("no input filenames provided")]
    NoInput,

    /// Threshold outside 0-100
    #[error("confidence threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(u8),

    /// Operator ended the review session before it completed
    #[error("review aborted by operator")]
    Aborted,
}
