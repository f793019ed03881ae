/// Errors that can occur while loading catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog file not found: {0}")]
    NotFound(String),

    #[error("bad catalog headers (need \"Name CN\" and \"Name EN\"): found {0}")]
    MissingColumns(String),

    #[error("alias file error: {0}")]
    Alias(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn missing_columns(msg: impl Into<String>) -> Self {
        Self::MissingColumns(msg.into())
    }
}
