//! Error types

/// Errors raised while building or reconfiguring a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id '{0}'")]
    DuplicateColumn(String),
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The requested format is not supported.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Export was requested while the export feature is off.
    #[error("Export is disabled for this table")]
    Disabled,

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading table options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options document is not valid JSON for `TableOptions`.
    #[error("Invalid table options: {0}")]
    Parse(#[from] serde_json::Error),

    /// The initial page size must be at least 1.
    #[error("Initial page size must be greater than zero")]
    ZeroPageSize,
}
