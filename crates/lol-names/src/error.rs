use std::path::PathBuf;

/// Errors raised while loading a name table.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// The table file could not be read.
    #[error("failed to read name table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid TOML or has the wrong shape.
    #[error("invalid name table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A key in one of the sections is not a numeric id.
    #[error("invalid id '{key}' in [{section}]")]
    InvalidId { section: &'static str, key: String },
}

/// Convenience alias for name table results.
pub type NameResult<T> = Result<T, NameError>;
