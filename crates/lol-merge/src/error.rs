//! Error types for the merge crate.

use serde_json::Value;

/// Why two partial records could not be merged.
///
/// A merge stops at the first disagreement found along the fixed traversal
/// order, so at most one error is ever reported per attempt.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MergeError {
    /// Both records hold a value at `path` and the values differ.
    #[error("conflict at {path}: {left} != {right}")]
    Conflict {
        path: String,
        left: Value,
        right: Value,
    },

    /// Elements of a keyed list at `path` cannot be matched one to one.
    #[error("ambiguous correspondence at {path}: {reason}")]
    Correspondence { path: String, reason: String },
}

impl MergeError {
    /// Dotted path of the field where the merge stopped.
    pub fn path(&self) -> &str {
        match self {
            Self::Conflict { path, .. } | Self::Correspondence { path, .. } => path,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_correspondence(&self) -> bool {
        matches!(self, Self::Correspondence { .. })
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
