//! Conflict reporting: turn a disagreement at the current path into a
//! [`MergeError`].

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::MergeError;
use crate::path::FieldPath;

/// Snapshot a value for inclusion in an error.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

/// Two present values disagree at `path`.
pub fn conflict<T: Serialize + ?Sized>(path: &FieldPath, left: &T, right: &T) -> MergeError {
    let error = MergeError::Conflict {
        path: path.to_string(),
        left: to_value(left),
        right: to_value(right),
    };
    debug!(%path, %error, "merge conflict");
    error
}

/// The keyed list at `path` cannot be matched one to one.
pub fn correspondence(path: &FieldPath, reason: impl Into<String>) -> MergeError {
    let error = MergeError::Correspondence {
        path: path.to_string(),
        reason: reason.into(),
    };
    debug!(%path, %error, "ambiguous correspondence");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conflict_captures_path_and_values() {
        let mut path = FieldPath::new();
        path.push_field("duration");
        let err = conflict(&path, &1800.5, &1801.0);
        assert_eq!(
            err,
            MergeError::Conflict {
                path: "duration".into(),
                left: json!(1800.5),
                right: json!(1801.0),
            }
        );
    }

    #[test]
    fn sequences_are_reported_whole() {
        let mut path = FieldPath::new();
        path.push_field("bans");
        let err = conflict(&path, &[1, 2][..], &[1, 3][..]);
        match err {
            MergeError::Conflict { left, right, .. } => {
                assert_eq!(left, json!([1, 2]));
                assert_eq!(right, json!([1, 3]));
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn correspondence_keeps_reason() {
        let mut path = FieldPath::new();
        path.push_field("players");
        let err = correspondence(&path, "duplicate championId=3");
        assert_eq!(err.path(), "players");
        assert!(err.to_string().contains("duplicate championId=3"));
    }
}
