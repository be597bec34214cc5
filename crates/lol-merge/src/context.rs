//! Traversal state shared by every step of a merge.
//!
//! A [`MergeContext`] tracks the path of the node being merged and the
//! summary counters. Record impls call one method per declared field, which
//! both fixes the traversal order and names the policy used for that field.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{MergeError, MergeResult};
use crate::merge::DeepMerge;
use crate::path::FieldPath;
use crate::policy::ListMerge;
use crate::report;
use crate::summary::MergeSummary;

/// State of a single merge walk.
#[derive(Debug, Default)]
pub struct MergeContext {
    path: FieldPath,
    summary: MergeSummary,
}

impl MergeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the node currently being merged.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn summary(&self) -> &MergeSummary {
        &self.summary
    }

    pub(crate) fn summary_mut(&mut self) -> &mut MergeSummary {
        &mut self.summary
    }

    pub fn into_summary(self) -> MergeSummary {
        self.summary
    }

    /// Merge an optional scalar field.
    ///
    /// An absent side yields to the present one; two present values must be
    /// equal.
    pub fn scalar<T>(
        &mut self,
        field: &'static str,
        base: &Option<T>,
        incoming: &Option<T>,
    ) -> MergeResult<Option<T>>
    where
        T: Clone + PartialEq + Serialize,
    {
        match (base, incoming) {
            (Some(a), Some(b)) if a == b => {
                self.summary.scalars_agreed += 1;
                Ok(Some(a.clone()))
            }
            (Some(a), Some(b)) => Err(self.conflict_at(field, a, b)),
            (Some(value), None) | (None, Some(value)) => {
                self.summary.scalars_one_sided += 1;
                Ok(Some(value.clone()))
            }
            (None, None) => Ok(None),
        }
    }

    /// Merge a scalar field that is always present.
    pub fn required<T>(&mut self, field: &'static str, base: &T, incoming: &T) -> MergeResult<T>
    where
        T: Clone + PartialEq + Serialize,
    {
        if base == incoming {
            self.summary.scalars_agreed += 1;
            Ok(base.clone())
        } else {
            Err(self.conflict_at(field, base, incoming))
        }
    }

    /// Merge a nested record field by field.
    pub fn record<T: DeepMerge>(
        &mut self,
        field: &'static str,
        base: &T,
        incoming: &T,
    ) -> MergeResult<T> {
        self.path.push_field(field);
        let result = base.deep_merge(incoming, self);
        self.path.pop();
        result
    }

    /// Merge a list-shaped field using the policy of its element type.
    pub fn list<T: ListMerge>(
        &mut self,
        field: &'static str,
        base: &[T],
        incoming: &[T],
    ) -> MergeResult<Vec<T>> {
        self.path.push_field(field);
        let result = T::merge_list(self, base, incoming);
        if let Ok(merged) = &result {
            if !base.is_empty() && !incoming.is_empty() {
                debug!(
                    path = %self.path,
                    policy = %T::POLICY,
                    kind = %T::KIND,
                    base = base.len(),
                    incoming = incoming.len(),
                    merged = merged.len(),
                    "merged list"
                );
            }
        }
        self.path.pop();
        result
    }

    /// Merge two list elements that matched on `key = value`.
    pub(crate) fn element<T: DeepMerge>(
        &mut self,
        key: &'static str,
        value: impl fmt::Display,
        base: &T,
        incoming: &T,
    ) -> MergeResult<T> {
        self.path.push_key(key, value);
        let result = base.deep_merge(incoming, self);
        self.path.pop();
        result
    }

    /// Report a disagreement between two values at the current path.
    pub fn conflict<T: Serialize + ?Sized>(&self, left: &T, right: &T) -> MergeError {
        report::conflict(&self.path, left, right)
    }

    /// Report an ambiguous correspondence at the current path.
    pub fn correspondence(&self, reason: impl Into<String>) -> MergeError {
        report::correspondence(&self.path, reason)
    }

    fn conflict_at<T: Serialize + ?Sized>(
        &mut self,
        field: &'static str,
        left: &T,
        right: &T,
    ) -> MergeError {
        self.path.push_field(field);
        let error = self.conflict(left, right);
        self.path.pop();
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_yields_to_present() {
        let mut ctx = MergeContext::new();
        assert_eq!(ctx.scalar("kills", &Some(3), &None).unwrap(), Some(3));
        assert_eq!(ctx.scalar("kills", &None, &Some(4)).unwrap(), Some(4));
        assert_eq!(ctx.scalar::<u32>("kills", &None, &None).unwrap(), None);
        assert_eq!(ctx.summary().scalars_one_sided, 2);
    }

    #[test]
    fn zero_is_a_real_value() {
        let mut ctx = MergeContext::new();
        let err = ctx.scalar("kills", &Some(0), &Some(2)).unwrap_err();
        assert_eq!(
            err,
            MergeError::Conflict {
                path: "kills".into(),
                left: json!(0),
                right: json!(2),
            }
        );
    }

    #[test]
    fn false_is_a_real_value() {
        let mut ctx = MergeContext::new();
        assert!(ctx.scalar("firstBlood", &Some(false), &Some(true)).is_err());
        assert_eq!(
            ctx.scalar("firstBlood", &Some(false), &None).unwrap(),
            Some(false)
        );
    }

    #[test]
    fn equal_values_agree() {
        let mut ctx = MergeContext::new();
        let merged = ctx
            .scalar("patch", &Some("10.11".to_string()), &Some("10.11".to_string()))
            .unwrap();
        assert_eq!(merged.as_deref(), Some("10.11"));
        assert_eq!(ctx.summary().scalars_agreed, 1);
    }

    #[test]
    fn path_is_restored_after_field() {
        let mut ctx = MergeContext::new();
        let _ = ctx.scalar("duration", &Some(1.0), &Some(2.0));
        assert_eq!(ctx.path().to_string(), "");
    }

    #[test]
    fn required_fields_must_match() {
        let mut ctx = MergeContext::new();
        assert_eq!(ctx.required("timestamp", &60.0, &60.0).unwrap(), 60.0);
        let err = ctx.required("timestamp", &60.0, &61.0).unwrap_err();
        assert_eq!(err.path(), "timestamp");
    }
}
