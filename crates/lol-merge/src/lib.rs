//! Merge engine for partial League of Legends match records.
//!
//! Combines two records describing the same match into one: absent values
//! are filled from the other side, equal values agree, and any disagreement
//! aborts the merge with the dotted path of the offending field.
//!
//! # Key Types
//!
//! - [`merge`] / [`merge_with_summary`] / [`merge_all`] -- Entry points
//! - [`DeepMerge`] / [`MergeContext`] -- Field-by-field record merge
//! - [`ListPolicy`] / [`ListMerge`] -- Per-element-type list policies
//! - [`Keyed`] / [`KeyValue`] -- Identity keys for list reconciliation
//! - [`MergeError`] -- Conflict and ambiguous correspondence failures

pub mod context;
pub mod error;
pub mod merge;
pub mod order;
pub mod path;
pub mod policy;
pub mod reconcile;
pub mod records;
pub mod report;
pub mod summary;

pub use context::MergeContext;
pub use error::{MergeError, MergeResult};
pub use merge::{merge, merge_all, merge_with_summary, DeepMerge};
pub use order::{sort_by_timestamp, Timestamped};
pub use path::FieldPath;
pub use policy::{ListMerge, ListPolicy};
pub use reconcile::{reconcile, KeyValue, Keyed};
pub use summary::MergeSummary;
