//! Display names for the numeric ids found in match records.
//!
//! Used only when rendering records for people; the merge engine never
//! depends on it.

pub mod error;
pub mod lookup;
pub mod table;

pub use error::{NameError, NameResult};
pub use lookup::{NameKind, NameLookup};
pub use table::NameTable;
