use std::fmt;

/// Classification of a node in the record tree.
///
/// The merge engine never inspects values to decide how to combine them;
/// each field's kind is fixed by the type that declares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A leaf value (number, string, flag, side, position).
    Scalar,
    /// A node with named fields, merged field by field.
    Record,
    /// A sequence whose position or timestamp carries meaning.
    OrderedSequence,
    /// A sequence only ever compared for equality.
    SetLike,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Record => "record",
            Self::OrderedSequence => "ordered sequence",
            Self::SetLike => "set-like sequence",
        };
        f.write_str(name)
    }
}
