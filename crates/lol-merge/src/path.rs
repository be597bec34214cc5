//! Dotted field paths locating a node of the record tree.
//!
//! Record fields are joined with `.`; elements of keyed lists are suffixed
//! with the key that matched them, e.g.
//! `teams.BLUE.players[championId=1].endOfGameStats.kills`.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Field(&'static str),
    Key { name: &'static str, value: String },
}

/// A path from the root of a match record to the node being merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The root path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into a named field.
    pub fn push_field(&mut self, name: &'static str) {
        self.segments.push(Segment::Field(name));
    }

    /// Descend into the list element identified by `name = value`.
    pub fn push_key(&mut self, name: &'static str, value: impl fmt::Display) {
        self.segments.push(Segment::Key {
            name,
            value: value.to_string(),
        });
    }

    /// Return to the parent node.
    pub fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Key { name, value } => write!(f, "[{name}={value}]")?,
            }
        }
        Ok(())
    }
}
