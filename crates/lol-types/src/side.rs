use std::fmt;

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// One of the two sides of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    /// Both sides, in wire order.
    pub const ALL: [Side; 2] = [Side::Blue, Side::Red];

    /// The wire name (`BLUE` or `RED`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two teams of a match, keyed by side.
///
/// A fixed pair rather than a map: there are always exactly two teams and
/// they are never merged against each other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    #[serde(rename = "BLUE", default, skip_serializing_if = "crate::is_default")]
    pub blue: Team,
    #[serde(rename = "RED", default, skip_serializing_if = "crate::is_default")]
    pub red: Team,
}

impl Teams {
    pub fn get(&self, side: Side) -> &Team {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        }
    }

    /// Both teams in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &Team)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_wire_names() {
        assert_eq!(serde_json::to_string(&Side::Blue).unwrap(), "\"BLUE\"");
        assert_eq!(serde_json::from_str::<Side>("\"RED\"").unwrap(), Side::Red);
    }

    #[test]
    fn unknown_side_fails_to_decode() {
        assert!(serde_json::from_str::<Side>("\"PURPLE\"").is_err());
        assert_eq!(Side::Red.to_string(), "RED");
    }

    #[test]
    fn teams_iterate_in_wire_order() {
        let teams = Teams::default();
        let sides: Vec<Side> = teams.iter().map(|(side, _)| side).collect();
        assert_eq!(sides, vec![Side::Blue, Side::Red]);
    }

    #[test]
    fn empty_teams_are_omitted() {
        let json = serde_json::to_value(Teams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
