use std::fmt;

use serde::{Deserialize, Serialize};

/// Riot API champion identifier.
///
/// Used both as a player identity key and as the element type of team bans.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionId(pub u16);

impl ChampionId {
    /// The raw numeric id.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for ChampionId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Debug for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChampionId({})", self.0)
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position on the map, in Riot's coordinates.
///
/// Horizontal and vertical distance from the bottom-left corner; roughly
/// `-120..=14870` on both axes. A position is compared as a whole: two
/// sources reporting different coordinates for the same moment conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}
