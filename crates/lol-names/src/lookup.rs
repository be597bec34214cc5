use std::fmt;

use lol_types::ChampionId;

/// The kinds of game object a numeric id can refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    Champion,
    Item,
    Rune,
    SummonerSpell,
}

impl NameKind {
    pub const ALL: [NameKind; 4] = [
        NameKind::Champion,
        NameKind::Item,
        NameKind::Rune,
        NameKind::SummonerSpell,
    ];

    /// Section name used in name table files.
    pub fn section(self) -> &'static str {
        match self {
            Self::Champion => "champions",
            Self::Item => "items",
            Self::Rune => "runes",
            Self::SummonerSpell => "summoner_spells",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// Resolves numeric game ids to display names.
///
/// Purely presentational: nothing in the merge engine consults it.
pub trait NameLookup {
    /// The name registered for `id`, if any.
    fn name(&self, kind: NameKind, id: u32) -> Option<&str>;

    fn champion(&self, id: u32) -> Option<&str> {
        self.name(NameKind::Champion, id)
    }

    fn item(&self, id: u32) -> Option<&str> {
        self.name(NameKind::Item, id)
    }

    fn rune(&self, id: u32) -> Option<&str> {
        self.name(NameKind::Rune, id)
    }

    fn summoner_spell(&self, id: u32) -> Option<&str> {
        self.name(NameKind::SummonerSpell, id)
    }

    /// The name for `id`, or `#<id>` when unknown.
    fn display(&self, kind: NameKind, id: u32) -> String {
        match self.name(kind, id) {
            Some(name) => name.to_string(),
            None => format!("#{id}"),
        }
    }

    fn champion_name(&self, id: ChampionId) -> String {
        self.display(NameKind::Champion, u32::from(id.get()))
    }
}
