use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{NameError, NameResult};
use crate::lookup::{NameKind, NameLookup};

/// Sections as they appear on disk: TOML keys are always strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTable {
    champions: BTreeMap<String, String>,
    items: BTreeMap<String, String>,
    runes: BTreeMap<String, String>,
    summoner_spells: BTreeMap<String, String>,
}

/// An in-memory id to name table, one map per [`NameKind`].
///
/// ```toml
/// [champions]
/// 1 = "Annie"
/// 103 = "Ahri"
///
/// [summoner_spells]
/// 4 = "Flash"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameTable {
    champions: BTreeMap<u32, String>,
    items: BTreeMap<u32, String>,
    runes: BTreeMap<u32, String>,
    summoner_spells: BTreeMap<u32, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(text: &str) -> NameResult<Self> {
        let raw: RawTable = toml::from_str(text)?;
        let mut table = Self::new();
        for (kind, section) in [
            (NameKind::Champion, raw.champions),
            (NameKind::Item, raw.items),
            (NameKind::Rune, raw.runes),
            (NameKind::SummonerSpell, raw.summoner_spells),
        ] {
            for (key, name) in section {
                let id = key.trim().parse::<u32>().map_err(|_| NameError::InvalidId {
                    section: kind.section(),
                    key: key.clone(),
                })?;
                table.insert(kind, id, name);
            }
        }
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> NameResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), names = table.len(), "loaded name table");
        Ok(table)
    }

    /// Register a name, replacing any previous one for the same id.
    pub fn insert(&mut self, kind: NameKind, id: u32, name: impl Into<String>) {
        self.section_mut(kind).insert(id, name.into());
    }

    /// Total number of names across all kinds.
    pub fn len(&self) -> usize {
        NameKind::ALL.iter().map(|k| self.section(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn section(&self, kind: NameKind) -> &BTreeMap<u32, String> {
        match kind {
            NameKind::Champion => &self.champions,
            NameKind::Item => &self.items,
            NameKind::Rune => &self.runes,
            NameKind::SummonerSpell => &self.summoner_spells,
        }
    }

    fn section_mut(&mut self, kind: NameKind) -> &mut BTreeMap<u32, String> {
        match kind {
            NameKind::Champion => &mut self.champions,
            NameKind::Item => &mut self.items,
            NameKind::Rune => &mut self.runes,
            NameKind::SummonerSpell => &mut self.summoner_spells,
        }
    }
}

impl NameLookup for NameTable {
    fn name(&self, kind: NameKind, id: u32) -> Option<&str> {
        self.section(kind).get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lol_types::ChampionId;
    use std::io::Write;

    const TABLE: &str = r#"
[champions]
1 = "Annie"
103 = "Ahri"

[items]
3089 = "Rabadon's Deathcap"

[summoner_spells]
4 = "Flash"
"#;

    #[test]
    fn parses_all_sections() {
        let table = NameTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.champion(103), Some("Ahri"));
        assert_eq!(table.item(3089), Some("Rabadon's Deathcap"));
        assert_eq!(table.summoner_spell(4), Some("Flash"));
        assert_eq!(table.rune(8112), None);
    }

    #[test]
    fn unknown_ids_render_as_hash_id() {
        let table = NameTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.champion_name(ChampionId(1)), "Annie");
        assert_eq!(table.champion_name(ChampionId(999)), "#999");
        assert_eq!(NameTable::new().display(NameKind::Item, 1001), "#1001");
    }

    #[test]
    fn empty_text_is_an_empty_table() {
        let table = NameTable::from_toml_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_key_is_rejected() {
        let err = NameTable::from_toml_str("[runes]\nconqueror = \"Conqueror\"\n").unwrap_err();
        match err {
            NameError::InvalidId { section, key } => {
                assert_eq!(section, "runes");
                assert_eq!(key, "conqueror");
            }
            other => panic!("expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            NameTable::from_toml_str("[champions\n"),
            Err(NameError::Parse(_))
        ));
    }

    #[test]
    fn insert_replaces() {
        let mut table = NameTable::new();
        table.insert(NameKind::Champion, 1, "Anie");
        table.insert(NameKind::Champion, 1, "Annie");
        assert_eq!(table.champion(1), Some("Annie"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        let table = NameTable::load(file.path()).unwrap();
        assert_eq!(table.champion(1), Some("Annie"));

        let missing = file.path().with_extension("missing");
        assert!(matches!(NameTable::load(&missing), Err(NameError::Io { .. })));
    }
}
