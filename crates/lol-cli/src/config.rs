use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Defaults for the `lol` command, read from the file given by `--config`.
///
/// ```toml
/// names = "names.toml"
/// pretty = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Name table used by `show` when `--names` is not given.
    pub names: Option<PathBuf>,
    /// Pretty-print merged JSON even without `--pretty`.
    pub pretty: bool,
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// The file configuration, or defaults when no file was given.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Name table to use: the flag wins over the file.
    pub fn names_or(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.names.clone())
    }

    pub fn pretty_or(&self, flag: bool) -> bool {
        flag || self.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(config.names.is_none());
        assert!(!config.pretty);
        assert_eq!(CliConfig::resolve(None).unwrap(), config);
    }

    #[test]
    fn parses_partial_file() {
        let config = CliConfig::from_toml_str("pretty = true\n").unwrap();
        assert!(config.pretty);
        assert!(config.names.is_none());
    }

    #[test]
    fn flags_override_file() {
        let config = CliConfig {
            names: Some("file.toml".into()),
            pretty: true,
        };
        assert_eq!(config.names_or(Some("flag.toml".into())), Some("flag.toml".into()));
        assert_eq!(config.names_or(None), Some("file.toml".into()));
        assert!(config.pretty_or(false));
        assert!(CliConfig::default().pretty_or(true));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "names = \"names.toml\"").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.names, Some(PathBuf::from("names.toml")));
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(CliConfig::from_toml_str("pretty = \"yes\"\n").is_err());
    }
}
