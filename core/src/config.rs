//! Configuration loading.
//!
//! Read from `~/.drinkdash/config.toml` unless another path is given. A
//! missing file means defaults; a malformed one is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::service::aggregator::GapPolicy;

const CONFIG_DIR_NAME: &str = ".drinkdash";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed for the synthetic series.
    pub seed: u64,
    /// Dashboard year; the current year when unset.
    pub year: Option<i32>,
    pub gap_policy: GapPolicy,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when no `-v` flag is given.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            year: None,
            gap_policy: GapPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// `path` when given, otherwise the default location.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Loads `path`, or the default location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            seed = 7
            year = 2024
            gap_policy = "reject"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.year, Some(2024));
        assert_eq!(config.gap_policy, GapPolicy::Reject);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().seed, 42);
        assert_eq!(Config::default().gap_policy, GapPolicy::Zero);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        assert!(Config::parse(r#"gap_policy = "guess""#).is_err());
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn test_resolve_path_prefers_explicit_path() {
        let explicit = Path::new("/tmp/drinkdash.toml");
        assert_eq!(Config::resolve_path(Some(explicit)).unwrap(), explicit);
        if let Ok(default) = Config::default_path() {
            assert_eq!(Config::resolve_path(None).unwrap(), default);
            assert!(default.ends_with(".drinkdash/config.toml"));
        }
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 99").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.year, None);
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"many\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config"));
    }
}
