use rendered_index_engine::{ReadbackOptions, TerminatorWidths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Describes how the target host renders breaks and spaces.
///
/// Every field is optional in the TOML file; missing ones fall back to the
/// widths observed for the default host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendered units allocated to a line break.
    pub line_break_width: usize,
    /// Rendered units allocated to a paragraph break.
    pub paragraph_break_width: usize,
    /// Whether readback may show U+00A0 where a space was written.
    pub nbsp_equivalent: bool,
}

impl Default for Config {
    fn default() -> Self {
        let widths = TerminatorWidths::default();
        Self {
            line_break_width: widths.line_break,
            paragraph_break_width: widths.paragraph_break,
            nbsp_equivalent: ReadbackOptions::default().nbsp_equivalent,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/rendered-index");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn terminator_widths(&self) -> TerminatorWidths {
        TerminatorWidths {
            line_break: self.line_break_width,
            paragraph_break: self.paragraph_break_width,
        }
    }

    pub fn readback_options(&self) -> ReadbackOptions {
        ReadbackOptions {
            nbsp_equivalent: self.nbsp_equivalent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/rendered-index/config.toml"));
    }

    #[test]
    fn test_default_matches_engine_defaults() {
        let config = Config::default();

        assert_eq!(config.terminator_widths(), TerminatorWidths::default());
        assert_eq!(config.readback_options(), ReadbackOptions::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("paragraph_break_width = 3\n").unwrap();

        assert_eq!(
            config,
            Config {
                paragraph_break_width: 3,
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "line_break_width = \"wide\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            line_break_width: 1,
            paragraph_break_width: 4,
            nbsp_equivalent: false,
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
