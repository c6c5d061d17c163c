use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub inline: InlineConfig,
    pub blocks: BlockConfig,
    pub html: HtmlConfig,
}

/// Delimiter strings for the bold, italic and code passes, applied in that order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InlineConfig {
    pub bold: String,
    pub italic: String,
    pub code: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            bold: "**".to_string(),
            italic: "_".to_string(),
            code: "`".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlockConfig {
    /// How many leading characters of a block are searched for `". "`
    /// when deciding whether it is an ordered list.
    pub ordered_marker_window: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            ordered_marker_window: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    pub root_tag: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let delimiters = [
            ("bold", &self.inline.bold),
            ("italic", &self.inline.italic),
            ("code", &self.inline.code),
        ];
        for (name, delimiter) in delimiters {
            if delimiter.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "inline.{name} delimiter must not be empty"
                )));
            }
        }
        for (i, (name, delimiter)) in delimiters.iter().enumerate() {
            if let Some((other, _)) = delimiters[i + 1..].iter().find(|(_, d)| d == delimiter) {
                return Err(ConfigError::Invalid(format!(
                    "inline.{name} and inline.{other} share the delimiter {delimiter:?}"
                )));
            }
        }
        if self.blocks.ordered_marker_window < 2 {
            return Err(ConfigError::Invalid(
                "blocks.ordered_marker_window must be at least 2".to_string(),
            ));
        }
        if self.html.root_tag.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "html.root_tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.inline.italic, "_");
        assert_eq!(config.blocks.ordered_marker_window, 4);
        assert_eq!(config.html.root_tag, "div");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str("[inline]\nitalic = \"__\"\n").unwrap();
        assert_eq!(config.inline.italic, "__");
        assert_eq!(config.inline.bold, "**");
        assert_eq!(config.html, HtmlConfig::default());
    }

    #[test]
    fn rejects_shared_delimiters() {
        let err = Config::from_toml_str("[inline]\nitalic = \"**\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("share")));
    }

    #[test]
    fn rejects_empty_delimiter() {
        let err = Config::from_toml_str("[inline]\ncode = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_toml() {
        let err = Config::from_toml_str("[inline\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[html]\nroot_tag = \"article\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.html.root_tag, "article");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
