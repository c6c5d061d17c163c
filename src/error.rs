use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised while converting or serializing a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unbalanced delimiter `{delimiter}` in text: {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("unsupported block type: {0}")]
    UnsupportedBlockKind(String),

    #[error("leaf node {} has no value to render", .tag.as_deref().unwrap_or("<text>"))]
    MissingRenderValue { tag: Option<String> },

    #[error("branch node must have a tag and children to render")]
    MissingTagOrChildren,

    #[error("no level-1 heading found to use as title")]
    NoTitleHeading,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
