use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration settings: {}", .0.join(", "))]
    MissingSettings(Vec<String>),

    #[error("Configuration setting {0} must be set")]
    MissingSetting(String),

    #[error("Configuration setting {key} must contain {expected}")]
    InvalidSetting {
        key: String,
        expected: &'static str,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load manifest from {path}: {source}")]
    ManifestLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed manifest (line {line}): {content}")]
    ManifestParse { line: usize, content: String },
}

impl ConfigError {
    /// A parse failure for `key`, wrapping the parser's error as the cause.
    pub(crate) fn invalid<E>(key: &str, expected: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::InvalidSetting {
            key: key.to_string(),
            expected,
            source: Some(Box::new(source)),
        }
    }

    /// A parse failure with no underlying cause (e.g. a boolean that is
    /// neither "true" nor "false").
    pub(crate) fn invalid_plain(key: &str, expected: &'static str) -> Self {
        ConfigError::InvalidSetting {
            key: key.to_string(),
            expected,
            source: None,
        }
    }
}
