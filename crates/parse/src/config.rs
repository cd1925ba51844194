use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::DEFAULT_FUZZY_THRESHOLD;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Fuzzy threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f32),
}

/// Tunables for [`crate::ExpenseParser`]. The category table itself is fixed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Highest accepted fuzzy mismatch score; lower is stricter.
    pub threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl ParserConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.classifier.threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ParserConfig::from_toml("").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.classifier.threshold, DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn reads_threshold() {
        let config = ParserConfig::from_toml("[classifier]\nthreshold = 0.25\n").unwrap();
        assert_eq!(config.classifier.threshold, 0.25);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = ParserConfig::from_toml("[classifier]\nthreshold = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 1.5));
        assert!(ParserConfig::from_toml("[classifier]\nthreshold = -0.1\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ParserConfig::from_toml("[classifier\nthreshold = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[classifier]").unwrap();
        writeln!(file, "threshold = 0.1").unwrap();
        let config = ParserConfig::load(file.path()).unwrap();
        assert_eq!(config.classifier.threshold, 0.1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
