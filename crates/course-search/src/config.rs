//! Search settings stored as a versioned JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::query::{AndMode, EvaluationOptions};

pub const SEARCH_CONFIG_FILENAME: &str = "search.json";
pub const SEARCH_CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub version: String,
    pub and_mode: AndMode,
    pub case_sensitive_phrases: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            version: SEARCH_CONFIG_VERSION.to_string(),
            and_mode: AndMode::Intersect,
            case_sensitive_phrases: true,
        }
    }
}

impl SearchConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(error) => {
                log::warn!(
                    "ignoring search config at {}: {error}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Evaluation options described by this config.
    pub fn options(&self) -> EvaluationOptions {
        EvaluationOptions {
            and_mode: self.and_mode,
            case_sensitive_phrases: self.case_sensitive_phrases,
        }
    }

    fn validate(&self) -> Result<()> {
        let expected = major_version(SEARCH_CONFIG_VERSION);
        match self.version.split('.').next() {
            Some(major) if !major.is_empty() && major == expected => Ok(()),
            _ => Err(SearchError::UnsupportedVersion(format!(
                "{} (expected {expected}.x)",
                self.version
            ))),
        }
    }
}

fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}
