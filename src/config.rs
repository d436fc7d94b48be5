use crate::defaults;
use crate::error::{ReleveError, Result};
use crate::export::ExportFormat;
use crate::interpret::{InterpretOptions, NumberingMode};
use crate::inventory::Inventory;
use crate::lexicon::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub interpretation: InterpretationConfig,
    pub session: SessionConfig,
    pub export: ExportConfig,
}

/// Transcript interpretation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterpretationConfig {
    pub language: Language,
    pub numbering: NumberingMode,
    pub max_quantity: u32,
}

/// Dictation session configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub echo_window_ms: u64,
}

/// Export and storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub delimiter: char,
    /// Inventory store; defaults to the user data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
}

impl Default for InterpretationConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            numbering: NumberingMode::default(),
            max_quantity: defaults::MAX_QUANTITY,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            echo_window_ms: defaults::ECHO_WINDOW_MS,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            delimiter: defaults::CSV_DELIMITER,
            store: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Missing fields use default values; invalid TOML or out-of-range
    /// values are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReleveError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ReleveError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(ReleveError::ConfigFileNotFound { .. }) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - RELEVE_LANGUAGE → interpretation.language
    /// - RELEVE_EXPORT_FORMAT → export.format
    /// - RELEVE_STORE → export.store
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = std::env::var("RELEVE_LANGUAGE")
            && !language.is_empty()
        {
            match language.parse() {
                Ok(language) => self.interpretation.language = language,
                Err(e) => tracing::warn!("Ignoring RELEVE_LANGUAGE: {}", e),
            }
        }

        if let Ok(format) = std::env::var("RELEVE_EXPORT_FORMAT")
            && !format.is_empty()
        {
            match format.parse() {
                Ok(format) => self.export.format = format,
                Err(e) => tracing::warn!("Ignoring RELEVE_EXPORT_FORMAT: {}", e),
            }
        }

        if let Ok(store) = std::env::var("RELEVE_STORE")
            && !store.is_empty()
        {
            self.export.store = Some(PathBuf::from(store));
        }

        self
    }

    pub fn validate(&self) -> Result<()> {
        let max = self.interpretation.max_quantity;
        if !(1..=defaults::MAX_QUANTITY).contains(&max) {
            return Err(ReleveError::ConfigInvalidValue {
                key: "interpretation.max_quantity".to_string(),
                message: format!("must be between 1 and {}, got {}", defaults::MAX_QUANTITY, max),
            });
        }
        let delimiter = self.export.delimiter;
        if matches!(delimiter, '"' | '\n' | '\r') {
            return Err(ReleveError::ConfigInvalidValue {
                key: "export.delimiter".to_string(),
                message: format!("{:?} cannot separate CSV fields", delimiter),
            });
        }
        Ok(())
    }

    pub fn interpret_options(&self) -> InterpretOptions {
        InterpretOptions {
            numbering: self.interpretation.numbering,
            max_quantity: self.interpretation.max_quantity,
        }
    }

    /// Configured inventory store, else the default data path.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.export.store.clone().or_else(Inventory::default_path)
    }

    /// Look up a value by dotted key, e.g. `session.echo_window_ms`.
    pub fn get_value_by_path(&self, key: &str) -> Result<String> {
        let root = toml::Value::try_from(self).map_err(|e| ReleveError::ConfigParse {
            message: e.to_string(),
        })?;

        let mut current = &root;
        for segment in key.split('.') {
            current = current
                .get(segment)
                .ok_or_else(|| ReleveError::ConfigInvalidValue {
                    key: key.to_string(),
                    message: "unknown configuration key".to_string(),
                })?;
        }

        Ok(match current {
            toml::Value::String(s) => s.clone(),
            toml::Value::Table(table) => toml::to_string(table)
                .map_err(|e| ReleveError::ConfigParse {
                    message: e.to_string(),
                })?
                .trim_end()
                .to_string(),
            other => other.to_string(),
        })
    }

    /// Full configuration as TOML.
    pub fn dump(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReleveError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Every leaf setting as a dotted key and its rendered value.
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        let root = toml::Value::try_from(self).map_err(|e| ReleveError::ConfigParse {
            message: e.to_string(),
        })?;
        let mut entries = Vec::new();
        flatten_into(&mut entries, String::new(), &root);
        Ok(entries)
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/releve/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::APP_DIR)
            .join("config.toml")
    }
}

fn flatten_into(out: &mut Vec<(String, String)>, prefix: String, value: &toml::Value) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(out, path, child);
            }
        }
        toml::Value::String(s) => out.push((prefix, s.clone())),
        other => out.push((prefix, other.to_string())),
    }
}
