//! Panel configuration.
//!
//! A panel is built from a [`PanelConfig`], usually the default one. The demo
//! accepts a TOML file; every key is optional:
//!
//! ```toml
//! list_rows = 20
//! tree_rows = 20
//! table_rows = 20
//!
//! [spinners]
//! list_step = 10
//! tree_step = 20
//! table_step = 10
//!
//! [labels]
//! capacity = 1000
//! seed = 42
//!
//! [logging]
//! filter = "lattice_bench=debug"
//! ansi = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use lattice_bench_core::logging::{self, targets};
use lattice_bench_core::{BenchError, Result};

use crate::model::{CHUNK_SIZE, DEFAULT_LABEL_CAPACITY, DEFAULT_LABEL_SEED};

/// Spinner step sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerSteps {
    pub list_step: usize,
    pub tree_step: usize,
    pub table_step: usize,
}

impl Default for SpinnerSteps {
    fn default() -> Self {
        Self {
            list_step: 10,
            tree_step: CHUNK_SIZE,
            table_step: 10,
        }
    }
}

/// Generated label settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Number of cache slots; rows alias modulo this.
    pub capacity: usize,
    pub seed: u64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LABEL_CAPACITY,
            seed: DEFAULT_LABEL_SEED,
        }
    }
}

/// Subscriber settings for binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lattice_bench=info".to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Installs the global subscriber. See [`logging::init`].
    pub fn install(&self) -> Result<()> {
        logging::init(&self.filter, self.ansi)
    }
}

/// Everything a panel is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub list_rows: usize,
    pub tree_rows: usize,
    pub table_rows: usize,
    pub spinners: SpinnerSteps,
    pub labels: LabelConfig,
    pub logging: LoggingConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            list_rows: 20,
            tree_rows: CHUNK_SIZE,
            table_rows: 20,
            spinners: SpinnerSteps::default(),
            labels: LabelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PanelConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| BenchError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::PANEL, path = %path.display(), "panel config loaded");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BenchError::config(format!("cannot serialize panel config: {e}")))
    }

    /// Rejects settings the models cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.labels.capacity == 0 {
            return Err(BenchError::config("labels.capacity must be non-zero"));
        }
        let steps = [
            ("spinners.list_step", self.spinners.list_step),
            ("spinners.tree_step", self.spinners.tree_step),
            ("spinners.table_step", self.spinners.table_step),
        ];
        for (key, step) in steps {
            if step == 0 {
                return Err(BenchError::invalid_value(key, "step must be non-zero"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = PanelConfig::from_toml_str("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.spinners.tree_step, 20);
    }

    #[test]
    fn test_partial_document() {
        let config = PanelConfig::from_toml_str(
            r#"
            tree_rows = 60

            [labels]
            seed = 7

            [logging]
            ansi = false
            "#,
        )
        .unwrap();

        assert_eq!(config.tree_rows, 60);
        assert_eq!(config.list_rows, 20);
        assert_eq!(config.labels.seed, 7);
        assert_eq!(config.labels.capacity, DEFAULT_LABEL_CAPACITY);
        assert!(!config.logging.ansi);
        assert_eq!(config.logging.filter, "lattice_bench=info");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = PanelConfig::from_toml_str("[labels]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, BenchError::Config { .. }));
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = PanelConfig::from_toml_str("[spinners]\ntree_step = 0\n").unwrap_err();
        assert!(matches!(err, BenchError::InvalidValue { .. }));
    }

    #[test]
    fn test_syntax_error() {
        assert!(PanelConfig::from_toml_str("list_rows = [").is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let mut config = PanelConfig::default();
        config.table_rows = 99;
        let text = config.to_toml_string().unwrap();
        assert_eq!(PanelConfig::from_toml_str(&text).unwrap(), config);
    }
}
