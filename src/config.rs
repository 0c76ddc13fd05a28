//! Configuration management for LedgerChain tooling
//!
//! The ledger itself reads no configuration; this is consumed by the
//! `ledger-cli` binary.

use crate::blockchain::GENESIS_PROOF;
use crate::error::{ChainError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub miner: MinerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ChainError::ConfigError(format!("Unknown log level: {}", self.level)))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MinerConfig {
    /// Proof handed to `seal_block` when the caller supplies none.
    #[serde(default = "default_proof")]
    pub default_proof: u64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            default_proof: default_proof(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_proof() -> u64 {
    GENESIS_PROOF
}

/// Load `config.toml` from the working directory, falling back to defaults
/// when the file is absent.
pub fn load_config() -> Result<Config> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from(path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;

    // Validate critical values
    config.logging.tracing_level()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.miner.default_proof, 100);
        assert_eq!(config.logging.tracing_level(), Ok(tracing::Level::INFO));
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config("[logging]\nlevel = \"debug\"\n\n[miner]\ndefault_proof = 35293\n");
        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.miner.default_proof, 35293);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[miner]\ndefault_proof = 7\n");
        let config = load_config_from(file.path()).unwrap();

        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.miner.default_proof, 7);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(ChainError::ConfigError(msg)) if msg.contains("loud")
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("[miner\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(ChainError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config_from(&dir.path().join("absent.toml")),
            Err(ChainError::IoError(_))
        ));
    }
}
