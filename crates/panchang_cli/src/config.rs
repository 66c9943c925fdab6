//! `panchang.toml` loading.
//!
//! ```toml
//! [location]
//! latitude = 17.385
//! longitude = 78.4867
//! elevation_m = 0.0
//!
//! [scan]
//! step_seconds = 60
//! refine_boundaries = false
//! locale = "english"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use panchang_search::ScanConfig;
use panchang_vedic::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "panchang.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    pub location: LocationConfig,
    pub scan: ScanSection,
}

/// Default observer location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation_m: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanSection {
    pub step_seconds: i64,
    pub refine_boundaries: bool,
    pub locale: Locale,
}

impl Default for ScanSection {
    fn default() -> Self {
        let scan = ScanConfig::default();
        Self {
            step_seconds: scan.step_seconds,
            refine_boundaries: scan.refine_boundaries,
            locale: scan.locale,
        }
    }
}

impl CliConfig {
    /// Load an explicitly named file; it must exist and parse.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or [`DEFAULT_CONFIG_FILE`] when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// or a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_FILE)
            }
            None => {
                info!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Scanner settings from the `[scan]` table.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            step_seconds: self.scan.step_seconds,
            refine_boundaries: self.scan.refine_boundaries,
            locale: self.scan.locale,
            ..ScanConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_scanner_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.scan_config(), ScanConfig::default());
        assert_eq!(config.location.latitude, None);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
            [location]
            latitude = 17.385
            longitude = 78.4867
            elevation_m = 542.0

            [scan]
            step_seconds = 30
            refine_boundaries = true
            locale = "hindi"
            "#,
        );
        let config = CliConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.location.latitude, Some(17.385));
        assert_eq!(config.location.elevation_m, 542.0);
        let scan = config.scan_config();
        assert_eq!(scan.step_seconds, 30);
        assert!(scan.refine_boundaries);
        assert_eq!(scan.locale, Locale::Hindi);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("[scan]\nrefine_boundaries = true\n");
        let config = CliConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.scan.step_seconds, 60);
        assert_eq!(config.scan.locale, Locale::English);
        assert_eq!(config.location, LocationConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[scan]\nstep_seconds = \"sixty\"\n");
        let err = CliConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/panchang.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn roundtrip() {
        let config = CliConfig {
            location: LocationConfig {
                latitude: Some(12.97),
                longitude: Some(77.59),
                elevation_m: 920.0,
            },
            scan: ScanSection::default(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
