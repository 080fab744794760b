//! CLI configuration
//!
//! Read from a TOML file (`--config`, or `sadata.toml` in the working
//! directory when present). Command-line flags override file values.
//!
//! ```toml
//! log_profile = "production"
//! schools_path = "data/schools.json"
//! hospitals_path = "data/hospitals.json"
//! ```

use std::path::{Path, PathBuf};

use sadata_core::logging_facility::Profile;
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "sadata.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no {resource} dataset configured (use --{resource} or {resource}_path)")]
    MissingDataset { resource: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub log_profile: Profile,
    pub schools_path: Option<PathBuf>,
    pub hospitals_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load the config file
    ///
    /// An explicit `path` must exist. Without one, `sadata.toml` is used if
    /// present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// The file cannot be read or is not a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// # Errors
    ///
    /// Invalid TOML, unknown keys or an unknown log profile.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// # Errors
    ///
    /// No schools dataset is configured.
    pub fn schools_path(&self) -> Result<&Path, ConfigError> {
        self.schools_path
            .as_deref()
            .ok_or(ConfigError::MissingDataset { resource: "schools" })
    }

    /// # Errors
    ///
    /// No hospitals dataset is configured.
    pub fn hospitals_path(&self) -> Result<&Path, ConfigError> {
        self.hospitals_path
            .as_deref()
            .ok_or(ConfigError::MissingDataset {
                resource: "hospitals",
            })
    }
}

/// Parse a `--log-profile` value
///
/// # Errors
///
/// Anything but `development`, `production` or `test`.
pub fn parse_profile(raw: &str) -> Result<Profile, String> {
    match raw {
        "development" => Ok(Profile::Development),
        "production" => Ok(Profile::Production),
        "test" => Ok(Profile::Test),
        other => Err(format!(
            "unknown log profile '{}' (expected development, production or test)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::parse(
            r#"
            log_profile = "production"
            schools_path = "schools.json"
            hospitals_path = "hospitals.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_profile, Profile::Production);
        assert_eq!(config.schools_path().unwrap(), Path::new("schools.json"));
        assert_eq!(config.hospitals_path().unwrap(), Path::new("hospitals.json"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::parse("school_path = \"x\"").is_err());
    }

    #[test]
    fn test_missing_dataset() {
        let err = CliConfig::default().hospitals_path().unwrap_err();
        assert!(err.to_string().contains("--hospitals"));
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!(parse_profile("test"), Ok(Profile::Test));
        assert!(parse_profile("verbose").is_err());
    }
}
