pub mod schema;

use schema::{ConfigSchemaError, Validate};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

pub use schema::ProbeConfig;

/// Environment variable override for the config location. When set, the file
/// must exist; a dangling override is an error, not a silent default.
pub const CONFIG_ENV: &str = "ECHOIC_CONFIG";

/// Default config location, relative to the directory the probe runs from.
pub const CONFIG_RELATIVE: &str = "echoic.toml";

/// Errors related to configuration loading and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

impl ProbeConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate the config at `path`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded config from {}", path.display());

        Self::from_toml(&toml_str)
    }

    /// Load the config from its default location: the `ECHOIC_CONFIG`
    /// override if set, else `echoic.toml` next to the working directory.
    /// Only the relative default may be absent.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load_from(path);
        }

        let path = Path::new(CONFIG_RELATIVE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }
}

///
/// TESTS
///
