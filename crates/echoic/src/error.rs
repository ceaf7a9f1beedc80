use crate::{
    config::{ConfigError, schema::ConfigSchemaError},
    manifest::ManifestError,
    probe::ProbeError,
    transport::TransportError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the crate. Each module keeps its own error type; this
/// enum only aggregates them at the public boundary.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ManifestError(#[from] ManifestError),

    #[error(transparent)]
    ProbeError(#[from] ProbeError),

    #[error(transparent)]
    TransportError(#[from] TransportError),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}

///
/// TESTS
///
