use crate::{
    endpoint::Endpoint,
    ids::{CanisterName, Network},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub const NAME_MAX_BYTES: usize = 40;

fn validate_canister_name_len(name: &CanisterName) -> Result<(), ConfigSchemaError> {
    if name.as_str().len() > NAME_MAX_BYTES {
        return Err(ConfigSchemaError::ValidationError(format!(
            "canister name '{name}' exceeds {NAME_MAX_BYTES} bytes",
        )));
    }

    Ok(())
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ProbeConfig
///
/// Where the probe points. Every field has a working default, so an absent
/// config file means "the echo canister on the local replica".
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    pub canister: CanisterName,
    pub network: Network,
    pub endpoint: Endpoint,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            canister: CanisterName::ECHO,
            network: Network::default(),
            endpoint: Endpoint::default(),
        }
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.canister.as_str().is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "canister name is empty".into(),
            ));
        }
        validate_canister_name_len(&self.canister)?;

        if self.endpoint.host.is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "endpoint host is empty".into(),
            ));
        }
        if self.endpoint.port == 0 {
            return Err(ConfigSchemaError::ValidationError(
                "endpoint port is zero".into(),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
