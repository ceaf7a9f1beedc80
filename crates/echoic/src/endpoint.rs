use crate::{
    ids::{CanisterName, Network},
    manifest::{DeploymentManifest, ManifestError},
};
use candid::Principal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Host and port a local replica binds by default.
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 4943;

///
/// Endpoint
///
/// The HTTP address of a replica instance. Defaults to the local replica's
/// fixed loopback address and port.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    #[must_use]
    pub const fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

///
/// CanisterEndpoint
///
/// The `(host, canister id)` pair an RPC client binds to. Built once by
/// manifest resolution and immutable for the probe's duration.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanisterEndpoint {
    pub endpoint: Endpoint,
    pub canister_id: Principal,
}

impl CanisterEndpoint {
    #[must_use]
    pub const fn new(endpoint: Endpoint, canister_id: Principal) -> Self {
        Self {
            endpoint,
            canister_id,
        }
    }

    /// Look `canister` up in the manifest for `network` and bind the result
    /// to `endpoint`. Resolution failures propagate; no fallback canister is
    /// ever substituted.
    pub fn resolve(
        manifest: &DeploymentManifest,
        canister: &CanisterName,
        network: Network,
        endpoint: Endpoint,
    ) -> Result<Self, ManifestError> {
        let canister_id = manifest.resolve(canister, network)?;

        Ok(Self {
            endpoint,
            canister_id,
        })
    }
}

impl Display for CanisterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.canister_id, self.endpoint)
    }
}

///
/// TESTS
///
