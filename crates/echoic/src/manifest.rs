//!
//! Deployment manifest access. The deploy tool records every canister it
//! creates in `canister_ids.json`, mapping logical canister name → network
//! name → canister id text. This module reads that file and resolves ids
//! from it; it never writes or mutates it.
//!

use crate::ids::{CanisterName, Network};
use candid::Principal;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

/// Environment variable override for the manifest location.
pub const CANISTER_IDS_ENV: &str = "ECHOIC_CANISTER_IDS";

/// Default manifest location, relative to the directory the probe runs from.
pub const CANISTER_IDS_RELATIVE: &str = ".dfx/local/canister_ids.json";

///
/// ManifestError
///

#[derive(Debug, ThisError)]
pub enum ManifestError {
    #[error("cannot read manifest at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse manifest: {0}")]
    Parse(String),

    #[error("canister '{0}' is not in the manifest")]
    UnknownCanister(CanisterName),

    #[error("canister '{canister}' has no id for network '{network}'")]
    UnknownNetwork {
        canister: CanisterName,
        network: String,
    },

    #[error("canister '{canister}' has an invalid id for network '{network}': {message}")]
    InvalidPrincipal {
        canister: CanisterName,
        network: String,
        message: String,
    },
}

///
/// DeploymentManifest
///
/// Transparent wrapper over the external file format. Canister and network
/// names stay untyped strings here so any manifest the deploy tool writes
/// parses; typing is applied at resolution time.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DeploymentManifest(BTreeMap<String, BTreeMap<String, String>>);

impl DeploymentManifest {
    /// Parse a manifest from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Read and parse the manifest at `path`. A missing file is an error,
    /// never an empty manifest.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded manifest from {}", path.display());

        Self::from_json_str(&json)
    }

    /// Manifest location: `ECHOIC_CANISTER_IDS` override, else the deploy
    /// tool's default path under `.dfx/`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        env::var(CANISTER_IDS_ENV)
            .map_or_else(|_| PathBuf::from(CANISTER_IDS_RELATIVE), PathBuf::from)
    }

    /// Read and parse the manifest at the default location.
    pub fn load_default() -> Result<Self, ManifestError> {
        Self::load_from(Self::default_path())
    }

    /// Resolve the canister id recorded for `canister` on `network`.
    ///
    /// Every miss is a distinct, loud error: an absent canister, an absent
    /// network under a present canister, and an id that does not parse as a
    /// principal are never papered over with a default.
    pub fn resolve(
        &self,
        canister: &CanisterName,
        network: Network,
    ) -> Result<Principal, ManifestError> {
        let networks = self
            .0
            .get(canister.as_str())
            .ok_or_else(|| ManifestError::UnknownCanister(canister.clone()))?;

        let text = networks
            .get(network.as_str())
            .ok_or_else(|| ManifestError::UnknownNetwork {
                canister: canister.clone(),
                network: network.to_string(),
            })?;

        let principal =
            Principal::from_text(text).map_err(|e| ManifestError::InvalidPrincipal {
                canister: canister.clone(),
                network: network.to_string(),
                message: e.to_string(),
            })?;

        debug!("resolved {canister} on {network} to {principal}");

        Ok(principal)
    }

    /// Check that every id in the manifest parses as a principal.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (canister, networks) in &self.0 {
            for (network, text) in networks {
                if let Err(e) = Principal::from_text(text) {
                    return Err(ManifestError::InvalidPrincipal {
                        canister: CanisterName::owned(canister.clone()),
                        network: network.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Logical canister names present in the manifest.
    pub fn canisters(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{DeploymentManifest, ManifestError};
    use crate::ids::{CanisterName, Network};

    const MANIFEST: &str = r#"{
        "echo": {
            "local": "bkyz2-fmaaa-aaaaa-qaaaq-cai",
            "ic": "ryjl3-tyaaa-aaaaa-aaaba-cai"
        },
        "frontend": {
            "local": "bd3sg-teaaa-aaaaa-qaaba-cai"
        }
    }"#;

    #[test]
    fn resolves_canister_for_each_network() {
        let manifest = DeploymentManifest::from_json_str(MANIFEST).unwrap();

        let local = manifest.resolve(&CanisterName::ECHO, Network::Local).unwrap();
        assert_eq!(local.to_text(), "bkyz2-fmaaa-aaaaa-qaaaq-cai");

        let ic = manifest.resolve(&CanisterName::ECHO, Network::Ic).unwrap();
        assert_eq!(ic.to_text(), "ryjl3-tyaaa-aaaaa-aaaba-cai");
    }

    #[test]
    fn unknown_canister_fails_loudly() {
        let manifest = DeploymentManifest::from_json_str(MANIFEST).unwrap();
        let err = manifest
            .resolve(&CanisterName::new("backend"), Network::Local)
            .unwrap_err();

        assert!(matches!(err, ManifestError::UnknownCanister(ref name) if name.as_str() == "backend"));
    }

    #[test]
    fn unknown_network_fails_loudly() {
        let manifest = DeploymentManifest::from_json_str(MANIFEST).unwrap();
        let err = manifest
            .resolve(&CanisterName::new("frontend"), Network::Ic)
            .unwrap_err();

        match err {
            ManifestError::UnknownNetwork { canister, network } => {
                assert_eq!(canister.as_str(), "frontend");
                assert_eq!(network, "ic");
            }
            other => panic!("expected UnknownNetwork, got {other:?}"),
        }
    }

    #[test]
    fn invalid_principal_text_is_reported() {
        let manifest = DeploymentManifest::from_json_str(
            r#"{ "echo": { "local": "not-a-principal" } }"#,
        )
        .unwrap();

        let err = manifest.resolve(&CanisterName::ECHO, Network::Local).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPrincipal { .. }));

        let err = manifest.validate().unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPrincipal { .. }));
    }

    #[test]
    fn validate_accepts_well_formed_manifests() {
        let manifest = DeploymentManifest::from_json_str(MANIFEST).unwrap();
        manifest.validate().unwrap();

        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_empty());
        assert_eq!(manifest.canisters().collect::<Vec<_>>(), vec!["echo", "frontend"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DeploymentManifest::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));

        // The right shape is name → network → id text; a flat map is malformed.
        let err = DeploymentManifest::from_json_str(r#"{ "echo": "bkyz2-fmaaa-aaaaa-qaaaq-cai" }"#)
            .unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn empty_manifest_parses_but_resolves_nothing() {
        let manifest = DeploymentManifest::from_json_str("{}").unwrap();
        assert!(manifest.is_empty());

        let err = manifest.resolve(&CanisterName::ECHO, Network::Local).unwrap_err();
        assert!(matches!(err, ManifestError::UnknownCanister(_)));
    }
}
