//! Core Echoic library.
//!
//! Echoic checks a deployed echo canister end to end: it resolves the
//! canister's id from the deployment manifest, sends a payload through the
//! canister's `echo` method over a [`transport::ReplicaTransport`], and
//! verifies that exactly the same text comes back.
//!
//! ## Layering
//!
//! - `ids/` names canisters and networks.
//! - `manifest` reads `canister_ids.json` and resolves ids from it.
//! - `config` holds the probe's target (canister, network, endpoint).
//! - `transport` is the seam to a replica; implementations live elsewhere
//!   (see the `echoic-testkit` crate).
//! - `probe` fires the echo call and checks the round-trip.
//!
//! The default flow is: config → manifest → endpoint → transport → probe.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod ids;
pub mod manifest;
pub mod probe;
pub mod protocol;
pub mod transport;

pub use error::Error;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Everything a probe binary or an end-to-end test needs in one import.
///

pub mod prelude {
    pub use crate::{
        Error,
        config::ProbeConfig,
        endpoint::{CanisterEndpoint, Endpoint},
        ids::{CanisterName, Network},
        manifest::DeploymentManifest,
        probe::echo_roundtrip,
        transport::{BoundCanister, ReplicaTransport},
    };
}
