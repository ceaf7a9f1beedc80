//!
//! Strongly-typed identifiers used across the probe: logical canister names
//! as recorded in the deployment manifest, and the deployment network a
//! canister id is resolved for.
//!

mod canister;
mod network;

pub use canister::*;
pub use network::*;
