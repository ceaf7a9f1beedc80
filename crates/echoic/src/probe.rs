//!
//! The echo probe. Sends one payload through a deployed echo canister and
//! checks that exactly the same text comes back. One update call per probe;
//! no retries, no timeouts. Anything other than a byte-for-byte match is an
//! error.
//!

use crate::{
    protocol,
    transport::{BoundCanister, ReplicaTransport, TransportError},
};
use candid::Principal;
use thiserror::Error as ThisError;
use tracing::info;

///
/// ProbeError
///

#[derive(Debug, ThisError)]
pub enum ProbeError {
    /// The canister answered, but not with the payload it was sent.
    #[error("echo mismatch: sent '{sent}', received '{received}'")]
    Mismatch { sent: String, received: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Send `payload` through the echo canister at `canister_id` and verify the
/// reply equals it. Returns the reply so callers can display it.
pub fn echo_roundtrip<T: ReplicaTransport>(
    transport: &T,
    canister_id: Principal,
    payload: &str,
) -> Result<String, ProbeError> {
    let bound = BoundCanister::new(transport, canister_id);
    let received: String = bound.update(protocol::ECHO, (payload,))?;

    if received != payload {
        return Err(ProbeError::Mismatch {
            sent: payload.to_string(),
            received,
        });
    }

    info!("echo round-trip ok for {canister_id} ({} bytes)", payload.len());

    Ok(received)
}

///
/// TESTS
///
