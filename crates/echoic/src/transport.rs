//!
//! Transport seam between the probe and a replica. The probe only needs to
//! fire candid calls at a canister and read the reply; how those bytes reach
//! a replica (PocketIC in tests, an agent in tooling) is the transport's
//! business. Implementations live outside this crate.
//!

use candid::{CandidType, Principal, decode_one, encode_args, utils::ArgumentEncoder};
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// TransportError
///

#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("candid error: {0}")]
    Candid(String),

    /// The replica refused or failed the call. Carries the replica's own
    /// description of what went wrong.
    #[error("call rejected: {0}")]
    Rejected(String),
}

impl From<candid::Error> for TransportError {
    fn from(err: candid::Error) -> Self {
        Self::Candid(err.to_string())
    }
}

///
/// ReplicaTransport
///
/// Raw candid byte calls against one replica. One method per call kind; no
/// retry or timeout logic, and every failure surfaces to the caller.
///

pub trait ReplicaTransport {
    fn update(
        &self,
        canister_id: Principal,
        method: &str,
        args: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;

    fn query(
        &self,
        canister_id: Principal,
        method: &str,
        args: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;
}

///
/// BoundCanister
///
/// A transport narrowed to a single canister id, with typed call helpers
/// layered over the raw byte interface.
///

pub struct BoundCanister<'a, T: ReplicaTransport> {
    transport: &'a T,
    canister_id: Principal,
}

impl<'a, T: ReplicaTransport> BoundCanister<'a, T> {
    #[must_use]
    pub const fn new(transport: &'a T, canister_id: Principal) -> Self {
        Self {
            transport,
            canister_id,
        }
    }

    #[must_use]
    pub const fn canister_id(&self) -> Principal {
        self.canister_id
    }

    /// Typed update call (serializes args + decodes result).
    pub fn update<R, A>(&self, method: &str, args: A) -> Result<R, TransportError>
    where
        R: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        debug!("update {} on {}", method, self.canister_id);

        let bytes = encode_args(args)?;
        let reply = self.transport.update(self.canister_id, method, bytes)?;

        decode_one(&reply).map_err(Into::into)
    }

    /// Typed query call.
    pub fn query<R, A>(&self, method: &str, args: A) -> Result<R, TransportError>
    where
        R: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        debug!("query {} on {}", method, self.canister_id);

        let bytes = encode_args(args)?;
        let reply = self.transport.query(self.canister_id, method, bytes)?;

        decode_one(&reply).map_err(Into::into)
    }
}

///
/// TESTS
///
