use candid::{CandidType, Principal, decode_one, encode_args, encode_one, utils::ArgumentEncoder};
use derive_more::{Deref, DerefMut};
use echoic::transport::{ReplicaTransport, TransportError};
use pocket_ic::{PocketIc, PocketIcBuilder};
use serde::de::DeserializeOwned;

const INSTALL_CYCLES: u128 = 1_000_000_000_000;

///
/// PicBuilder
///

pub struct PicBuilder(PocketIcBuilder);

#[allow(clippy::new_without_default)]
impl PicBuilder {
    /// Start a new PicBuilder with sensible defaults
    #[must_use]
    pub fn new() -> Self {
        Self(PocketIcBuilder::new())
    }

    #[must_use]
    pub fn with_application_subnet(mut self) -> Self {
        self.0 = self.0.with_application_subnet();
        self
    }

    /// Finish building the PocketIC instance and wrap it
    #[must_use]
    pub fn build(self) -> Pic {
        Pic(self.0.build())
    }
}

/// A standard single-application-subnet instance.
#[must_use]
pub fn pic() -> Pic {
    PicBuilder::new().with_application_subnet().build()
}

///
/// Pic
///

#[derive(Deref, DerefMut)]
pub struct Pic(PocketIc);

impl Pic {
    /// Create, fund and install a canister from the given wasm bytes with
    /// empty init args.
    pub fn create_and_install_canister(&self, wasm: Vec<u8>) -> Result<Principal, TransportError> {
        let canister_id = self.create_canister();
        self.add_cycles(canister_id, INSTALL_CYCLES);

        let init_bytes = encode_one(())?;
        self.0.install_canister(canister_id, wasm, init_bytes, None);

        Ok(canister_id)
    }

    /// Generic update call helper (serializes args + decodes result)
    pub fn update_call<T, A>(
        &self,
        canister_id: Principal,
        method: &str,
        args: A,
    ) -> Result<T, TransportError>
    where
        T: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        let bytes: Vec<u8> = encode_args(args)?;
        let result = ReplicaTransport::update(self, canister_id, method, bytes)?;

        decode_one(&result).map_err(Into::into)
    }

    /// Generic query call helper
    pub fn query_call<T, A>(
        &self,
        canister_id: Principal,
        method: &str,
        args: A,
    ) -> Result<T, TransportError>
    where
        T: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        let bytes: Vec<u8> = encode_args(args)?;
        let result = ReplicaTransport::query(self, canister_id, method, bytes)?;

        decode_one(&result).map_err(Into::into)
    }
}

impl ReplicaTransport for Pic {
    fn update(
        &self,
        canister_id: Principal,
        method: &str,
        args: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        self.0
            .update_call(canister_id, Principal::anonymous(), method, args)
            .map_err(|e| TransportError::Rejected(e.to_string()))
    }

    fn query(
        &self,
        canister_id: Principal,
        method: &str,
        args: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        self.0
            .query_call(canister_id, Principal::anonymous(), method, args)
            .map_err(|e| TransportError::Rejected(e.to_string()))
    }
}
