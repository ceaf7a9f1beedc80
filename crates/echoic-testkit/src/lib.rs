//! Test utilities and fixtures for exercising Echoic canisters.
//!
//! This crate is intended for host-side test environments: it wraps PocketIC
//! behind the [`echoic::transport::ReplicaTransport`] seam and knows how to
//! build and read the workspace's canister wasm artifacts.

pub mod pic;
pub mod wasm;

pub use pic::{Pic, PicBuilder, pic};
