//! End-to-end echo round-trip against a PocketIC replica.
//!
//! The full flow mirrors a deployed workspace: install the echo canister,
//! record it in a deployment manifest the way the deploy tool would, resolve
//! the id back out of the manifest, bind, and round-trip a payload.
//!
//! ## Running the tests
//!
//! These tests need a PocketIC server binary (`POCKET_IC_BIN`) and the
//! `wasm32-unknown-unknown` target installed:
//!
//! ```bash
//! rustup target add wasm32-unknown-unknown
//! cargo test -p echoic --test echo_roundtrip -- --nocapture --ignored
//! ```
//!
//! Set `ECHOIC_PREBUILT_WASM_DIR` to reuse prebuilt canister artifacts
//! instead of building them here.

use echoic::{
    endpoint::{CanisterEndpoint, Endpoint},
    ids::{CanisterName, Network},
    manifest::DeploymentManifest,
    probe::{ProbeError, echo_roundtrip},
    transport::TransportError,
};
use echoic_testkit::{pic, wasm::echo_wasm};
use std::fs;
use tempfile::TempDir;

#[test]
#[ignore = "requires a PocketIC server and the wasm32-unknown-unknown target"]
fn echo_round_trips_through_a_deployed_manifest() {
    let pic = pic();
    println!("echo_e2e: PocketIC ready");

    let canister_id = pic
        .create_and_install_canister(echo_wasm())
        .expect("install echo canister");
    println!("echo_e2e: installed echo={canister_id}");

    // Record the deployment the way the deploy tool does.
    let dir = TempDir::new().expect("temp dir");
    let manifest_path = dir.path().join("canister_ids.json");
    fs::write(
        &manifest_path,
        format!(r#"{{ "echo": {{ "local": "{canister_id}" }} }}"#),
    )
    .expect("write manifest");

    let manifest = DeploymentManifest::load_from(&manifest_path).expect("load manifest");
    let bound = CanisterEndpoint::resolve(
        &manifest,
        &CanisterName::ECHO,
        Network::Local,
        Endpoint::default(),
    )
    .expect("resolve endpoint");
    assert_eq!(bound.canister_id, canister_id);
    println!("echo_e2e: resolved {bound}");

    let reply = echo_roundtrip(&pic, bound.canister_id, "hello").expect("echo round-trip");
    assert_eq!(reply, "hello");
    println!("echo_e2e: reply={reply:?}");
}

#[test]
#[ignore = "requires a PocketIC server and the wasm32-unknown-unknown target"]
fn echo_is_the_identity_for_all_payloads() {
    let pic = pic();
    let canister_id = pic
        .create_and_install_canister(echo_wasm())
        .expect("install echo canister");

    let long = "long ".repeat(20_000);
    for payload in ["", "hello", "héllo wörld 🛰", long.as_str()] {
        let reply = echo_roundtrip(&pic, canister_id, payload).expect("echo round-trip");
        assert_eq!(reply, payload);
        println!("echo_e2e: identity ok for {} bytes", payload.len());
    }
}

#[test]
#[ignore = "requires a PocketIC server and the wasm32-unknown-unknown target"]
fn an_uninstalled_canister_fails_loudly() {
    let pic = pic();

    // Created but never given a wasm module; calls must be rejected.
    let canister_id = pic.create_canister();

    let err = echo_roundtrip(&pic, canister_id, "hello").unwrap_err();
    println!("echo_e2e: uninstalled call failed: {err}");
    assert!(matches!(
        err,
        ProbeError::Transport(TransportError::Rejected(_))
    ));
}

#[test]
#[ignore = "requires a PocketIC server and the wasm32-unknown-unknown target"]
fn an_absent_method_fails_loudly() {
    let pic = pic();
    let canister_id = pic
        .create_and_install_canister(echo_wasm())
        .expect("install echo canister");

    let err = pic
        .update_call::<String, _>(canister_id, "shout", ("hello",))
        .unwrap_err();
    println!("echo_e2e: absent method failed: {err}");
    assert!(matches!(err, TransportError::Rejected(_)));
}

#[test]
#[ignore = "requires a PocketIC server and the wasm32-unknown-unknown target"]
fn querying_the_update_endpoint_is_rejected() {
    let pic = pic();
    let canister_id = pic
        .create_and_install_canister(echo_wasm())
        .expect("install echo canister");

    // echo is exposed as an update method only.
    let err = pic
        .query_call::<String, _>(canister_id, "echo", ("hello",))
        .unwrap_err();
    println!("echo_e2e: query call failed: {err}");
    assert!(matches!(err, TransportError::Rejected(_)));
}
