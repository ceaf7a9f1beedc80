//!
//! Wasm artifact helpers for end-to-end tests. Builds workspace canisters for
//! `wasm32-unknown-unknown` on demand and reads the artifacts back. Setting
//! `ECHOIC_PREBUILT_WASM_DIR` skips the build and loads prebuilt artifacts
//! from that directory instead.
//!

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

pub const PREBUILT_WASM_DIR_ENV: &str = "ECHOIC_PREBUILT_WASM_DIR";

const CANISTERS: [&str; 1] = ["canister_echo"];

/// Wasm bytes for the echo canister, building it first if no prebuilt
/// directory is configured. Panics on build or read failure, with the
/// toolchain's own output in the message.
#[must_use]
pub fn echo_wasm() -> Vec<u8> {
    let workspace_root = workspace_root();
    build_canisters(&workspace_root);

    read_wasm(&workspace_root, "canister_echo")
}

fn build_canisters(workspace_root: &Path) {
    if prebuilt_wasm_dir().is_some() {
        return;
    }

    let target_dir = test_target_dir(workspace_root);
    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root);
    cmd.env("CARGO_TARGET_DIR", &target_dir);
    cmd.args(["build", "--release", "--target", "wasm32-unknown-unknown"]);
    for name in CANISTERS {
        cmd.args(["-p", name]);
    }

    let output = cmd.output().expect("failed to run cargo build");
    println!(
        "testkit: cargo build status={} stdout={} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        output.status.success(),
        "cargo build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_wasm(workspace_root: &Path, crate_name: &str) -> Vec<u8> {
    let wasm_path = wasm_path(workspace_root, crate_name);
    println!(
        "testkit: read wasm {crate_name} path={}",
        wasm_path.display()
    );

    fs::read(&wasm_path).unwrap_or_else(|err| panic!("failed to read {crate_name} wasm: {err}"))
}

fn wasm_path(workspace_root: &Path, crate_name: &str) -> PathBuf {
    if let Some(dir) = prebuilt_wasm_dir() {
        return dir.join(format!("{crate_name}.wasm"));
    }

    test_target_dir(workspace_root)
        .join("wasm32-unknown-unknown")
        .join("release")
        .join(format!("{crate_name}.wasm"))
}

fn prebuilt_wasm_dir() -> Option<PathBuf> {
    env::var(PREBUILT_WASM_DIR_ENV).ok().map(PathBuf::from)
}

fn test_target_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join("target").join("pic-wasm")
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root")
}
