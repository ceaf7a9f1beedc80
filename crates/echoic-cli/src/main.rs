//! Operator CLI for Echoic.
//!
//! Resolves canister endpoints from the deployment manifest, validates
//! manifests, and runs the echo round-trip against a self-hosted PocketIC
//! replica. `RUST_LOG` controls verbosity; the default filter is
//! `echoic=info`.

use clap::{Parser, Subcommand};
use echoic::{
    config::{ConfigError, ProbeConfig},
    endpoint::CanisterEndpoint,
    ids::{CanisterName, Network},
    manifest::{DeploymentManifest, ManifestError},
    probe::{ProbeError, echo_roundtrip},
    transport::TransportError,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};
use thiserror::Error as ThisError;
use tracing::info;
use tracing_subscriber::EnvFilter;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "echoic", version, about = "End-to-end echo probe for Internet Computer canisters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a canister endpoint from the deployment manifest
    Resolve {
        /// Logical canister name (defaults to the configured canister)
        #[arg(long)]
        canister: Option<CanisterName>,

        /// Network to resolve for (defaults to the configured network)
        #[arg(long)]
        network: Option<Network>,

        /// Manifest path (defaults to `.dfx/local/canister_ids.json`)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Config path (defaults to `echoic.toml` when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that every id in the deployment manifest parses
    Validate {
        /// Manifest path (defaults to `.dfx/local/canister_ids.json`)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Install an echo canister on a fresh PocketIC replica and round-trip it
    Probe {
        /// Path to the echo canister wasm artifact
        #[arg(long)]
        wasm: PathBuf,

        /// Payload to send through the canister
        #[arg(long, default_value = "hello")]
        payload: String,
    },
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Echoic(#[from] echoic::Error),

    #[error("cannot read wasm at {path}: {source}")]
    WasmRead { path: PathBuf, source: io::Error },
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Echoic(err.into())
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        Self::Echoic(err.into())
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        Self::Echoic(err.into())
    }
}

impl From<TransportError> for CliError {
    fn from(err: TransportError) -> Self {
        Self::Echoic(err.into())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("echoic=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Resolve {
            canister,
            network,
            manifest,
            config,
        } => resolve(canister, network, manifest, config),
        Command::Validate { manifest } => validate(manifest),
        Command::Probe { wasm, payload } => probe(&wasm, &payload),
    }
}

fn resolve(
    canister: Option<CanisterName>,
    network: Option<Network>,
    manifest_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let manifest = load_manifest(manifest_path)?;

    let canister = canister.unwrap_or(config.canister);
    let network = network.unwrap_or(config.network);
    let endpoint = CanisterEndpoint::resolve(&manifest, &canister, network, config.endpoint)?;

    println!("{endpoint}");

    Ok(())
}

fn validate(manifest_path: Option<PathBuf>) -> Result<(), CliError> {
    let manifest = load_manifest(manifest_path)?;
    manifest.validate()?;

    println!("manifest ok: {} canister(s)", manifest.len());

    Ok(())
}

fn probe(wasm_path: &Path, payload: &str) -> Result<(), CliError> {
    let wasm = fs::read(wasm_path).map_err(|source| CliError::WasmRead {
        path: wasm_path.to_path_buf(),
        source,
    })?;

    info!("starting PocketIC replica");
    let pic = echoic_testkit::pic();

    let canister_id = pic.create_and_install_canister(wasm)?;
    info!("installed echo canister as {canister_id}");

    let reply = echo_roundtrip(&pic, canister_id, payload)?;
    println!("echo ok: \"{reply}\"");

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<ProbeConfig, CliError> {
    let config = match path {
        Some(path) => ProbeConfig::load_from(path)?,
        None => ProbeConfig::load_default()?,
    };

    Ok(config)
}

fn load_manifest(path: Option<PathBuf>) -> Result<DeploymentManifest, CliError> {
    let manifest = match path {
        Some(path) => DeploymentManifest::load_from(path)?,
        None => DeploymentManifest::load_default()?,
    };

    Ok(manifest)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
