///
/// Wire-level endpoint names exposed by the canisters in this workspace.
/// Keep these synchronized with the candid interfaces under `canisters/`.
///

pub const ECHO: &str = "echo";
