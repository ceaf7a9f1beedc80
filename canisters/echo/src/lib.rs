//!
//! The echo canister. A single update endpoint that returns its argument
//! unchanged; the round-trip target the probe fires at.
//!

use ic_cdk::update;

#[update]
fn echo(message: String) -> String {
    message
}

ic_cdk::export_candid!();

///
/// TESTS
///
