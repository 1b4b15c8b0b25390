// src/health/mod.rs
mod checker;
mod snapshot;

pub use checker::{CheckReport, CredentialChecker};
pub use snapshot::EnvSnapshot;

use crate::config::CheckConfig;
use crate::protocol::{PluginRequest, PluginResponse};

/// Run the credential check against an environment snapshot and assemble
/// the response, echoing the request's `command` field verbatim.
pub fn run_check(
    request: &PluginRequest,
    snapshot: &EnvSnapshot,
    config: &CheckConfig,
) -> PluginResponse {
    let checker = CredentialChecker::new(config.clone());
    let report = checker.check(snapshot);
    PluginResponse::new(request.command.clone(), report.missing)
}
