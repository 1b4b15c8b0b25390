// src/health/checker.rs
use crate::config::CheckConfig;
use crate::health::EnvSnapshot;
use tracing::{debug, info, warn};

pub struct CredentialChecker {
    config: CheckConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub ok: bool,
    pub missing: Vec<String>,
}

impl CredentialChecker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn required(&self) -> &[String] {
        &self.config.required
    }

    /// Check every required variable against the snapshot.
    ///
    /// The missing-list preserves the declared order of the required list.
    /// An empty-string value counts as missing. A missing credential is a
    /// normal result, never an error.
    pub fn check(&self, snapshot: &EnvSnapshot) -> CheckReport {
        let mut missing = Vec::new();

        for name in &self.config.required {
            if snapshot.is_present(name) {
                debug!("credential {} is present", name);
            } else {
                warn!("credential {} is unset or empty", name);
                missing.push(name.clone());
            }
        }

        let ok = missing.is_empty();
        info!(
            "credential check complete: {} required, {} missing",
            self.config.required.len(),
            missing.len()
        );

        CheckReport { ok, missing }
    }
}
