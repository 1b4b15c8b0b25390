// src/config/mod.rs

use crate::error::CheckError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Required variables in the order they are reported when missing.
pub const DEFAULT_REQUIRED: [&str; 2] = ["AWS_PROFILE", "KUBECONFIG"];

/// Environment variable holding the path of an optional config file that
/// overrides the built-in required list.
pub const CONFIG_PATH_VAR: &str = "INFRA_CHECK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Ordered list of environment variables that must be set and non-empty.
    #[serde(default = "default_required")]
    pub required: Vec<String>,
}

fn default_required() -> Vec<String> {
    DEFAULT_REQUIRED.iter().map(ToString::to_string).collect()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
        }
    }
}

impl CheckConfig {
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.required.is_empty() {
            return Err(CheckError::InvalidConfig(
                "required variable list is empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.required {
            if name.trim().is_empty() {
                return Err(CheckError::InvalidConfig(
                    "required variable name is empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(CheckError::InvalidConfig(format!(
                    "duplicate required variable: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<CheckConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config: CheckConfig = if path.extension().and_then(|s| s.to_str()) == Some("yaml")
        || path.extension().and_then(|s| s.to_str()) == Some("yml")
    {
        serde_yaml::from_str(&contents).context("failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the effective configuration: a file named by `INFRA_CHECK_CONFIG`
/// when that variable is set, the built-in defaults otherwise.
pub async fn resolve() -> Result<CheckConfig> {
    match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) if !path.trim().is_empty() => load_config(&path).await,
        _ => Ok(CheckConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_declared_order() {
        let config = CheckConfig::default();
        assert_eq!(config.required, vec!["AWS_PROFILE", "KUBECONFIG"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_list_is_rejected() {
        let config = CheckConfig { required: vec![] };
        assert!(matches!(
            config.validate(),
            Err(CheckError::InvalidConfig(_))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let config = CheckConfig {
            required: vec!["AWS_PROFILE".to_string(), "AWS_PROFILE".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        let config = CheckConfig {
            required: vec!["  ".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn loads_yaml_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("check.yaml");
        tokio::fs::write(&path, "required:\n  - VAULT_ADDR\n  - AWS_PROFILE\n")
            .await
            .expect("write");
        let config = load_config(&path).await.expect("load");
        assert_eq!(config.required, vec!["VAULT_ADDR", "AWS_PROFILE"]);
    }

    #[tokio::test]
    async fn loads_json_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("check.json");
        tokio::fs::write(&path, r#"{"required": ["KUBECONFIG"]}"#)
            .await
            .expect("write");
        let config = load_config(&path).await.expect("load");
        assert_eq!(config.required, vec!["KUBECONFIG"]);
    }

    #[tokio::test]
    async fn invalid_override_fails_to_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("check.yaml");
        tokio::fs::write(&path, "required: []\n").await.expect("write");
        assert!(load_config(&path).await.is_err());
    }
}
