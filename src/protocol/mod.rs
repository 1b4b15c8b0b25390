// src/protocol/mod.rs

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response message when every required variable is present.
pub const HEALTHY_MESSAGE: &str = "infra credentials healthy";
/// Response message when at least one required variable is absent or empty.
pub const UNHEALTHY_MESSAGE: &str = "missing infra credentials";

/// Request read from stdin. The only recognized field is `command`; any
/// other fields callers send along are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginRequest {
    #[serde(default)]
    pub command: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginResponse {
    pub ok: bool,
    pub message: String,
    pub data: ResponseData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseData {
    // Serialized as explicit null when the request carried no command.
    pub command: Value,
    pub missing: Vec<String>,
}

/// Parse raw stdin text into a request.
///
/// Empty or whitespace-only input is treated as the empty request `{}`.
/// Anything else must be valid JSON; a parse failure is fatal for the
/// process, not something to paper over with a default.
pub fn parse_request(raw: &str) -> Result<PluginRequest, CheckError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(PluginRequest::default());
    }
    Ok(serde_json::from_str(trimmed)?)
}

impl PluginResponse {
    pub fn new(command: Option<Value>, missing: Vec<String>) -> Self {
        let ok = missing.is_empty();
        let message = if ok { HEALTHY_MESSAGE } else { UNHEALTHY_MESSAGE };
        Self {
            ok,
            message: message.to_string(),
            data: ResponseData {
                command: command.unwrap_or(Value::Null),
                missing,
            },
        }
    }

    /// Compact single-object form for stdout.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
