use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which model backend a chat request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Local,
    Cloud,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Cloud => "cloud",
        }
    }

    /// Path of the chat endpoint serving this backend.
    pub fn route(&self) -> &'static str {
        match self {
            BackendKind::Local => "/api/chat/local",
            BackendKind::Cloud => "/api/chat/cloud",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" | "ollama" => Ok(BackendKind::Local),
            "cloud" | "gemini" => Ok(BackendKind::Cloud),
            other => Err(format!(
                "Invalid backend: {}. Expected: local or cloud",
                other
            )),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
