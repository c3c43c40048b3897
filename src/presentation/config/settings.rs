use std::collections::HashMap;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use config::Environment as EnvironmentSource;
use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_GEMINI_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};

use super::Environment;

/// Well-known variables outside the `APP__` namespace and the keys they override.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SERVER_PORT", "server.port"),
    ("OLLAMA_API_URL", "local.url"),
    ("OLLAMA_MODEL", "local.model"),
    ("GEMINI_API_URL", "cloud.url"),
    ("GEMINI_API_KEY", "cloud.api_key"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub local: LocalModelSettings,
    pub cloud: CloudModelSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalModelSettings {
    pub url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudModelSettings {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<Environment>` (optional), `APP__*`
    /// variables and the well-known overrides, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(environment, &vars)
    }

    pub fn from_vars(
        environment: Environment,
        vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .source(Some(
                        vars.iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .collect(),
                    )),
            );

        for (var, key) in ENV_OVERRIDES {
            let value = vars.get(*var).filter(|v| !v.trim().is_empty()).cloned();
            builder = builder.set_override_option(*key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_body_mb", 60)?
            .set_default("local.url", DEFAULT_OLLAMA_URL)?
            .set_default("local.model", DEFAULT_OLLAMA_MODEL)?
            .set_default("cloud.url", DEFAULT_GEMINI_URL)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.server.max_body_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_body_mb: 60,
            },
            local: LocalModelSettings {
                url: DEFAULT_OLLAMA_URL.to_string(),
                model: DEFAULT_OLLAMA_MODEL.to_string(),
            },
            cloud: CloudModelSettings {
                url: DEFAULT_GEMINI_URL.to_string(),
                api_key: None,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
        }
    }
}
