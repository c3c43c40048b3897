/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: &str, level: &str, enable_json: bool) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: enable_json
                || std::env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            default_filter: format!(
                "{},docchat=debug,tower_http=debug",
                level.trim()
            ),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "Local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            default_filter: "info,docchat=debug,tower_http=debug".to_string(),
        }
    }
}
