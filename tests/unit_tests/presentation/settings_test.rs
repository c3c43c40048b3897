use std::collections::HashMap;

use docchat::infrastructure::llm::{DEFAULT_GEMINI_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};
use docchat::presentation::{Environment, Settings};

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_no_variables_when_loading_then_uses_defaults() {
    let settings = Settings::from_vars(Environment::Test, &HashMap::new()).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.local.url, DEFAULT_OLLAMA_URL);
    assert_eq!(settings.local.model, DEFAULT_OLLAMA_MODEL);
    assert_eq!(settings.cloud.url, DEFAULT_GEMINI_URL);
    assert_eq!(settings.cloud.api_key, None);
    assert_eq!(settings.max_body_bytes(), 60 * 1024 * 1024);
}

#[test]
fn given_well_known_variables_when_loading_then_they_override_defaults() {
    let settings = Settings::from_vars(
        Environment::Test,
        &vars(&[
            ("SERVER_PORT", "8080"),
            ("OLLAMA_API_URL", "http://gpu-box:11434/api/generate"),
            ("OLLAMA_MODEL", "mistral"),
            ("GEMINI_API_KEY", "abc123"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.local.url, "http://gpu-box:11434/api/generate");
    assert_eq!(settings.local.model, "mistral");
    assert_eq!(settings.cloud.api_key.as_deref(), Some("abc123"));
}

#[test]
fn given_namespaced_variables_when_loading_then_nested_keys_are_set() {
    let settings = Settings::from_vars(
        Environment::Test,
        &vars(&[
            ("APP__SERVER__MAX_BODY_MB", "5"),
            ("APP__LOGGING__LEVEL", "debug"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.max_body_mb, 5);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn given_blank_api_key_when_loading_then_key_stays_unset() {
    let settings =
        Settings::from_vars(Environment::Test, &vars(&[("GEMINI_API_KEY", "  ")])).unwrap();

    assert_eq!(settings.cloud.api_key, None);
}

#[test]
fn given_well_known_and_namespaced_port_when_loading_then_well_known_wins() {
    let settings = Settings::from_vars(
        Environment::Test,
        &vars(&[("APP__SERVER__PORT", "4000"), ("SERVER_PORT", "5000")]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 5000);
}

#[test]
fn given_non_numeric_port_when_loading_then_fails() {
    let result = Settings::from_vars(Environment::Test, &vars(&[("SERVER_PORT", "eighty")]));

    assert!(result.is_err());
}
