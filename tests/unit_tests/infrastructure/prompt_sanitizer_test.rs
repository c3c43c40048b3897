use docchat::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Summarize the attached report";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "ø".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"ø".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_gemini_key_param_when_sanitizing_then_redacts_it() {
    let prompt = "calling generateContent?key=AIzaSecret123&alt=json";
    let result = sanitize_prompt(prompt);
    assert!(result.contains("key=[REDACTED]"));
    assert!(!result.contains("AIzaSecret123"));
    assert!(result.contains("&alt=json"));
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let prompt = "token=one and token=two";
    let result = sanitize_prompt(prompt);
    assert_eq!(result, "token=[REDACTED] and token=[REDACTED]");
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("Send request with api_key=secret123");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}
