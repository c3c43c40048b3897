const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: &[(&str, &str)] = &[
    ("Bearer ", "Bearer [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("key=", "key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Shortens user-supplied text for log lines and masks credential-looking values.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for (pattern, replacement) in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let idx = search_from + found;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            if result[value_start..end].starts_with("[REDACTED]") {
                search_from = end;
                continue;
            }

            result.replace_range(idx..end, replacement);
            search_from = idx + replacement.len();
        }
    }

    result
}
