use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

pub const JSON_PRETTY_LIMIT: usize = 3000;
pub const JSON_RAW_LIMIT: usize = 2000;
pub const INVALID_JSON_LABEL: &str = "[Invalid JSON - raw content]";
const JSON_TRUNCATION_NOTICE: &str = "\n... [JSON truncated]";

/// Pretty-prints JSON uploads; malformed documents pass through as labelled raw text.
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn render(text: &str) -> String {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => {
                let pretty = serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|_| text.to_string());
                if pretty.chars().count() > JSON_PRETTY_LIMIT {
                    let mut head: String = pretty.chars().take(JSON_PRETTY_LIMIT).collect();
                    head.push_str(JSON_TRUNCATION_NOTICE);
                    head
                } else {
                    pretty
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "JSON upload failed to parse, using raw content");
                let raw: String = text.chars().take(JSON_RAW_LIMIT).collect();
                format!("{}\n{}", INVALID_JSON_LABEL, raw)
            }
        }
    }
}

#[async_trait]
impl FileLoader for JsonAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Json {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.clone(),
            ));
        }

        Ok(Self::render(&String::from_utf8_lossy(data)))
    }
}
