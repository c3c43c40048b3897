use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

use super::text_sanitizer::normalize_plain_text;

/// Fallback loader: everything without a dedicated extractor is read as text.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let text = normalize_plain_text(&String::from_utf8_lossy(data));

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
