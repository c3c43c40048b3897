use async_trait::async_trait;

use crate::domain::Document;

/// Turns the decoded bytes of one file into text.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("could not decode file content: {0}")]
    Decode(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
