use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Full-fidelity PDF text extraction, page by page.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(page_index, error = %e, "Skipping unreadable PDF page");
                }
            }
        }

        Ok(pages)
    }
}

/// Placeholder-only PDF handling for backends that do not extract PDF text.
pub struct LimitedPdfAdapter;

#[async_trait]
impl FileLoader for LimitedPdfAdapter {
    async fn extract_text(
        &self,
        _data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.clone(),
            ));
        }

        Ok(format!(
            "[PDF file: {} ({} bytes) - PDF parsing limited on this backend; the document text is not available]",
            document.filename, document.size_bytes
        ))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            file_id = %document.id,
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.clone(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // The temp file is removed when `temp_file` drops, after the blocking task finishes.
        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let sanitized_pages: Vec<String> = pages
            .iter()
            .map(|p| sanitize_extracted_text(p))
            .filter(|t| !t.is_empty())
            .collect();

        if sanitized_pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(sanitized_pages.join("\n\n"))
    }
}
