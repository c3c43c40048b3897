use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

pub const CSV_PREVIEW_ROWS: usize = 20;

/// Renders a CSV upload as a row-count summary plus the first rows verbatim.
pub struct CsvAdapter;

impl CsvAdapter {
    pub fn render(text: &str) -> Option<String> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let total = rows.len();

        if total == 0 {
            return None;
        }

        let shown = total.min(CSV_PREVIEW_ROWS);
        let mut out = format!(
            "CSV file with {} rows. Preview (first {} rows):\n{}",
            total,
            shown,
            rows[..shown].join("\n")
        );

        if total > CSV_PREVIEW_ROWS {
            out.push_str(&format!("\n... and {} more rows", total - CSV_PREVIEW_ROWS));
        }

        Some(out)
    }
}

#[async_trait]
impl FileLoader for CsvAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Csv {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.clone(),
            ));
        }

        Self::render(&String::from_utf8_lossy(data))
            .ok_or_else(|| FileLoaderError::NoTextFound(document.filename.clone()))
    }
}
