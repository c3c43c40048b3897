use std::fmt;

use super::FileId;

/// Describes one uploaded file as seen by the text extractors.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: FileId,
    pub filename: String,
    pub declared_type: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

/// Closed set of file kinds the normalizer knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Image,
    Csv,
    Json,
    Pdf,
    Docx,
    Text,
}

pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

impl ContentType {
    /// Picks the content type from the declared MIME type, falling back to the
    /// filename extension. Anything unrecognised is treated as text.
    pub fn detect(mime: &str, filename: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        let extension = extension_of(filename);
        let ext = extension.as_deref();

        if mime.starts_with("image/") || ext.is_some_and(|e| IMAGE_EXTENSIONS.contains(&e)) {
            Self::Image
        } else if mime == "text/csv" || ext == Some("csv") {
            Self::Csv
        } else if mime == "application/json" || ext == Some("json") {
            Self::Json
        } else if mime == "application/pdf" || ext == Some("pdf") {
            Self::Pdf
        } else if mime == DOCX_MIME {
            Self::Docx
        } else {
            Self::Text
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
            Self::Docx => DOCX_MIME,
            Self::Text => "text/plain",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercased extension after the last dot, if the name has one.
pub fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() || ext.contains(['/', '\\']) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

impl Document {
    pub fn new(id: FileId, filename: String, declared_type: String, size_bytes: u64) -> Self {
        let content_type = ContentType::detect(&declared_type, &filename);
        Self {
            id,
            filename,
            declared_type,
            content_type,
            size_bytes,
        }
    }
}
