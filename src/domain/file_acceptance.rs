use super::document::{DOCX_MIME, extension_of};

pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const ACCEPTED_MIME_TYPES: &[&str] = &[
    "text/plain",
    "text/csv",
    "text/markdown",
    "text/html",
    "text/css",
    "text/javascript",
    "application/javascript",
    "application/json",
    "application/xml",
    "text/xml",
    "application/pdf",
    "application/msword",
    DOCX_MIME,
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
];

const ACCEPTED_EXTENSIONS: &[&str] = &[
    "txt", "csv", "md", "markdown", "html", "htm", "css", "js", "json", "xml", "pdf", "doc",
    "docx", "png", "jpg", "jpeg", "gif", "webp",
];

/// Reason a candidate file was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("{name} is not a supported file type")]
    UnsupportedType { name: String },
    #[error("{name} is too large ({size} bytes, max {max} bytes)")]
    TooLarge { name: String, size: u64, max: u64 },
}

/// Allow-list and size ceiling applied before a file is queued for upload.
#[derive(Debug, Clone)]
pub struct FileAcceptancePolicy {
    pub max_file_size_bytes: u64,
}

impl Default for FileAcceptancePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl FileAcceptancePolicy {
    pub fn check(&self, name: &str, mime_type: &str, size: u64) -> Result<(), FileRejection> {
        if !Self::is_accepted_type(name, mime_type) {
            return Err(FileRejection::UnsupportedType {
                name: name.to_string(),
            });
        }

        if size > self.max_file_size_bytes {
            return Err(FileRejection::TooLarge {
                name: name.to_string(),
                size,
                max: self.max_file_size_bytes,
            });
        }

        Ok(())
    }

    fn is_accepted_type(name: &str, mime_type: &str) -> bool {
        let mime = mime_type.trim().to_ascii_lowercase();
        if ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
            return true;
        }

        extension_of(name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }
}
