use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, NormalizedFileContent, UploadedFile};

use super::prompt_assembler::PromptFile;

/// Hard per-file ceiling, truncation notice included.
pub const MAX_FILE_CHARS: usize = 4000;
pub const TRUNCATION_NOTICE: &str = "\n... [content truncated]";
pub const IMAGE_PLACEHOLDER_PHRASE: &str = "Base64 encoded image";

/// Converts uploads into bounded prompt text. Never fails: every extraction
/// error becomes a placeholder naming the file and the error.
pub struct FileNormalizer {
    loader: Arc<dyn FileLoader>,
}

impl FileNormalizer {
    pub fn new(loader: Arc<dyn FileLoader>) -> Self {
        Self { loader }
    }

    #[tracing::instrument(
        skip(self, file),
        fields(file_id = %file.id, filename = %file.name, declared_type = %file.mime_type)
    )]
    pub async fn normalize(&self, file: &UploadedFile) -> NormalizedFileContent {
        let document = Document::new(
            file.id,
            file.name.clone(),
            file.mime_type.clone(),
            file.size,
        );

        if document.content_type == ContentType::Image {
            return NormalizedFileContent::new(describe_image(&file.name, file.encoded_len()));
        }

        let text = match file.decode_bytes() {
            Ok(data) => match self.loader.extract_text(&data, &document).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "File extraction failed, using placeholder");
                    placeholder_for(&document, &e)
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "File payload could not be decoded");
                placeholder_for(&document, &FileLoaderError::Decode(e.to_string()))
            }
        };

        NormalizedFileContent::new(cap_length(text))
    }

    /// Normalizes files one after another, preserving submission order.
    pub async fn normalize_all(&self, files: &[UploadedFile]) -> Vec<PromptFile> {
        let mut normalized = Vec::with_capacity(files.len());
        for file in files {
            let content = self.normalize(file).await;
            normalized.push(PromptFile {
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
                content,
            });
        }
        normalized
    }
}

/// Images are never decoded; the prompt only learns the name and payload size.
pub fn describe_image(filename: &str, encoded_len: usize) -> String {
    format!(
        "[Image file: {} - {}, {} bytes]",
        filename, IMAGE_PLACEHOLDER_PHRASE, encoded_len
    )
}

fn placeholder_for(document: &Document, error: &FileLoaderError) -> String {
    match (error, document.content_type) {
        (FileLoaderError::NoTextFound(_), ContentType::Text) => {
            format!("[File {} is empty]", document.filename)
        }
        (FileLoaderError::NoTextFound(_), _) => {
            format!("[File {} contains no extractable text]", document.filename)
        }
        (FileLoaderError::Decode(_), _) => {
            format!("[Error decoding {}: {}]", document.filename, error)
        }
        _ => format!(
            "[Error extracting {} {}: {}]",
            document.content_type.as_str().to_ascii_uppercase(),
            document.filename,
            error
        ),
    }
}

/// Truncates to [`MAX_FILE_CHARS`] characters, counting the appended notice.
pub fn cap_length(text: String) -> String {
    if text.chars().count() <= MAX_FILE_CHARS {
        return text;
    }

    let keep = MAX_FILE_CHARS - TRUNCATION_NOTICE.chars().count();
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(TRUNCATION_NOTICE);
    truncated
}
