use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file picked by the user, held until the next send completes.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// Either UTF-8 text or a `data:<mime>;base64,<payload>` URL.
    pub content: String,
}

/// How the content of an [`UploadedFile`] is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePayload<'a> {
    Text(&'a str),
    Base64(&'a str),
}

impl UploadedFile {
    pub fn new(name: String, size: u64, mime_type: String, content: String) -> Self {
        Self {
            id: FileId::new(),
            name,
            size,
            mime_type,
            content,
        }
    }

    pub fn payload(&self) -> FilePayload<'_> {
        match self.content.strip_prefix("data:") {
            Some(rest) => match rest.split_once(',') {
                Some((header, body)) if header.ends_with(";base64") => FilePayload::Base64(body),
                Some((_, body)) => FilePayload::Text(body),
                None => FilePayload::Text(&self.content),
            },
            None => FilePayload::Text(&self.content),
        }
    }

    /// Length of the payload as transmitted, without any data-URL header.
    pub fn encoded_len(&self) -> usize {
        match self.payload() {
            FilePayload::Text(text) | FilePayload::Base64(text) => text.len(),
        }
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        match self.payload() {
            FilePayload::Text(text) => Ok(text.as_bytes().to_vec()),
            FilePayload::Base64(body) => {
                let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
                general_purpose::STANDARD.decode(compact)
            }
        }
    }

    pub fn to_descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            content: self.content.clone(),
            size: Some(self.size),
        }
    }
}

/// Wire shape of one `file_<i>` form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileDescriptor {
    pub fn into_uploaded_file(self) -> UploadedFile {
        let size = self.size.unwrap_or(self.content.len() as u64);
        UploadedFile::new(self.name, size, self.mime_type, self.content)
    }
}

/// Builds a base64 data URL for binary content.
pub fn to_data_url(mime_type: &str, data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(data)
    )
}
