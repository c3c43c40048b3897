mod backend_kind;
mod document;
mod file_acceptance;
mod message;
mod message_role;
mod normalized_content;
mod uploaded_file;

pub use backend_kind::BackendKind;
pub use document::{ContentType, DOCX_MIME, Document, extension_of};
pub use file_acceptance::{FileAcceptancePolicy, FileRejection, MAX_FILE_SIZE_BYTES};
pub use message::{ChatMessage, MessageId};
pub use message_role::MessageRole;
pub use normalized_content::NormalizedFileContent;
pub use uploaded_file::{FileDescriptor, FileId, FilePayload, UploadedFile, to_data_url};
