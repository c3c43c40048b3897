mod composite_file_loader;
mod csv_adapter;
mod docx_adapter;
mod extractor_factory;
mod json_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use csv_adapter::{CSV_PREVIEW_ROWS, CsvAdapter};
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::ExtractorFactory;
pub use json_adapter::{INVALID_JSON_LABEL, JSON_PRETTY_LIMIT, JSON_RAW_LIMIT, JsonAdapter};
pub use pdf_adapter::{LimitedPdfAdapter, PdfAdapter};
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::{normalize_plain_text, sanitize_extracted_text};
