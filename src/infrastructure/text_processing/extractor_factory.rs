use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::{BackendKind, ContentType};

use super::composite_file_loader::CompositeFileLoader;
use super::csv_adapter::CsvAdapter;
use super::docx_adapter::DocxAdapter;
use super::json_adapter::JsonAdapter;
use super::pdf_adapter::{LimitedPdfAdapter, PdfAdapter};
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds the loader set for one backend. PDF fidelity is backend policy:
    /// the local backend extracts text, the cloud backend only notes the file.
    pub fn create(backend: BackendKind) -> CompositeFileLoader {
        let pdf: Arc<dyn FileLoader> = match backend {
            BackendKind::Local => Arc::new(PdfAdapter::new()),
            BackendKind::Cloud => Arc::new(LimitedPdfAdapter),
        };

        tracing::info!(backend = %backend, "Building file loaders");

        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let csv: Arc<dyn FileLoader> = Arc::new(CsvAdapter);
        let json: Arc<dyn FileLoader> = Arc::new(JsonAdapter);
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter);

        CompositeFileLoader::new(vec![
            (ContentType::Text, text),
            (ContentType::Csv, csv),
            (ContentType::Json, json),
            (ContentType::Docx, docx),
            (ContentType::Pdf, pdf),
        ])
    }
}
