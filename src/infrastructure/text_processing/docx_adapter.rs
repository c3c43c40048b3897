use std::io::{Cursor, Read};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::{Captures, Regex};
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const DOCUMENT_PART: &str = "word/document.xml";

static XML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/)?([A-Za-z][\w:.-]*)[^>]*?(/)?>").expect("valid regex"));

static XML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#x([0-9A-Fa-f]+)|#([0-9]+)|(lt|gt|amp|quot|apos));").expect("valid regex")
});

/// Raw text from Word documents: the main document part, one line per paragraph.
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn extract_raw_text(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not a valid DOCX archive: {e}"))
        })?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}")))?
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
            })?;

        Ok(document_xml_to_text(&xml))
    }
}

/// Collects `w:t` runs, turning paragraph ends, breaks and tabs into whitespace.
fn document_xml_to_text(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_text_run = false;
    let mut cursor = 0;

    for caps in XML_TAG.captures_iter(xml) {
        let Some(tag) = caps.get(0) else { continue };

        if in_text_run {
            out.push_str(&unescape_xml(&xml[cursor..tag.start()]));
        }
        cursor = tag.end();

        let closing = caps.get(1).is_some();
        let self_closing = caps.get(3).is_some();
        match (&caps[2], closing, self_closing) {
            ("w:t", false, false) => in_text_run = true,
            ("w:t", true, _) => in_text_run = false,
            ("w:tab", false, _) => out.push('\t'),
            ("w:br" | "w:cr", false, _) => out.push('\n'),
            ("w:p", true, _) | ("w:p", false, true) => out.push('\n'),
            _ => {}
        }
    }

    out.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn unescape_xml(text: &str) -> String {
    XML_ENTITY
        .replace_all(text, |caps: &Captures| {
            let code = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok()
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse().ok()
            } else {
                None
            };

            if let Some(code) = code {
                return char::from_u32(code).map(String::from).unwrap_or_default();
            }

            match caps.get(3).map(|m| m.as_str()) {
                Some("lt") => "<",
                Some("gt") => ">",
                Some("amp") => "&",
                Some("quot") => "\"",
                Some("apos") => "'",
                _ => "",
            }
            .to_string()
        })
        .into_owned()
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.clone(),
            ));
        }

        let bytes = data.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_raw_text(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
