//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::path::Path;
use tracing::debug;

use super::Result;
use crate::error::DocumentError;

/// Extract the embedded text layer from a PDF file.
///
/// The document is opened with lopdf first to reject encrypted or empty
/// files with a precise error; the text itself comes from pdf-extract.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut doc = Document::load_mem(&data).map_err(|e| DocumentError::PdfParse(e.to_string()))?;

    // Handle PDFs with empty password encryption
    let text_source = if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(DocumentError::PdfEncrypted);
        }
        debug!("decrypted PDF with empty password");
        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DocumentError::PdfParse(format!("failed to save decrypted PDF: {}", e)))?;
        decrypted
    } else {
        data
    };

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(DocumentError::PdfNoPages);
    }
    debug!("loaded PDF with {} pages", page_count);

    let text = pdf_extract::extract_text_from_mem(&text_source)
        .map_err(|e| DocumentError::TextExtraction(e.to_string()))?;
    Ok(text)
}
