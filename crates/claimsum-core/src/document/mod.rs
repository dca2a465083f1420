//! Document text extraction for the supported upload formats.
//!
//! Each claim document is reduced to plain text before field extraction.
//! PDF and DOCX have built-in extractors; plain text passes through and
//! images need a caller-registered [`OcrBackend`].

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

use std::path::Path;

use crate::error::DocumentError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Upload formats understood by the text extraction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF with an embedded text layer.
    Pdf,
    /// Word document (zip archive with XML body).
    Docx,
    /// Plain UTF-8 text.
    Text,
    /// Raster image; handled by an OCR backend when one is registered.
    Image,
}

impl DocumentFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" | "text" | "md" | "log" => Some(DocumentFormat::Text),
            "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" => Some(DocumentFormat::Image),
            _ => None,
        }
    }
}

/// OCR hook for image uploads. The library ships no OCR engine; hosts that
/// need scanned-image support register their own backend.
pub trait OcrBackend {
    /// Recognize text in the given image file.
    fn recognize(&self, path: &Path) -> Result<String>;
}

/// Extract raw text from a document, dispatching on the detected format.
pub fn extract_text(path: &Path, ocr: Option<&dyn OcrBackend>) -> Result<String> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)");
        DocumentError::UnsupportedFormat(ext.to_string())
    })?;

    match format {
        DocumentFormat::Text => {
            let data = std::fs::read(path).map_err(|e| DocumentError::Read {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(String::from_utf8_lossy(&data).into_owned())
        }
        DocumentFormat::Pdf => extract_pdf_text(path),
        DocumentFormat::Docx => extract_docx_text(path),
        DocumentFormat::Image => match ocr {
            Some(backend) => backend.recognize(path),
            None => Err(DocumentError::OcrUnavailable),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("claim.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("form.docx")),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.txt")),
            Some(DocumentFormat::Text)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("scan.jpeg")),
            Some(DocumentFormat::Image)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("sheet.xlsx")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_plain_text_passthrough() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Policy No: ABC-123\nInsured Name: Ravi").unwrap();

        let text = extract_text(file.path(), None).unwrap();
        assert!(text.contains("Policy No: ABC-123"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = extract_text(Path::new("claim.xlsx"), None).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(ref e) if e == "xlsx"));
    }

    #[test]
    fn test_image_without_ocr_backend() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let err = extract_text(file.path(), None).unwrap_err();
        assert!(matches!(err, DocumentError::OcrUnavailable));
    }

    #[test]
    fn test_image_with_ocr_backend() {
        struct FixedOcr;
        impl OcrBackend for FixedOcr {
            fn recognize(&self, _path: &Path) -> Result<String> {
                Ok("Claim No: 42".to_string())
            }
        }

        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let text = extract_text(file.path(), Some(&FixedOcr)).unwrap();
        assert_eq!(text, "Claim No: 42");
    }
}
