//! Error types for the claimsum-core library.

use thiserror::Error;

/// Main error type for the claimsum library.
#[derive(Error, Debug)]
pub enum ClaimsumError {
    /// Document reading or text extraction error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Extraction profile error.
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Output rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to document text extraction.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension maps to no supported format.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Failed to read the file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    PdfParse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    PdfEncrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    PdfNoPages,

    /// Failed to extract text from the document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The DOCX archive is missing or malformed.
    #[error("DOCX archive error: {0}")]
    DocxArchive(String),

    /// An image was supplied but no OCR backend is registered.
    #[error("image input requires an OCR backend")]
    OcrUnavailable,
}

/// Errors related to extraction profiles.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The profile file does not exist.
    #[error("profile not found: {0}")]
    NotFound(String),

    /// The profile file is not valid JSON of the expected shape.
    #[error("malformed profile: {0}")]
    Malformed(#[from] serde_json::Error),

    /// I/O error while reading or writing a profile.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to summary rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No renderer is registered for the requested format.
    #[error("no renderer available for {0}")]
    Unavailable(String),

    /// A registered renderer failed.
    #[error("renderer failed: {0}")]
    Failed(String),
}

/// Result type for the claimsum library.
pub type Result<T> = std::result::Result<T, ClaimsumError>;
