//! Binary output rendering for finished reports.
//!
//! The library renders reports as plain text; PDF, DOCX and PPTX output
//! depend on document libraries the host may or may not carry, so those
//! formats are a registry of host-supplied renderers. An unregistered
//! format fails with [`RenderError::Unavailable`] and the caller drops
//! that download option instead of aborting the session.

use std::collections::HashMap;

use crate::error::RenderError;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Download formats produced by registered renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderFormat {
    Pdf,
    Docx,
    Pptx,
}

impl RenderFormat {
    pub fn label(&self) -> &'static str {
        match self {
            RenderFormat::Pdf => "PDF",
            RenderFormat::Docx => "DOCX",
            RenderFormat::Pptx => "PPTX",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Pdf => "pdf",
            RenderFormat::Docx => "docx",
            RenderFormat::Pptx => "pptx",
        }
    }

    pub fn all() -> &'static [RenderFormat] {
        &[RenderFormat::Pdf, RenderFormat::Docx, RenderFormat::Pptx]
    }
}

/// Renders a finished report into one binary format.
pub trait SummaryRenderer {
    fn render(&self, content: &str) -> Result<Vec<u8>>;
}

/// Registry of host-supplied renderers. Empty by default.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<RenderFormat, Box<dyn SummaryRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, format: RenderFormat, renderer: Box<dyn SummaryRenderer>) {
        self.renderers.insert(format, renderer);
    }

    pub fn is_available(&self, format: RenderFormat) -> bool {
        self.renderers.contains_key(&format)
    }

    /// Render `content` in the given format.
    pub fn render(&self, format: RenderFormat, content: &str) -> Result<Vec<u8>> {
        match self.renderers.get(&format) {
            Some(renderer) => renderer.render(content),
            None => Err(RenderError::Unavailable(format.label().to_string())),
        }
    }
}
