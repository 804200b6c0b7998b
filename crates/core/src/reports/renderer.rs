//! Document rendering seam.

use super::error::ReportError;
use super::types::{RenderedDocument, ReportDocument};

/// Turns a [`ReportDocument`] into bytes (PDF, JSON, ...).
pub trait DocumentRenderer {
    /// File extension of the output, without the dot.
    fn extension(&self) -> &'static str;

    /// Encodes the document.
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ReportError>;

    /// Encodes the document and names the output after its suggested file name.
    fn render_named(&self, document: &ReportDocument) -> Result<RenderedDocument, ReportError> {
        let bytes = self.render(document)?;
        let stem = document
            .file_name
            .rsplit_once('.')
            .map_or(document.file_name.as_str(), |(stem, _)| stem);
        Ok(RenderedDocument {
            file_name: format!("{stem}.{}", self.extension()),
            bytes,
        })
    }
}

/// Serialises documents as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonRenderer {
    /// Renderer producing indented JSON.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ReportError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(document)?
        } else {
            serde_json::to_vec(document)?
        };
        Ok(bytes)
    }
}
