//! Document loading for the analyzer
//!
//! Plain-text files are read verbatim. PDF and Word are recognized but not
//! parsed: rather than fabricate contract text, loading them surfaces
//! [`IngestError::ParsingUnavailable`] so callers can ask for plain text.
//! Anything else is an unsupported file type.

use std::path::Path;
use thiserror::Error;

/// Recognized document kinds, dispatched on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain UTF-8 text (`.txt`)
    Text,
    /// PDF document (`.pdf`)
    Pdf,
    /// Word document (`.doc`, `.docx`)
    Word,
}

impl DocumentKind {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" => Some(DocumentKind::Text),
            "pdf" => Some(DocumentKind::Pdf),
            "doc" | "docx" => Some(DocumentKind::Word),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Text => "text",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Word => "Word",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors surfaced while loading a document
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type '{0}'; upload a PDF, Word document, or text file")]
    UnsupportedFile(String),

    #[error("{0} parsing is not available; provide the contract as plain text instead")]
    ParsingUnavailable(DocumentKind),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the text of a contract document from disk
pub fn read_document(path: &Path) -> Result<String, IngestError> {
    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        IngestError::UnsupportedFile(ext)
    })?;

    match kind {
        DocumentKind::Text => {
            let text = std::fs::read_to_string(path)?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
            Ok(text)
        }
        DocumentKind::Pdf | DocumentKind::Word => Err(IngestError::ParsingUnavailable(kind)),
    }
}
