//! Document type detection and loading.
//!
//! [`DocumentType`] is the single source of truth for the file extensions the
//! editor opens. Content is plain UTF-8 on disk, read verbatim.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Error type for loading documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error while reading the file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of [`DocumentType::all_extensions`].
    #[error("unsupported document type: {0}")]
    UnsupportedType(PathBuf),
}

/// Supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Markdown documents, which get a live preview.
    Markdown,
    /// Plain text documents.
    PlainText,
}

static ALL_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    DocumentType::ALL
        .iter()
        .flat_map(|doc_type| doc_type.extensions().iter().copied())
        .collect()
});

impl DocumentType {
    /// All supported document types.
    pub const ALL: &'static [DocumentType] = &[Self::Markdown, Self::PlainText];

    /// Detect document type from file extension (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_core::DocumentType;
    ///
    /// assert_eq!(DocumentType::from_extension("MD"), Some(DocumentType::Markdown));
    /// assert_eq!(DocumentType::from_extension("txt"), Some(DocumentType::PlainText));
    /// assert_eq!(DocumentType::from_extension("pdf"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.is_empty() {
            return None;
        }
        let ext_lower = ext.to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|doc_type| doc_type.extensions().contains(&ext_lower.as_str()))
            .copied()
    }

    /// Detect document type from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Lowercase file extensions for this document type.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Markdown => &["md", "markdown", "mdown", "mkdn", "mkd"],
            Self::PlainText => &["txt", "text"],
        }
    }

    /// All supported extensions across all document types.
    pub fn all_extensions() -> &'static [&'static str] {
        ALL_EXTENSIONS.as_slice()
    }

    /// Whether the markdown preview applies to this type.
    pub fn supports_preview(&self) -> bool {
        matches!(self, Self::Markdown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::PlainText => "text",
        }
    }
}

/// An open document: where it lives, what it is and its current text.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: Option<PathBuf>,
    pub kind: DocumentType,
    pub text: String,
}

impl Document {
    /// Reads the document at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let kind = DocumentType::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedType(path.to_path_buf()))?;
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), kind = kind.name(), bytes = text.len(), "Opened document");

        Ok(Self {
            path: Some(path.to_path_buf()),
            kind,
            text,
        })
    }

    /// An unsaved document holding `text`.
    pub fn from_text(kind: DocumentType, text: impl Into<String>) -> Self {
        Self {
            path: None,
            kind,
            text: text.into(),
        }
    }

    /// Re-reads the text from disk, keeping the type.
    ///
    /// Documents without a path are left untouched.
    pub fn reload(&mut self) -> Result<(), DocumentError> {
        if let Some(path) = &self.path {
            self.text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
