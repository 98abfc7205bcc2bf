//! Everything the host refreshes on a content change, computed in one call.
//!
//! The host serializes [`HostMessage`] to JSON and hands it to the UI, which
//! replaces the status line, the outline panel and the preview pane wholesale.

use crate::document::DocumentType;
use crate::outline::{extract_headings, HeadingEntry};
use crate::render::render;
use crate::stats::{count, format, TextCounts, WordCountDisplayOptions};
use serde::{Deserialize, Serialize};

/// Result of analyzing one version of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub counts: TextCounts,
    /// Status line text, see [`crate::stats::format`].
    pub status: String,
    pub headings: Vec<HeadingEntry>,
    /// Rendered HTML, only for markdown documents with the preview enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Analyze `text` for the status line, the outline and optionally the preview.
///
/// # Example
///
/// ```
/// use quill_core::{analyze, DocumentType, WordCountDisplayOptions};
///
/// let analysis = analyze("# Notes\n\nhello", DocumentType::Markdown, &WordCountDisplayOptions::default(), true);
/// assert_eq!(analysis.headings.len(), 1);
/// assert_eq!(analysis.preview.as_deref(), Some("<h1>Notes</h1>\n\n<p>hello</p>"));
/// ```
pub fn analyze(
    text: &str,
    kind: DocumentType,
    options: &WordCountDisplayOptions,
    preview: bool,
) -> Analysis {
    let counts = count(text);
    let status = format(&counts, options);
    let headings = extract_headings(text);
    let preview = (preview && kind.supports_preview()).then(|| render(text));

    tracing::debug!(
        words = counts.total_words,
        headings = headings.len(),
        preview = preview.is_some(),
        "Analyzed document"
    );

    Analysis {
        counts,
        status,
        headings,
        preview,
    }
}

impl Analysis {
    /// Wrap the analysis into the message sent to the host.
    pub fn into_host_message(self, file_path: Option<String>) -> HostMessage {
        HostMessage::Update {
            file_path,
            analysis: self,
        }
    }
}

/// Messages sent from the analysis pipeline to the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Replace the status line, outline and preview.
    Update {
        #[serde(rename = "filePath", skip_serializing_if = "Option::is_none")]
        file_path: Option<String>,
        #[serde(flatten)]
        analysis: Analysis,
    },
    /// The document could not be read; the UI keeps its previous content.
    Error { message: String },
}
