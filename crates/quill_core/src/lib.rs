//! Text analysis pipeline of the quill editor.
//!
//! Every function in this crate takes the raw document text (and, where
//! relevant, a read-only configuration record) and returns a fresh value.
//! Nothing is cached between calls, so the engines can be invoked on every
//! content change from any thread.
//!
//! # Modules
//!
//! - [`stats`] - Word, character, line and paragraph counting plus the status line formatter
//! - [`outline`] - Heading extraction for the navigation panel
//! - [`render`] - Lightweight markdown to HTML conversion for the live preview
//! - [`toc`] - Table of contents generation from the extracted outline
//! - [`document`] - Document type detection and loading
//! - [`analysis`] - One-shot analysis snapshot handed to the host on each edit

pub mod analysis;
pub mod document;
pub mod outline;
pub mod render;
pub mod stats;
pub mod toc;

// Re-export commonly used types at crate root
pub use analysis::{analyze, Analysis, HostMessage};
pub use document::{Document, DocumentError, DocumentType};
pub use outline::{extract_headings, HeadingEntry};
pub use render::render;
pub use stats::{count, format, TextCounts, WordCountDisplayOptions};
pub use toc::{find_toc_range, generate_toc, slugify, update_toc, TocConfig};
