pub mod analyze;
pub mod outline;
pub mod render;
pub mod settings;
pub mod stats;
pub mod toc;
pub mod watch;

use anyhow::{Context, Result};
use quill_core::Document;
use std::path::Path;

/// Opens `path`, attaching the path to any error.
fn open_document(path: &Path) -> Result<Document> {
    Document::open(path).with_context(|| format!("failed to open {}", path.display()))
}
