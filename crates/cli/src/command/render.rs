use super::open_document;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Render a markdown document to an HTML fragment.
#[derive(Parser, Debug, Clone)]
pub struct Render {
    /// Markdown document to render.
    file: PathBuf,

    /// Write the HTML to this file instead of stdout.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

impl Render {
    pub fn run(&self) -> Result<()> {
        let document = open_document(&self.file)?;

        if !document.kind.supports_preview() {
            tracing::warn!(
                path = %self.file.display(),
                kind = document.kind.name(),
                "Rendering a document that is not markdown"
            );
        }

        let html = quill_core::render(&document.text);

        match &self.output {
            Some(output) => std::fs::write(output, html)
                .with_context(|| format!("failed to write {}", output.display()))?,
            None => writeln!(std::io::stdout().lock(), "{html}")?,
        }

        Ok(())
    }
}
