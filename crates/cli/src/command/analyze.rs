use anyhow::Result;
use clap::Parser;
use quill_config::Settings;
use quill_core::{analyze, Document, HostMessage};
use std::io::Write;
use std::path::PathBuf;

/// Print the host message for a document: counts, status line, outline and preview.
#[derive(Parser, Debug, Clone)]
pub struct Analyze {
    /// Document to analyze.
    file: PathBuf,
}

impl Analyze {
    pub fn run(&self, settings: &Settings) -> Result<()> {
        let document = super::open_document(&self.file)?;
        let message = host_message(&document, settings);
        writeln!(std::io::stdout().lock(), "{}", serde_json::to_string(&message)?)?;
        Ok(())
    }
}

/// Analyzes `document` with the options of `settings`.
pub(crate) fn host_message(document: &Document, settings: &Settings) -> HostMessage {
    analyze(
        &document.text,
        document.kind,
        &settings.word_count,
        settings.preview.enable,
    )
    .into_host_message(
        document
            .path
            .as_ref()
            .map(|path| path.display().to_string()),
    )
}
