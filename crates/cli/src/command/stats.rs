use super::open_document;
use anyhow::Result;
use clap::Parser;
use quill_config::Settings;
use quill_core::{count, format};
use std::io::Write;
use std::path::PathBuf;

/// Print the word-count status line using the display options of the settings.
#[derive(Parser, Debug, Clone)]
pub struct Stats {
    /// Document to count.
    file: PathBuf,

    /// Print the raw counts as JSON instead of the status line.
    #[clap(long)]
    json: bool,
}

impl Stats {
    pub fn run(&self, settings: &Settings) -> Result<()> {
        let document = open_document(&self.file)?;
        self.write(&document.text, settings, &mut std::io::stdout().lock())
    }

    fn write(&self, text: &str, settings: &Settings, out: &mut impl Write) -> Result<()> {
        let counts = count(text);
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&counts)?)?;
        } else {
            writeln!(out, "{}", format(&counts, &settings.word_count))?;
        }
        Ok(())
    }
}
