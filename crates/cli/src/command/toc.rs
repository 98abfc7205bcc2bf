use super::open_document;
use anyhow::{Context, Result};
use clap::Parser;
use quill_core::toc::{find_toc_range, generate_toc, update_toc, TocConfig};
use std::io::Write;
use std::path::PathBuf;

/// Generate the table of contents of a markdown document.
#[derive(Parser, Debug, Clone)]
pub struct Toc {
    /// Markdown document to scan.
    file: PathBuf,

    /// Number of spaces per indent level.
    #[clap(long, default_value_t = 4)]
    indent: usize,

    /// Deepest heading level to include.
    #[clap(long)]
    max_level: Option<usize>,

    /// Plain titles without anchor links.
    #[clap(long)]
    no_link: bool,

    /// Replace the existing TOC block of the file in place.
    #[clap(long)]
    write: bool,
}

impl Toc {
    fn toc_config(&self) -> TocConfig {
        TocConfig {
            indent: self.indent,
            max_level: self.max_level,
            no_link: self.no_link,
            ..Default::default()
        }
    }

    pub fn run(&self) -> Result<()> {
        let document = open_document(&self.file)?;
        let config = self.toc_config();

        if !self.write {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            for line in generate_toc(&document.text, &config) {
                writeln!(lock, "{line}")?;
            }
            return Ok(());
        }

        if find_toc_range(&document.text).is_none() {
            tracing::warn!(path = %self.file.display(), "No TOC markers found, file left unchanged");
            return Ok(());
        }

        std::fs::write(&self.file, update_toc(&document.text, &config))
            .with_context(|| format!("failed to write {}", self.file.display()))?;

        tracing::info!(path = %self.file.display(), "Updated table of contents");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_updates_marker_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.md");
        std::fs::write(
            &path,
            "# Guide\n<!-- quill-toc -->\n<!-- /quill-toc -->\n## Install\n",
        )
        .unwrap();

        Toc {
            file: path.clone(),
            indent: 2,
            max_level: Some(2),
            no_link: false,
            write: true,
        }
        .run()
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Guide\n<!-- quill-toc -->\n\n* [Guide](#guide)\n  * [Install](#install)\n\n<!-- /quill-toc -->\n## Install\n"
        );
    }
}
