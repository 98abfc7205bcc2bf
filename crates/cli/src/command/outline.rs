use super::open_document;
use anyhow::Result;
use clap::Parser;
use quill_core::{extract_headings, HeadingEntry};
use std::io::Write;
use std::path::PathBuf;

/// Print the heading outline, indented by level.
#[derive(Parser, Debug, Clone)]
pub struct Outline {
    /// Document to scan.
    file: PathBuf,

    /// Print the headings as a JSON array.
    #[clap(long)]
    json: bool,
}

impl Outline {
    pub fn run(&self) -> Result<()> {
        let document = open_document(&self.file)?;
        let headings = extract_headings(&document.text);
        self.write(&headings, &mut std::io::stdout().lock())
    }

    fn write(&self, headings: &[HeadingEntry], out: &mut impl Write) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(headings)?)?;
            return Ok(());
        }

        for HeadingEntry { level, text, line } in headings {
            let indent = "  ".repeat(level.saturating_sub(1));
            writeln!(out, "{line:>5}: {indent}{text}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_outline() {
        let outline = Outline {
            file: PathBuf::from("unused.md"),
            json: false,
        };
        let mut out = Vec::new();
        outline
            .write(&extract_headings("# A\n## B\nC\n---"), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "    1: A\n    2:   B\n    3:   C\n"
        );
    }
}
