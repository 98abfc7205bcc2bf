//! Heading outline for the navigation panel.
//!
//! Three heading styles are recognized, checked in this order on every line:
//!
//! 1. ATX headings: `# Title` .. `###### Title`
//! 2. Setext headings: a non-blank line underlined with `===` (level 1) or `---` (level 2)
//! 3. Numbered or lettered section titles: `1. Title`, `B. Title` (level 3)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ATX_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static SETEXT_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^=+$").unwrap());
static SETEXT_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+$").unwrap());
static NUMBERED_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+|[A-Z])\.\s+(.+)$").unwrap());

/// Numbered lines at least this long are treated as prose, not as titles.
const MAX_NUMBERED_SECTION_LEN: usize = 100;

/// A heading in the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level, 1..=6.
    pub level: usize,
    /// Heading text, trimmed.
    pub text: String,
    /// Line number used to jump to the heading.
    ///
    /// 1-based for ATX and numbered headings. For setext headings this is the
    /// 0-based index of the underline, i.e. the 1-based line of the title.
    pub line: usize,
}

impl HeadingEntry {
    fn new(level: usize, text: &str, line: usize) -> Self {
        Self {
            level,
            text: text.trim().to_string(),
            line,
        }
    }
}

/// Splits `text` on `\n`, dropping the `\r` of CRLF line endings.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn parse_line(line: &str, prev_line: Option<&str>, idx: usize) -> Option<HeadingEntry> {
    if let Some(caps) = ATX_HEADING.captures(line) {
        return Some(HeadingEntry::new(caps[1].len(), &caps[2], idx + 1));
    }

    if let Some(prev) = prev_line.filter(|prev| !prev.trim().is_empty()) {
        if SETEXT_H1.is_match(line) {
            return Some(HeadingEntry::new(1, prev, idx));
        }
        if SETEXT_H2.is_match(line) {
            return Some(HeadingEntry::new(2, prev, idx));
        }
    }

    if line.chars().count() < MAX_NUMBERED_SECTION_LEN {
        if let Some(caps) = NUMBERED_SECTION.captures(line) {
            return Some(HeadingEntry::new(3, &caps[2], idx + 1));
        }
    }

    None
}

/// Extract the heading outline of `text` in document order.
///
/// # Example
///
/// ```
/// use quill_core::outline::{extract_headings, HeadingEntry};
///
/// let headings = extract_headings("# H1\n## H2\n");
/// assert_eq!(headings[1], HeadingEntry { level: 2, text: "H2".into(), line: 2 });
/// ```
pub fn extract_headings(text: &str) -> Vec<HeadingEntry> {
    let mut headings = Vec::new();
    let mut prev_line = None;

    for (idx, line) in split_lines(text).enumerate() {
        if let Some(heading) = parse_line(line, prev_line, idx) {
            headings.push(heading);
        }
        prev_line = Some(line);
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: usize, text: &str, line: usize) -> HeadingEntry {
        HeadingEntry {
            level,
            text: text.to_string(),
            line,
        }
    }

    #[test]
    fn test_atx_headings() {
        assert_eq!(
            extract_headings("# H1\n## H2\n"),
            vec![heading(1, "H1", 1), heading(2, "H2", 2)]
        );
        assert_eq!(
            extract_headings("intro\n\n###### Deep   \n"),
            vec![heading(6, "Deep", 3)]
        );
    }

    #[test]
    fn test_atx_requires_space_and_at_most_six_hashes() {
        assert!(extract_headings("#NoSpace").is_empty());
        assert!(extract_headings("####### Seven").is_empty());
    }

    #[test]
    fn test_setext_headings() {
        assert_eq!(
            extract_headings("Title\n=====\n"),
            vec![heading(1, "Title", 1)]
        );
        assert_eq!(
            extract_headings("para\n\n  Sub title  \n---"),
            vec![heading(2, "Sub title", 3)]
        );
    }

    #[test]
    fn test_setext_needs_non_blank_previous_line() {
        assert!(extract_headings("\n===").is_empty());
        assert!(extract_headings("===").is_empty());
        assert!(extract_headings("   \n---").is_empty());
    }

    #[test]
    fn test_numbered_sections() {
        assert_eq!(
            extract_headings("1. Introduction\nB. Appendix\n"),
            vec![heading(3, "Introduction", 1), heading(3, "Appendix", 2)]
        );
        assert!(extract_headings("b. lowercase letter").is_empty());
        assert!(extract_headings("1.NoSpace").is_empty());
    }

    #[test]
    fn test_long_numbered_line_is_prose() {
        let long = format!("1. {}", "x".repeat(97));
        assert_eq!(long.len(), 100);
        assert!(extract_headings(&long).is_empty());

        let short = format!("1. {}", "x".repeat(96));
        assert_eq!(extract_headings(&short).len(), 1);
    }

    #[test]
    fn test_atx_wins_over_numbered() {
        assert_eq!(extract_headings("# 1. Intro"), vec![heading(1, "1. Intro", 1)]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            extract_headings("# A\r\nTitle\r\n===\r\n"),
            vec![heading(1, "A", 1), heading(1, "Title", 2)]
        );
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_headings("").is_empty());
        assert!(extract_headings("just some prose\nand more").is_empty());
    }
}
