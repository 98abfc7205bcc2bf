//! Table of contents generation from the document outline.
//!
//! This module provides functionality to:
//! - Format outline entries as a markdown bullet list with anchor links
//! - Find and replace an existing TOC block delimited by marker comments
//! - Generate URL-safe slugs from heading text

use crate::outline::{extract_headings, split_lines, HeadingEntry};
use once_cell::sync::Lazy;
use regex::Regex;

pub const TOC_START_MARKER: &str = "<!-- quill-toc -->";
pub const TOC_END_MARKER: &str = "<!-- /quill-toc -->";

static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*)\](.*)").unwrap());

/// Converts heading text to a URL-safe anchor.
///
/// Letters and digits of any script are kept, separators become `-` and
/// everything else, backticks included, is dropped.
///
/// # Example
///
/// ```
/// use quill_core::toc::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("API Reference (v2)"), "api-reference-v2");
/// assert_eq!(slugify("中文 标题"), "中文-标题");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '_' {
            // Leading and repeated separators collapse into a single `-`.
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    slug
}

/// Configuration for table of contents generation.
#[derive(Debug, Clone)]
pub struct TocConfig {
    /// Bullet character for list items (default: "*")
    pub bullet: String,
    /// Number of spaces per indent level (default: 4)
    pub indent: usize,
    /// Shallowest heading level to include (default: 1)
    pub min_level: usize,
    /// Deepest heading level to include (default: None, include all)
    pub max_level: Option<usize>,
    /// If true, generate plain text without links (default: false)
    pub no_link: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            bullet: String::from("*"),
            indent: 4,
            min_level: 1,
            max_level: None,
            no_link: false,
        }
    }
}

/// Formats one outline entry as a TOC line, `None` if its level is filtered out.
pub fn format_entry(heading: &HeadingEntry, config: &TocConfig) -> Option<String> {
    if heading.level < config.min_level || config.max_level.is_some_and(|max| heading.level > max)
    {
        return None;
    }

    let indent_before_bullet = " "
        .repeat(config.indent)
        .repeat(heading.level - config.min_level);
    let bullet = &config.bullet;
    let indent_after_bullet = " ".repeat(config.indent.saturating_sub(1));
    let prefix = format!("{indent_before_bullet}{bullet}{indent_after_bullet}");

    if config.no_link {
        return Some(format!("{prefix}{}", heading.text));
    }

    // A heading that is itself a link shows the link label.
    let title = MARKDOWN_LINK
        .captures(&heading.text)
        .and_then(|caps| caps.get(1))
        .map_or(heading.text.as_str(), |m| m.as_str());

    Some(format!(
        "{prefix}[{title}](#{})",
        slugify(&heading.text)
    ))
}

/// Headings outside of fenced code blocks.
fn outline_without_code(text: &str) -> Vec<HeadingEntry> {
    let mut in_code = false;
    let masked = split_lines(text)
        .map(|line| {
            let fence = line.trim_start().starts_with("```") || line.trim_start().starts_with("~~~");
            if fence {
                in_code = !in_code;
                ""
            } else if in_code {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Blanking keeps the line numbers of the remaining headings intact.
    extract_headings(&masked)
}

/// Generate a table of contents for `text`, wrapped in marker comments.
///
/// # Example
///
/// ```
/// use quill_core::toc::{generate_toc, TocConfig};
///
/// let toc = generate_toc("# Intro\n## Usage", &TocConfig::default());
/// assert_eq!(toc[2], "*   [Intro](#intro)");
/// assert_eq!(toc[3], "    *   [Usage](#usage)");
/// ```
pub fn generate_toc(text: &str, config: &TocConfig) -> Vec<String> {
    let entries = outline_without_code(text)
        .iter()
        .filter_map(|heading| format_entry(heading, config))
        .collect::<Vec<_>>();

    let mut full_toc = Vec::with_capacity(entries.len() + 4);
    full_toc.push(TOC_START_MARKER.to_string());
    full_toc.push(String::new());
    full_toc.extend(entries);
    full_toc.push(String::new());
    full_toc.push(TOC_END_MARKER.to_string());

    full_toc
}

/// Find the line range of an existing TOC block.
///
/// Returns `Some((start, end))` with 0-indexed line numbers of the two markers.
pub fn find_toc_range(text: &str) -> Option<(usize, usize)> {
    let mut start = None;

    for (idx, line) in split_lines(text).enumerate() {
        match line.trim() {
            TOC_START_MARKER => start = Some(idx),
            TOC_END_MARKER => {
                if let Some(start) = start {
                    return Some((start, idx));
                }
            }
            _ => {}
        }
    }

    None
}

/// Replaces an existing TOC block with a freshly generated one.
///
/// The text is returned unchanged when it has no TOC block. CRLF documents
/// keep their line endings.
pub fn update_toc(text: &str, config: &TocConfig) -> String {
    let Some((start, end)) = find_toc_range(text) else {
        return text.to_string();
    };

    let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let lines = split_lines(text).collect::<Vec<_>>();
    let toc = generate_toc(text, config);

    lines[..start]
        .iter()
        .copied()
        .chain(toc.iter().map(String::as_str))
        .chain(lines[end + 1..].iter().copied())
        .collect::<Vec<_>>()
        .join(line_ending)
}
