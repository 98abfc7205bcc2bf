//! Markdown to HTML rendering for the live preview.
//!
//! Only a small dialect is understood, one line at a time:
//! - ATX headings, horizontal rules and single-line blockquotes
//! - Flat ordered and unordered lists
//! - Fenced code blocks (content is escaped, never formatted)
//! - Inline code, bold, italic, `<u>` underline and links
//!
//! Anything else becomes a paragraph. Malformed input never fails: an
//! unterminated fence runs to the end of the document and unmatched
//! emphasis markers are kept as literal text.

mod block;
mod inline;

use crate::outline::split_lines;

pub use block::{Block, Line, ListKind};
pub use inline::{escape_html, inline};

/// Render `markdown` to an HTML fragment.
///
/// Every source line yields at most one output line, except for lists and
/// code blocks, which collapse into a single line each. Blank source lines
/// are kept as empty output lines to preserve vertical spacing.
///
/// # Example
///
/// ```
/// use quill_core::render::render;
///
/// assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(render("```\nx<y\n```"), "<pre><code>x&lt;y</code></pre>");
/// ```
pub fn render(markdown: &str) -> String {
    let mut out = Vec::new();

    split_lines(markdown)
        .fold(Block::Normal, |state, line| state.step(line, &mut out))
        .finish(&mut out);

    tracing::trace!(
        source_bytes = markdown.len(),
        output_lines = out.len(),
        "Rendered markdown preview"
    );

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        assert_eq!(
            render("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
        assert_eq!(render("# Hello\n\nWorld"), "<h1>Hello</h1>\n\n<p>World</p>");
    }

    #[test]
    fn test_list_items_are_grouped() {
        assert_eq!(render("- a\n- b\n"), "<ul><li>a</li><li>b</li></ul>\n");
        assert_eq!(
            render("1. one\n2. *two*"),
            "<ol><li>one</li><li><em>two</em></li></ol>"
        );
        assert_eq!(
            render("* a\n- b\ntext"),
            "<ul><li>a</li><li>b</li></ul>\n<p>text</p>"
        );
    }

    #[test]
    fn test_list_kind_change() {
        assert_eq!(
            render("- a\n1. b"),
            "<ul><li>a</li></ul>\n<ol><li>b</li></ol>"
        );
    }

    #[test]
    fn test_code_block_is_escaped_not_formatted() {
        assert_eq!(render("```\nx<y\n```"), "<pre><code>x&lt;y</code></pre>");
        assert_eq!(
            render("```rust\nlet **a** = 1;\n\n# no\n```\nafter"),
            "<pre><code>let **a** = 1;\n\n# no</code></pre>\n<p>after</p>"
        );
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        assert_eq!(render("- a\n```\n*x*"), "<ul><li>a</li></ul>\n<pre><code>*x*</code></pre>");
    }

    #[test]
    fn test_rules_and_quotes() {
        assert_eq!(render("---"), "<hr>");
        assert_eq!(render("***"), "<hr>");
        assert_eq!(
            render("> one\n> two"),
            "<blockquote>one</blockquote>\n<blockquote>two</blockquote>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render("###### six"), "<h6>six</h6>");
        assert_eq!(render("####### seven"), "<p>####### seven</p>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        assert_eq!(
            render("<img src=x onerror=alert(1)>"),
            "<p>&lt;img src=x onerror=alert(1)&gt;</p>"
        );
        assert_eq!(render("a <u>b</u> & c"), "<p>a <u>b</u> &amp; c</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n"), "\n");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(render("# T\r\n- a\r\n- b"), "<h1>T</h1>\n<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_render_is_pure() {
        let source = "# T\n\n- a\n- b\n\n```\ncode\n```\n> q";
        assert_eq!(render(source), render(source));
    }
}
