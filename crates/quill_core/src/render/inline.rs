//! Span-level markdown: code, emphasis, underline and links.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static STRONG_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static STRONG_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static EM_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static EM_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
// Matched against escaped text, hence the entities.
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&lt;u&gt;(.*?)&lt;/u&gt;").unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{E000}(\\d+)\u{E001}").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Escapes the characters that would otherwise start markup or end an attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Converts the inline markdown of one line to HTML.
///
/// The text is escaped first, so markers can only ever produce the tags
/// listed here. Code spans are swapped for placeholders while emphasis and
/// links run over the whole line, which leaves their contents untouched but
/// lets markers wrap them.
///
/// # Example
///
/// ```
/// use quill_core::render::inline;
///
/// assert_eq!(
///     inline("**bold** and `*raw*`"),
///     "<strong>bold</strong> and <code>*raw*</code>"
/// );
/// assert_eq!(
///     inline("[`run`](https://x.io)"),
///     r#"<a href="https://x.io"><code>run</code></a>"#
/// );
/// ```
pub fn inline(text: &str) -> String {
    // Placeholder delimiters must survive escaping and never be markdown.
    let escaped = escape_html(text).replace(&[PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE][..], "");

    let mut spans = Vec::new();
    let masked = CODE_SPAN.replace_all(&escaped, |caps: &Captures| {
        spans.push(format!("<code>{}</code>", &caps[1]));
        format!("{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}", spans.len() - 1)
    });

    let html = format_span(&masked);
    if spans.is_empty() {
        return html;
    }

    PLACEHOLDER
        .replace_all(&html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| spans.get(idx))
                .map_or_else(String::new, Clone::clone)
        })
        .into_owned()
}

/// Emphasis, underline and links, in that order, on already escaped text.
fn format_span(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Bold before italic, otherwise `**x**` turns into two empty italics.
    let text = STRONG_STARS.replace_all(text, "<strong>${1}</strong>");
    let text = STRONG_UNDERSCORES.replace_all(&text, "<strong>${1}</strong>");
    let text = EM_STAR.replace_all(&text, "<em>${1}</em>");
    let text = EM_UNDERSCORE.replace_all(&text, "<em>${1}</em>");
    let text = UNDERLINE.replace_all(&text, "<u>${1}</u>");
    let text = LINK.replace_all(&text, r#"<a href="${2}">${1}</a>"#);

    text.into_owned()
}
