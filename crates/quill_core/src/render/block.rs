//! Line classification and the block state machine of the renderer.

use super::inline::{escape_html, inline};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(---|\*\*\*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());

const CODE_FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1. item`, rendered as `<ol>`.
    Ordered,
    /// `- item` or `* item`, rendered as `<ul>`.
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }
}

/// What a single source line is, outside of a code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Fence,
    Blank,
    Heading(usize, &'a str),
    Rule,
    Quote(&'a str),
    Item(ListKind, &'a str),
    Paragraph(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a line. Rules are tried in order and the first one wins.
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();

        if trimmed.starts_with(CODE_FENCE) {
            return Self::Fence;
        }
        if trimmed.is_empty() {
            return Self::Blank;
        }
        if let Some(caps) = HEADING.captures(trimmed) {
            let level = caps.get(1).map_or(1, |m| m.len());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return Self::Heading(level, text.trim());
        }
        if RULE.is_match(trimmed) {
            return Self::Rule;
        }
        if let Some(rest) = trimmed.strip_prefix('>') {
            return Self::Quote(rest.trim());
        }
        if let Some(text) = ORDERED_ITEM.captures(trimmed).and_then(|caps| caps.get(1)) {
            return Self::Item(ListKind::Ordered, text.as_str());
        }
        if let Some(text) = UNORDERED_ITEM.captures(trimmed).and_then(|caps| caps.get(1)) {
            return Self::Item(ListKind::Unordered, text.as_str());
        }

        Self::Paragraph(trimmed)
    }
}

/// State carried from one line to the next during a render.
///
/// A render is a fold of [`Block::step`] over the source lines, starting
/// from [`Block::Normal`] and ending with [`Block::finish`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Block {
    #[default]
    Normal,
    /// Inside a fenced code block, holding the raw lines seen so far.
    InCodeBlock(Vec<String>),
    /// Inside a list, holding the rendered items seen so far.
    InList(ListKind, Vec<String>),
}

impl Block {
    /// Consumes one source line, appending any completed HTML to `out`.
    pub fn step(self, line: &str, out: &mut Vec<String>) -> Self {
        if let Self::InCodeBlock(mut code) = self {
            if line.trim().starts_with(CODE_FENCE) {
                out.push(code_block(&code));
                return Self::Normal;
            }
            code.push(line.to_string());
            return Self::InCodeBlock(code);
        }

        let html = match Line::classify(line) {
            Line::Fence => {
                self.finish(out);
                return Self::InCodeBlock(Vec::new());
            }
            Line::Item(kind, text) => return self.push_item(kind, text, out),
            Line::Blank => String::new(),
            Line::Heading(level, text) => format!("<h{level}>{}</h{level}>", inline(text)),
            Line::Rule => "<hr>".to_string(),
            Line::Quote(text) => format!("<blockquote>{}</blockquote>", inline(text)),
            Line::Paragraph(text) => format!("<p>{}</p>", inline(text)),
        };

        self.finish(out);
        out.push(html);
        Self::Normal
    }

    fn push_item(self, kind: ListKind, text: &str, out: &mut Vec<String>) -> Self {
        match self {
            Self::InList(current, mut items) if current == kind => {
                items.push(inline(text));
                Self::InList(current, items)
            }
            other => {
                other.finish(out);
                Self::InList(kind, vec![inline(text)])
            }
        }
    }

    /// Flushes whatever is still open: a pending list or an unterminated code block.
    pub fn finish(self, out: &mut Vec<String>) {
        match self {
            Self::Normal => {}
            Self::InCodeBlock(code) => out.push(code_block(&code)),
            Self::InList(kind, items) => out.push(list(kind, &items)),
        }
    }
}

fn code_block(lines: &[String]) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(&lines.join("\n")))
}

fn list(kind: ListKind, items: &[String]) -> String {
    let tag = kind.tag();
    let items: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!("<{tag}>{items}</{tag}>")
}
