//! Document statistics for the word-count status line.
//!
//! Counting is bilingual: every code point in the CJK Unified Ideographs
//! block counts as one word, and the remaining text is split into
//! whitespace-delimited English words.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separator between two paragraphs: a newline, optional whitespace, a newline.
static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Returned by [`format`] when every display option is turned off.
pub const NO_STATISTICS: &str = "No statistics";

/// Counts computed from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCounts {
    /// `chinese_chars + english_words`.
    pub total_words: usize,
    /// Length of the raw text in Unicode scalar values.
    pub characters: usize,
    /// Code points in U+4E00..=U+9FFF.
    pub chinese_chars: usize,
    /// Whitespace-delimited tokens once CJK characters are blanked out.
    pub english_words: usize,
    /// Number of `\n` or `\r\n` delimited segments, never zero.
    pub lines: usize,
    /// Non-blank blocks separated by blank lines.
    pub paragraphs: usize,
}

/// Which segments of the status line are shown.
///
/// Owned by the settings; the engine only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordCountDisplayOptions {
    pub show_chinese_word_count: bool,
    pub show_english_word_count: bool,
    pub show_total_word_count: bool,
    pub show_character_count: bool,
    /// Append the Chinese/English split to the total, or shorten the
    /// standalone labels when the total is hidden.
    pub show_word_count_breakdown: bool,
    pub show_line_count: bool,
    pub show_paragraph_count: bool,
}

impl Default for WordCountDisplayOptions {
    fn default() -> Self {
        Self {
            show_chinese_word_count: true,
            show_english_word_count: true,
            show_total_word_count: true,
            show_character_count: true,
            show_word_count_breakdown: true,
            show_line_count: false,
            show_paragraph_count: false,
        }
    }
}

impl WordCountDisplayOptions {
    /// Options with every segment hidden.
    pub fn none() -> Self {
        Self {
            show_chinese_word_count: false,
            show_english_word_count: false,
            show_total_word_count: false,
            show_character_count: false,
            show_word_count_breakdown: false,
            show_line_count: false,
            show_paragraph_count: false,
        }
    }
}

/// Returns `true` if `c` belongs to the CJK Unified Ideographs block.
#[inline]
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Calculate the counts of `text`.
///
/// # Example
///
/// ```
/// use quill_core::stats::count;
///
/// let counts = count("你好 world");
/// assert_eq!(counts.chinese_chars, 2);
/// assert_eq!(counts.english_words, 1);
/// assert_eq!(counts.total_words, 3);
/// ```
pub fn count(text: &str) -> TextCounts {
    let characters = text.chars().count();

    // The raw length is reported even when the text carries no words.
    if text.trim().is_empty() {
        return TextCounts {
            characters,
            lines: 1,
            ..Default::default()
        };
    }

    let chinese_chars = text.chars().filter(|c| is_cjk(*c)).count();

    let english_words = text
        .chars()
        .map(|c| if is_cjk(c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .count();

    // Splitting on `\r?\n` yields one more segment than there are newlines.
    let lines = newline_count(text) + 1;

    let paragraphs = BLANK_LINE
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count()
        .max(1);

    TextCounts {
        total_words: chinese_chars + english_words,
        characters,
        chinese_chars,
        english_words,
        lines,
        paragraphs,
    }
}

fn newline_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}

/// Format `counts` into the status line text according to `options`.
///
/// Segments are joined with `" | "`; [`NO_STATISTICS`] is returned when no
/// segment is enabled.
///
/// # Example
///
/// ```
/// use quill_core::stats::{count, format, WordCountDisplayOptions};
///
/// let line = format(&count("你好 world"), &WordCountDisplayOptions::default());
/// assert_eq!(line, "Words: 3 (Chinese: 2, English: 1) | Characters: 8");
/// ```
pub fn format(counts: &TextCounts, options: &WordCountDisplayOptions) -> String {
    let mut segments = Vec::new();

    if options.show_total_word_count {
        let mut words = format!("Words: {}", counts.total_words);
        if options.show_word_count_breakdown {
            let breakdown = breakdown(counts, options, "Chinese", "English");
            if !breakdown.is_empty() {
                words.push_str(&format!(" ({})", breakdown.join(", ")));
            }
        }
        segments.push(words);
    } else if options.show_word_count_breakdown {
        segments.extend(breakdown(counts, options, "Chinese", "English"));
    } else {
        segments.extend(breakdown(counts, options, "Chinese Words", "English Words"));
    }

    if options.show_character_count {
        segments.push(format!("Characters: {}", counts.characters));
    }
    if options.show_line_count {
        segments.push(format!("Lines: {}", counts.lines));
    }
    if options.show_paragraph_count {
        segments.push(format!("Paragraphs: {}", counts.paragraphs));
    }

    if segments.is_empty() {
        NO_STATISTICS.to_string()
    } else {
        segments.join(" | ")
    }
}

fn breakdown(
    counts: &TextCounts,
    options: &WordCountDisplayOptions,
    chinese_label: &str,
    english_label: &str,
) -> Vec<String> {
    let mut parts = Vec::with_capacity(2);
    if options.show_chinese_word_count {
        parts.push(format!("{chinese_label}: {}", counts.chinese_chars));
    }
    if options.show_english_word_count {
        parts.push(format!("{english_label}: {}", counts.english_words));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        let counts = count("");
        assert_eq!(
            counts,
            TextCounts {
                total_words: 0,
                characters: 0,
                chinese_chars: 0,
                english_words: 0,
                lines: 1,
                paragraphs: 0,
            }
        );
    }

    #[test]
    fn test_whitespace_only_keeps_raw_length() {
        let counts = count("   \n  ");
        assert_eq!(counts.characters, 6);
        assert_eq!(counts.total_words, 0);
        assert_eq!(counts.lines, 1);
        assert_eq!(counts.paragraphs, 0);
    }

    #[test]
    fn test_mixed_cjk_and_latin() {
        let counts = count("你好 world");
        assert_eq!(counts.chinese_chars, 2);
        assert_eq!(counts.english_words, 1);
        assert_eq!(counts.total_words, 3);
        assert_eq!(counts.characters, 8);
    }

    #[test]
    fn test_cjk_splits_adjacent_latin_words() {
        // Each ideograph becomes a space, so `a中b` holds two English words.
        let counts = count("a中b");
        assert_eq!(counts.chinese_chars, 1);
        assert_eq!(counts.english_words, 2);
        assert_eq!(counts.total_words, 3);
    }

    #[test]
    fn test_cjk_punctuation_is_not_counted_as_chinese() {
        // U+3002 lies outside the ideograph block and stays an English token.
        let counts = count("你好。");
        assert_eq!(counts.chinese_chars, 2);
        assert_eq!(counts.english_words, 1);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(count("one").lines, 1);
        assert_eq!(count("one\ntwo").lines, 2);
        assert_eq!(count("one\r\ntwo\r\n").lines, 3);
        assert_eq!(count("one\n").lines, 2);
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(count("one\ntwo").paragraphs, 1);
        assert_eq!(count("one\n\ntwo").paragraphs, 2);
        assert_eq!(count("one\n   \n\n two\n\n\nthree").paragraphs, 3);
        assert_eq!(count("\n\none\n\n").paragraphs, 1);
        assert_eq!(count("a\r\n\r\nb").paragraphs, 2);
    }

    #[test]
    fn test_characters_count_scalar_values() {
        assert_eq!(count("héllo").characters, 5);
        assert_eq!(count("😀 x").characters, 3);
    }

    #[test]
    fn test_format_default_options() {
        let counts = count("Hello world\n\n你好");
        assert_eq!(
            format(&counts, &WordCountDisplayOptions::default()),
            "Words: 4 (Chinese: 2, English: 2) | Characters: 15"
        );
    }

    #[test]
    fn test_format_no_statistics() {
        for text in ["", "  ", "hello", "你好 world\n\nsecond"] {
            assert_eq!(
                format(&count(text), &WordCountDisplayOptions::none()),
                NO_STATISTICS
            );
        }
    }

    #[test]
    fn test_format_breakdown_without_sub_flags() {
        let options = WordCountDisplayOptions {
            show_chinese_word_count: false,
            show_english_word_count: false,
            ..Default::default()
        };
        assert_eq!(
            format(&count("hi 你"), &options),
            "Words: 2 | Characters: 4"
        );
    }

    #[test]
    fn test_format_total_hidden() {
        let counts = count("hi 你");
        let breakdown_on = WordCountDisplayOptions {
            show_total_word_count: false,
            show_character_count: false,
            ..Default::default()
        };
        assert_eq!(format(&counts, &breakdown_on), "Chinese: 1 | English: 1");

        let breakdown_off = WordCountDisplayOptions {
            show_word_count_breakdown: false,
            ..breakdown_on
        };
        assert_eq!(
            format(&counts, &breakdown_off),
            "Chinese Words: 1 | English Words: 1"
        );
    }

    #[test]
    fn test_format_lines_and_paragraphs() {
        let options = WordCountDisplayOptions {
            show_line_count: true,
            show_paragraph_count: true,
            ..WordCountDisplayOptions::none()
        };
        assert_eq!(
            format(&count("a\n\nb\n"), &options),
            "Lines: 4 | Paragraphs: 2"
        );
    }

    #[test]
    fn test_toggling_breakdown_keeps_base_segment() {
        let counts = count("one two 三");
        let with = format(&counts, &WordCountDisplayOptions::default());
        let without = format(
            &counts,
            &WordCountDisplayOptions {
                show_word_count_breakdown: false,
                ..Default::default()
            },
        );
        assert_eq!(without, "Words: 3 | Characters: 9");
        assert_eq!(with, "Words: 3 (Chinese: 1, English: 2) | Characters: 9");
    }

    #[test]
    fn test_display_options_deserialize_with_defaults() {
        let options: WordCountDisplayOptions =
            serde_json::from_str(r#"{"showLineCount": true, "showChineseWordCount": false}"#)
                .unwrap();
        assert!(options.show_line_count);
        assert!(!options.show_chinese_word_count);
        assert!(options.show_total_word_count);
        assert!(!options.show_paragraph_count);
    }
}
