//! View layer: styled text fragments and the composed document.
//!
//! [`Span`]s carry a [`ColorRole`] instead of a concrete color so the pure
//! renderers stay theme-independent; roles resolve against the active theme
//! at paint time.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::theme::ColorRole;
use crate::types::Attr;

pub mod compose;

pub use compose::{compose, Block, BlockKind, Document, FormRows, SectionId};

// =============================================================================
// Span / Line
// =============================================================================

/// A run of text with one role and attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub role: ColorRole,
    pub attrs: Attr,
}

impl Span {
    pub fn new(text: impl Into<String>, role: ColorRole) -> Self {
        Self {
            text: text.into(),
            role,
            attrs: Attr::NONE,
        }
    }

    pub fn styled(text: impl Into<String>, role: ColorRole, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            role,
            attrs,
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One display line of spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn blank() -> Self {
        Self { spans: Vec::new() }
    }

    /// A line holding a single span.
    pub fn from_span(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text without styling (for tests and measurements).
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

// =============================================================================
// Emphasis markers
// =============================================================================

/// Parse `*emphasis*` markers into alternating spans.
///
/// Marked runs get `emphasis` as their role; an unmatched trailing `*` is
/// kept literal.
pub fn parse_emphasis(text: &str, base: ColorRole, emphasis: ColorRole) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;
    loop {
        match rest.find('*') {
            None => {
                if !rest.is_empty() {
                    spans.push(Span::new(rest, base));
                }
                break;
            }
            Some(open) => {
                let after = &rest[open + 1..];
                match after.find('*') {
                    None => {
                        // Unmatched marker: emit everything literally.
                        spans.push(Span::new(rest, base));
                        break;
                    }
                    Some(close) => {
                        if open > 0 {
                            spans.push(Span::new(&rest[..open], base));
                        }
                        let inner = &after[..close];
                        if !inner.is_empty() {
                            spans.push(Span::styled(inner, emphasis, Attr::ITALIC));
                        }
                        rest = &after[close + 1..];
                    }
                }
            }
        }
    }
    spans
}

/// Strip `*emphasis*` markers, keeping the text.
pub fn strip_emphasis(text: &str) -> String {
    parse_emphasis(text, ColorRole::Text, ColorRole::Text)
        .into_iter()
        .map(|s| s.text)
        .collect()
}

// =============================================================================
// Word wrap
// =============================================================================

/// Word-wrap text to a column budget by display width.
///
/// Paragraph breaks (`\n`) are preserved; words wider than the budget are
/// hard-broken. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                // Flush, then hard-break the oversized word.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut chunk = String::new();
                let mut chunk_width = 0;
                for ch in word.chars() {
                    let cw = ch.width().unwrap_or(0);
                    if chunk_width + cw > width {
                        lines.push(std::mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += cw;
                }
                current = chunk;
                current_width = chunk_width;
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_basic() {
        let spans = parse_emphasis("a *b* c", ColorRole::Text, ColorRole::Accent);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "a ");
        assert_eq!(spans[1].text, "b");
        assert_eq!(spans[1].role, ColorRole::Accent);
        assert_eq!(spans[1].attrs, Attr::ITALIC);
        assert_eq!(spans[2].text, " c");
        assert_eq!(spans[2].role, ColorRole::Text);
    }

    #[test]
    fn test_emphasis_unmatched_marker_is_literal() {
        let spans = parse_emphasis("3 * 4", ColorRole::Text, ColorRole::Accent);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "3 * 4");
    }

    #[test]
    fn test_emphasis_empty_pair_dropped() {
        let spans = parse_emphasis("a ** b", ColorRole::Text, ColorRole::Accent);
        assert_eq!(
            spans.iter().map(|s| s.text.as_str()).collect::<String>(),
            "a  b"
        );
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("keep *it* simple"), "keep it simple");
        assert_eq!(strip_emphasis("no markers"), "no markers");
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_preserves_paragraphs() {
        let lines = wrap("one\ntwo three", 20);
        assert_eq!(lines, vec!["one", "two three"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        // Each CJK char is 2 columns; only two fit in 5.
        let lines = wrap("日本 語語", 5);
        assert_eq!(lines, vec!["日本", "語語"]);
    }

    #[test]
    fn test_line_text_and_width() {
        let line = Line::new(vec![
            Span::new("ab", ColorRole::Text),
            Span::new("cd", ColorRole::Muted),
        ]);
        assert_eq!(line.text(), "abcd");
        assert_eq!(line.width(), 4);
    }
}
