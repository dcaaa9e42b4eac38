#![forbid(unsafe_code)]

//! Line wrapping for viewers, modal bodies, and notifications.
//!
//! ```
//! use tessera_text::wrap::{wrap_text, WrapMode};
//!
//! let lines = wrap_text("Hello world foo bar", 10, WrapMode::Word);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::width::string_width;

/// How lines longer than the target width are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Keep lines as-is.
    None,
    /// Break at whitespace; a word longer than the width gets its own line.
    Word,
    /// Break anywhere between grapheme clusters.
    Char,
    /// Break at whitespace, splitting words that cannot fit on any line.
    #[default]
    WordChar,
}

/// Wrap `text` to `width` columns. Embedded newlines always break.
///
/// Trailing whitespace is trimmed from every produced line. A zero width
/// returns the input lines unwrapped.
#[must_use]
pub fn wrap_text(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    if width == 0 || mode == WrapMode::None {
        return text.split('\n').map(str::to_string).collect();
    }
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let first = out.len();
        let mut line = LineBuilder::new(width);
        match mode {
            WrapMode::Char => line.push_graphemes(paragraph, &mut out),
            _ => {
                for word in split_words(paragraph) {
                    line.push_word(word, mode == WrapMode::WordChar, &mut out);
                }
            }
        }
        line.finish(&mut out, first);
    }
    out
}

struct LineBuilder {
    max: usize,
    buf: String,
    width: usize,
}

impl LineBuilder {
    fn new(max: usize) -> Self {
        Self {
            max,
            buf: String::new(),
            width: 0,
        }
    }

    fn flush(&mut self, out: &mut Vec<String>) {
        out.push(self.buf.trim_end().to_string());
        self.buf.clear();
        self.width = 0;
    }

    fn push_word(&mut self, word: &str, split_long: bool, out: &mut Vec<String>) {
        let word_width = string_width(word);
        if self.width + word_width <= self.max {
            self.buf.push_str(word);
            self.width += word_width;
            return;
        }
        if !self.buf.is_empty() {
            self.flush(out);
        }
        let word = word.trim_start();
        if word.is_empty() {
            return;
        }
        let word_width = string_width(word);
        if word_width <= self.max {
            self.buf.push_str(word);
            self.width = word_width;
        } else if split_long {
            self.push_graphemes(word, out);
        } else {
            self.buf.push_str(word);
            self.flush(out);
        }
    }

    fn push_graphemes(&mut self, text: &str, out: &mut Vec<String>) {
        for grapheme in text.graphemes(true) {
            let w = string_width(grapheme);
            if self.width + w > self.max && !self.buf.is_empty() {
                self.flush(out);
                if grapheme.trim().is_empty() {
                    continue;
                }
            }
            self.buf.push_str(grapheme);
            self.width += w;
        }
    }

    /// Flush the tail; an empty paragraph still yields one empty line.
    fn finish(mut self, out: &mut Vec<String>, first: usize) {
        if !self.buf.is_empty() || out.len() == first {
            self.flush(out);
        }
    }
}

/// Split into alternating runs of whitespace and non-whitespace.
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|s| s != is_space) {
            // Keep whitespace attached to the word that follows it.
            if !is_space {
                in_space = Some(is_space);
                continue;
            }
            words.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        words.push(&text[start..]);
    }
    words
}
