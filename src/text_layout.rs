//! Text layout and line breaking
//!
//! Word-based wrapping against the Helvetica metrics in `fonts`. Words
//! wider than the available width are split at character boundaries so
//! no line ever exceeds `max_width` unless a single glyph does.

use crate::fonts::StandardFont;

/// Line breaker for wrapping text
pub struct LineBreaker {
    max_width: f64,
    font: StandardFont,
    font_size: f64,
}

impl LineBreaker {
    pub fn new(max_width: f64, font: StandardFont, font_size: f64) -> Self {
        Self {
            max_width,
            font,
            font_size,
        }
    }

    fn width(&self, text: &str) -> f64 {
        self.font.measure(text, self.font_size)
    }

    /// Break text into lines
    ///
    /// Whitespace runs collapse to a single space. Empty or blank input
    /// yields no lines.
    pub fn break_text(&self, text: &str) -> Vec<String> {
        let space_width = self.width(" ");
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in text.split_whitespace() {
            let word_width = self.width(word);

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + space_width + word_width
            };

            if needed <= self.max_width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += space_width;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_width <= self.max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard break for words (long URLs) wider than a full line
                for chunk in self.split_word(word) {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    current_width = self.width(&chunk);
                    current = chunk;
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    fn split_word(&self, word: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut chunk = String::new();
        let mut chunk_width = 0.0;

        for ch in word.chars() {
            let ch_width = self.font.advance(ch) as f64 * self.font_size / 1000.0;
            if !chunk.is_empty() && chunk_width + ch_width > self.max_width {
                chunks.push(std::mem::take(&mut chunk));
                chunk_width = 0.0;
            }
            chunk.push(ch);
            chunk_width += ch_width;
        }

        if !chunk.is_empty() {
            chunks.push(chunk);
        }
        chunks
    }
}
