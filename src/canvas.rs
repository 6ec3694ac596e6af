//! Canvas wrapper around a pdf-writer content stream
//!
//! Accepts top-down coordinates from the recorded draw operations and
//! flips them into PDF user space (origin at the bottom-left).

use pdf_writer::{Content, Str};

use crate::fonts::StandardFont;
use crate::types::{Color, Rect, TextAlign, TextStyle};
use crate::winansi::to_winansi;

/// One page worth of PDF drawing commands
pub struct PdfCanvas {
    content: Content,
    page_height: f64,
    fill_color: Option<Color>,
}

impl PdfCanvas {
    pub fn new(page_height: f64) -> Self {
        Self {
            content: Content::new(),
            page_height,
            fill_color: None,
        }
    }

    /// Get content (for finalizing)
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== Colors =====

    pub fn set_fill_color(&mut self, color: Color) {
        if self.fill_color == Some(color) {
            return;
        }
        self.fill_color = Some(color);
        self.content.set_fill_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    // ===== Drawing =====

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.set_fill_color(color);
        let y = self.page_height - rect.bottom();
        self.content
            .rect(rect.x as f32, y as f32, rect.width as f32, rect.height as f32);
        self.content.fill_nonzero();
    }

    // ===== Text =====

    /// Draw `text` with its baseline at top-down `y`, anchored per `style.align`
    pub fn draw_string(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let font = StandardFont::for_style(style);
        let width = font.measure(text, style.size);
        let start_x = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };

        self.set_fill_color(style.color);
        self.content.begin_text();
        self.content.set_font(font.resource_name(), style.size as f32);
        self.content
            .next_line(start_x as f32, (self.page_height - y) as f32);
        self.content.show(Str(&to_winansi(text)));
        self.content.end_text();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_rect_is_flipped() {
        let mut canvas = PdfCanvas::new(800.0);
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 30.0), Color::black());
        let bytes = canvas.finish();
        // 800 - (20 + 30) = 750
        assert!(contains(&bytes, b"10 750 100 30 re\nf"));
    }

    #[test]
    fn test_empty_rect_skipped() {
        let mut canvas = PdfCanvas::new(800.0);
        canvas.fill_rect(Rect::new(10.0, 20.0, 0.0, 30.0), Color::black());
        assert!(canvas.finish().is_empty());
    }

    #[test]
    fn test_text_uses_winansi_and_font() {
        let mut canvas = PdfCanvas::new(800.0);
        canvas.draw_string("Rank: #2 of 4", 50.0, 100.0, &TextStyle::new(12.0).bold());
        let bytes = canvas.finish();
        assert!(contains(&bytes, b"/F2 12 Tf"));
        assert!(contains(&bytes, b"(Rank: #2 of 4) Tj"));
        assert!(contains(&bytes, b"50 700 Td"));
    }

    #[test]
    fn test_fill_color_not_repeated() {
        let mut canvas = PdfCanvas::new(800.0);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white());
        canvas.fill_rect(Rect::new(2.0, 0.0, 1.0, 1.0), Color::white());
        let bytes = canvas.finish();
        let count = bytes.windows(3).filter(|w| w == b" rg").count();
        assert_eq!(count, 1);
    }
}
