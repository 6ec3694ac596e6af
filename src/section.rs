//! Section banners and the fixed report palette

use crate::cursor::LayoutCursor;
use crate::error::ReportResult;
use crate::surface::DrawingSurface;
use crate::types::{Color, Rect, TextStyle};

pub const HEADER_HEIGHT: f64 = 30.0;
/// Banner plus the gap below it
pub const HEADER_BLOCK_HEIGHT: f64 = 46.0;
const HEADER_TEXT_SIZE: f64 = 14.0;
const HEADER_PADDING: f64 = 12.0;

/// Fixed report colors
pub mod palette {
    use crate::types::Color;

    pub fn brand() -> Color {
        Color::rgb8(37, 99, 235)
    }

    pub fn ink() -> Color {
        Color::rgb8(31, 41, 55)
    }

    pub fn muted() -> Color {
        Color::rgb8(107, 114, 128)
    }

    pub fn panel() -> Color {
        Color::rgb8(243, 244, 246)
    }

    pub fn track() -> Color {
        Color::rgb8(229, 231, 235)
    }
}

/// Draw a banner header at the cursor
///
/// Space for the whole banner is reserved first so a header never sits
/// alone at the bottom of a page.
pub fn add_section_header<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut LayoutCursor,
    title: &str,
    tag: Option<&str>,
) -> ReportResult<()> {
    cursor.ensure_space(surface, HEADER_BLOCK_HEIGHT)?;

    let top = cursor.y();
    let x = cursor.margin();
    surface.fill_rect(Rect::new(x, top, cursor.content_width(), HEADER_HEIGHT), palette::brand());

    let label = match tag {
        Some(tag) => format!("{} {}", tag, title),
        None => title.to_string(),
    };
    let style = TextStyle::new(HEADER_TEXT_SIZE).bold().color(Color::white());
    // Vertically centered on the banner
    let baseline = top + (HEADER_HEIGHT + HEADER_TEXT_SIZE * 0.7) / 2.0;
    surface.text(&label, x + HEADER_PADDING, baseline, &style);

    cursor.advance(HEADER_BLOCK_HEIGHT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_header_draws_banner_and_label() {
        let mut surface = RecordingSurface::new(600.0, 800.0, 5);
        let mut cursor = LayoutCursor::new(600.0, 800.0, 50.0);
        add_section_header(&mut surface, &mut cursor, "Recommendations", Some("03")).unwrap();

        let ops = &surface.document().pages[0].ops;
        assert_eq!(ops.len(), 2);
        match &ops[0] {
            DrawOp::FillRect { rect, color } => {
                assert_eq!(*rect, Rect::new(50.0, 50.0, 500.0, HEADER_HEIGHT));
                assert_eq!(*color, palette::brand());
            }
            other => panic!("expected banner, got {:?}", other),
        }
        assert_eq!(ops[1].as_text(), Some("03 Recommendations"));
        assert_eq!(cursor.y(), 50.0 + HEADER_BLOCK_HEIGHT);
    }

    #[test]
    fn test_header_never_orphaned() {
        let mut surface = RecordingSurface::new(600.0, 800.0, 5);
        let mut cursor = LayoutCursor::new(600.0, 800.0, 50.0);
        cursor.advance(700.0);
        add_section_header(&mut surface, &mut cursor, "Performance Overview", None).unwrap();

        let doc = surface.document();
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages[0].ops.is_empty());
        assert_eq!(doc.page_of("Performance Overview"), Some(1));
    }
}
