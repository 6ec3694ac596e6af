//! Vertical layout cursor and page-break decisions

use log::debug;

use crate::error::ReportResult;
use crate::surface::DrawingSurface;

/// Outcome of a page-break decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBreak {
    pub breaks: bool,
    pub new_y: f64,
}

/// Decide whether a block of `required` height fits below `current_y`
///
/// A block that would cross the bottom margin moves to the top of a new
/// page. When the cursor already sits at the top margin the block stays
/// put even if it is taller than the usable page: breaking again would
/// only produce an empty page.
pub fn page_break(current_y: f64, required: f64, page_height: f64, margin: f64) -> PageBreak {
    let at_top = current_y <= margin;
    if current_y + required > page_height - margin && !at_top {
        PageBreak {
            breaks: true,
            new_y: margin,
        }
    } else {
        PageBreak {
            breaks: false,
            new_y: current_y,
        }
    }
}

/// Tracks the write position for one document generation
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    current_y: f64,
    margin: f64,
    page_width: f64,
    page_height: f64,
}

impl LayoutCursor {
    pub fn new(page_width: f64, page_height: f64, margin: f64) -> Self {
        Self {
            current_y: margin,
            margin,
            page_width,
            page_height,
        }
    }

    pub fn y(&self) -> f64 {
        self.current_y
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Start a new page on `surface` if `height` does not fit
    ///
    /// Returns true when a page break happened.
    pub fn ensure_space<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, height: f64) -> ReportResult<bool> {
        let decision = page_break(self.current_y, height, self.page_height, self.margin);
        if decision.breaks {
            debug!(
                "Page break at y={:.1} for block of {:.1}pt (page {})",
                self.current_y,
                height,
                surface.page_count() + 1
            );
            surface.new_page()?;
        }
        self.current_y = decision.new_y;
        Ok(decision.breaks)
    }

    /// Move the cursor down; negative amounts are ignored
    pub fn advance(&mut self, amount: f64) {
        if amount > 0.0 {
            self.current_y += amount;
        }
    }

    /// Return to the top margin (after an explicit page break)
    pub fn reset(&mut self) {
        self.current_y = self.margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_fits_without_break() {
        let decision = page_break(100.0, 50.0, 800.0, 40.0);
        assert_eq!(decision, PageBreak { breaks: false, new_y: 100.0 });
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        // 700 + 60 == 800 - 40
        assert!(!page_break(700.0, 60.0, 800.0, 40.0).breaks);
        assert!(page_break(700.0, 60.5, 800.0, 40.0).breaks);
    }

    #[test]
    fn test_overflow_breaks_to_margin() {
        let decision = page_break(700.0, 100.0, 800.0, 40.0);
        assert_eq!(decision, PageBreak { breaks: true, new_y: 40.0 });
    }

    #[test]
    fn test_oversized_block_at_top_stays() {
        let decision = page_break(40.0, 2000.0, 800.0, 40.0);
        assert!(!decision.breaks);
        assert_eq!(decision.new_y, 40.0);
    }

    #[test]
    fn test_ensure_space_creates_page() {
        let mut surface = RecordingSurface::new(600.0, 800.0, 10);
        let mut cursor = LayoutCursor::new(600.0, 800.0, 40.0);
        cursor.advance(650.0);
        assert!(cursor.ensure_space(&mut surface, 200.0).unwrap());
        assert_eq!(surface.page_count(), 2);
        assert_eq!(cursor.y(), 40.0);
        assert!(!cursor.ensure_space(&mut surface, 200.0).unwrap());
        assert_eq!(surface.page_count(), 2);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut cursor = LayoutCursor::new(600.0, 800.0, 40.0);
        cursor.advance(10.0);
        cursor.advance(-30.0);
        assert_eq!(cursor.y(), 50.0);
        cursor.reset();
        assert_eq!(cursor.y(), 40.0);
        assert_eq!(cursor.content_width(), 520.0);
    }
}
