//! Drawing surface abstraction
//!
//! The composer only talks to `DrawingSurface`. `RecordingSurface` is the
//! implementation used for real reports: it records every paint operation
//! into a `RenderedDocument`, which the `pdf` module serializes on demand.

use serde::Serialize;

use crate::error::{ReportError, ReportResult};
use crate::fonts::{measure_text, StandardFont};
use crate::text_layout::LineBreaker;
use crate::types::{Color, Rect, TextStyle};

/// Primitive paged-canvas operations
///
/// Coordinates are in points with y growing downwards from the top edge.
/// Text `y` is the baseline.
pub trait DrawingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Width of `text` in points
    fn measure(&self, text: &str, style: &TextStyle) -> f64;

    /// Word-wrap `text` to `max_width`
    fn wrap(&self, text: &str, max_width: f64, style: &TextStyle) -> Vec<String>;

    /// Append a page and make it current
    fn new_page(&mut self) -> ReportResult<()>;

    /// Make an existing page current (0-based)
    fn select_page(&mut self, index: usize);

    fn page_count(&self) -> usize;

    fn page_width(&self) -> f64;

    fn page_height(&self) -> f64;
}

/// A single recorded paint operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    Text { text: String, x: f64, y: f64, style: TextStyle },
}

impl DrawOp {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            DrawOp::FillRect { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl RenderedPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

/// Composed document: ordered pages of ordered draw operations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub pages: Vec<RenderedPage>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs in drawing order across every page
    pub fn text_content(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|p| p.texts()).collect()
    }

    /// Index of the first page containing exactly `needle`
    pub fn page_of(&self, needle: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.contains_text(needle))
    }
}

/// Surface that records draw operations page by page
pub struct RecordingSurface {
    width: f64,
    height: f64,
    max_pages: usize,
    current: usize,
    document: RenderedDocument,
}

impl RecordingSurface {
    /// Create a surface with its first page already open
    pub fn new(width: f64, height: f64, max_pages: usize) -> Self {
        Self {
            width,
            height,
            max_pages,
            current: 0,
            document: RenderedDocument {
                pages: vec![RenderedPage {
                    width,
                    height,
                    ops: Vec::new(),
                }],
            },
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    pub fn into_document(self) -> RenderedDocument {
        self.document
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.document.pages.get_mut(self.current) {
            page.ops.push(op);
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawOp::FillRect { rect, color });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn measure(&self, text: &str, style: &TextStyle) -> f64 {
        measure_text(text, style)
    }

    fn wrap(&self, text: &str, max_width: f64, style: &TextStyle) -> Vec<String> {
        LineBreaker::new(max_width, StandardFont::for_style(style), style.size).break_text(text)
    }

    fn new_page(&mut self) -> ReportResult<()> {
        if self.document.pages.len() >= self.max_pages {
            return Err(ReportError::PageLimitExceeded(self.max_pages));
        }
        self.document.pages.push(RenderedPage {
            width: self.width,
            height: self.height,
            ops: Vec::new(),
        });
        self.current = self.document.pages.len() - 1;
        Ok(())
    }

    fn select_page(&mut self, index: usize) {
        if index < self.document.pages.len() {
            self.current = index;
        }
    }

    fn page_count(&self) -> usize {
        self.document.pages.len()
    }

    fn page_width(&self) -> f64 {
        self.width
    }

    fn page_height(&self) -> f64 {
        self.height
    }
}
