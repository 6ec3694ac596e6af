//! Competitor analysis report renderer
//!
//! Turns a competitive-SEO analysis into a paginated PDF: cover page,
//! executive summary with score bars, performance overview and
//! recommendations. Layout is done by hand with a vertical cursor over a
//! `DrawingSurface`; the composed document stays in memory until
//! `CompetitorReport::to_pdf_bytes` or `CompetitorReport::save` is called.

pub mod adapter;
mod canvas;
pub mod composer;
pub mod config;
pub mod cursor;
pub mod error;
mod fonts;
mod json_helpers;
pub mod model;
mod pdf;
pub mod report;
pub mod score_color;
pub mod section;
pub mod surface;
mod text_layout;
pub mod types;
mod winansi;

pub use config::ReportConfig;
pub use error::{ReportError, ReportResult, Subsection};
pub use model::AnalysisComparison;
pub use report::{CompetitorReport, ExportedAnalysis, ReportGenerator};
pub use score_color::{color_for, ScoreBand};
pub use surface::{DrawingSurface, RecordingSurface, RenderedDocument};

use serde_json::Value;

/// Generate a report with the default configuration
pub fn generate(analysis: Option<&Value>) -> ReportResult<CompetitorReport> {
    ReportGenerator::default().generate(analysis)
}
