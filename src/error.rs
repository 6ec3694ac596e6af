//! Error types for report generation
//!
//! Fatal input problems and composition failures are reported through
//! `ReportError`. Gaps inside an otherwise valid analysis are not errors:
//! they are described by `Subsection` and rendered as placeholders.

use thiserror::Error;

/// Custom error type for report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Analysis data is missing")]
    MissingAnalysis,

    #[error("Invalid analysis data: {0}")]
    InvalidAnalysis(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Page limit of {0} pages exceeded")]
    PageLimitExceeded(usize),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{message}")]
    Generation {
        message: String,
        #[source]
        source: Box<ReportError>,
    },
}

impl ReportError {
    /// Wrap a composition failure with the message shown to the user
    pub fn generation(source: ReportError) -> Self {
        ReportError::Generation {
            message: "Failed to generate PDF report".to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::JsonError(err.to_string())
    }
}

/// A named part of the analysis that may be absent without aborting generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsection {
    Summary,
    SeoScores,
    Recommendations,
}

impl Subsection {
    pub fn key(self) -> &'static str {
        match self {
            Subsection::Summary => "summary",
            Subsection::SeoScores => "seoScores",
            Subsection::Recommendations => "recommendations",
        }
    }

    /// Text drawn in place of the missing data
    pub fn placeholder(self) -> &'static str {
        match self {
            Subsection::Summary => "Summary data not available.",
            Subsection::SeoScores => "Performance data not available.",
            Subsection::Recommendations => "No specific recommendations available at this time.",
        }
    }
}
