//! Report configuration
//!
//! Every field has a default, so callers can pass a partial JSON object
//! (or nothing at all).

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// A4 in points
pub const A4_WIDTH: f64 = 595.28;
pub const A4_HEIGHT: f64 = 841.89;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub title: String,
    /// Stamp "Page n of m" on every page after the cover
    pub page_numbers: bool,
    /// Upper bound on pages a single report may produce
    pub max_pages: usize,
    /// Export date; today (local time) when unset
    pub generated_on: Option<NaiveDate>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: 50.0,
            title: "Competitor Analysis Report".to_string(),
            page_numbers: true,
            max_pages: 500,
            generated_on: None,
        }
    }
}

impl ReportConfig {
    /// Parse from a (possibly partial) JSON object
    pub fn from_json_str(json: &str) -> ReportResult<Self> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReportResult<()> {
        if !(self.page_width.is_finite() && self.page_width > 0.0)
            || !(self.page_height.is_finite() && self.page_height > 0.0)
        {
            return Err(ReportError::InvalidConfig(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ReportError::InvalidConfig(format!("margin must be non-negative, got {}", self.margin)));
        }
        if self.margin * 2.0 >= self.page_width.min(self.page_height) {
            return Err(ReportError::InvalidConfig(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        if self.max_pages == 0 {
            return Err(ReportError::InvalidConfig("maxPages must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Export date used for the cover footer and the download filename
    pub fn export_date(&self) -> NaiveDate {
        self.generated_on.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_width, A4_WIDTH);
        assert!(config.page_numbers);
    }

    #[test]
    fn test_partial_json() {
        let config = ReportConfig::from_json_str(r#"{"margin": 36, "generatedOn": "2024-03-05"}"#).unwrap();
        assert_eq!(config.margin, 36.0);
        assert_eq!(config.page_height, A4_HEIGHT);
        assert_eq!(config.export_date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_rejects_oversized_margin() {
        let err = ReportConfig::from_json_str(r#"{"margin": 400}"#).unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_page_limit() {
        let config = ReportConfig {
            max_pages: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_json() {
        let err = ReportConfig::from_json_str("{margin").unwrap_err();
        assert!(matches!(err, ReportError::JsonError(_)));
    }
}
