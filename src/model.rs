//! Canonical analysis model consumed by the composer
//!
//! Only the adapter builds these values; everything downstream sees a
//! single shape regardless of how the analysis was stored.

use serde::{Deserialize, Serialize};

use crate::error::Subsection;

pub const UNKNOWN_DOMAIN: &str = "Unknown Domain";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisComparison {
    pub main_domain: String,
    pub competitors: Vec<Competitor>,
    pub summary: Option<Summary>,
    pub seo_scores: Option<SeoScores>,
    pub recommendations: Option<Vec<String>>,
}

impl AnalysisComparison {
    /// Subsections absent from the input, in document order
    pub fn missing_subsections(&self) -> Vec<Subsection> {
        let mut missing = Vec::new();
        if self.summary.is_none() {
            missing.push(Subsection::Summary);
        }
        if self.seo_scores.is_none() {
            missing.push(Subsection::SeoScores);
        }
        if self.recommendations.is_none() {
            missing.push(Subsection::Recommendations);
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub main_domain: String,
    pub overall_score: u8,
    pub overall_rank: u32,
    pub total_competitors: u32,
    pub strongest_category: String,
    pub weakest_category: String,
    pub analysis_date: String,
}

impl Summary {
    /// Size of the ranking space: every competitor plus the main domain
    pub fn ranking_size(&self) -> u32 {
        self.total_competitors.saturating_add(1)
    }

    /// `overall_rank` must fall inside the ranking space
    pub fn rank_is_consistent(&self) -> bool {
        self.overall_rank >= 1 && self.overall_rank <= self.ranking_size()
    }
}

/// Score vector for one domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreVector {
    pub performance: u8,
    pub seo: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub overall: u8,
}

impl ScoreVector {
    /// The four category scores in report order
    pub fn categories(&self) -> [(&'static str, u8); 4] {
        [
            ("Performance", self.performance),
            ("SEO", self.seo),
            ("Accessibility", self.accessibility),
            ("Best Practices", self.best_practices),
        ]
    }

    /// Overall followed by the four categories
    pub fn with_overall(&self) -> [(&'static str, u8); 5] {
        let [a, b, c, d] = self.categories();
        [("Overall", self.overall), a, b, c, d]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScores {
    pub domain: String,
    pub scores: ScoreVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScores {
    pub main_domain: DomainScores,
    pub competitors: Vec<DomainScores>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(rank: u32, total: u32) -> Summary {
        Summary {
            main_domain: "example.com".to_string(),
            overall_score: 50,
            overall_rank: rank,
            total_competitors: total,
            strongest_category: NOT_AVAILABLE.to_string(),
            weakest_category: NOT_AVAILABLE.to_string(),
            analysis_date: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn test_rank_consistency() {
        assert!(summary(4, 3).rank_is_consistent());
        assert!(!summary(5, 3).rank_is_consistent());
        assert!(!summary(0, 3).rank_is_consistent());
        assert_eq!(summary(1, 0).ranking_size(), 1);
    }

    #[test]
    fn test_score_order() {
        let scores = ScoreVector {
            performance: 1,
            seo: 2,
            accessibility: 3,
            best_practices: 4,
            overall: 5,
        };
        let labels: Vec<_> = scores.with_overall().iter().map(|(l, v)| format!("{l}={v}")).collect();
        assert_eq!(labels, ["Overall=5", "Performance=1", "SEO=2", "Accessibility=3", "Best Practices=4"]);
    }

    #[test]
    fn test_missing_subsections() {
        let analysis = AnalysisComparison {
            main_domain: UNKNOWN_DOMAIN.to_string(),
            competitors: Vec::new(),
            summary: Some(summary(1, 0)),
            seo_scores: None,
            recommendations: None,
        };
        assert_eq!(
            analysis.missing_subsections(),
            vec![Subsection::SeoScores, Subsection::Recommendations]
        );
    }
}
