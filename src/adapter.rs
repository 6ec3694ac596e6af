//! Normalization of stored analyses into the canonical model
//!
//! Two shapes are in circulation: current exports nest `summary`,
//! `seoScores` and `recommendations` under `differences`, older ones keep
//! them at the top level. Both become the same `AnalysisComparison`.

use log::warn;
use serde_json::Value;

use crate::error::{ReportError, ReportResult};
use crate::json_helpers::{get_any, get_array_opt, get_score, get_str_opt, get_string_or, get_u32_or};
use crate::model::{
    AnalysisComparison, Competitor, DomainScores, ScoreVector, SeoScores, Summary, NOT_AVAILABLE,
    UNKNOWN_DOMAIN,
};

const MAIN_DOMAIN: &[&str] = &["mainDomain", "main_domain"];
const DOMAIN: &[&str] = &["domain", "url"];

/// Build the canonical view of a raw analysis
///
/// `None` (absent) and JSON `null` are both fatal. Missing subsections are
/// left as `None` for the composer to render placeholders.
pub fn normalize(raw: Option<&Value>) -> ReportResult<AnalysisComparison> {
    let raw = match raw {
        None | Some(Value::Null) => return Err(ReportError::MissingAnalysis),
        Some(value) if !value.is_object() => {
            return Err(ReportError::InvalidAnalysis(format!(
                "expected an object, got {}",
                json_type_name(value)
            )))
        }
        Some(value) => value,
    };

    let working = get_any(raw, &["differences"]).filter(|v| v.is_object()).unwrap_or(raw);

    let summary_value = get_any(working, &["summary"]).filter(|v| v.is_object());
    let scores_value = get_any(working, &["seoScores", "seo_scores"]).filter(|v| v.is_object());

    let main_domain = get_str_opt(raw, MAIN_DOMAIN)
        .or_else(|| summary_value.and_then(|s| get_str_opt(s, MAIN_DOMAIN)))
        .or_else(|| {
            scores_value
                .and_then(|s| get_any(s, MAIN_DOMAIN))
                .and_then(|m| get_str_opt(m, DOMAIN))
        })
        .unwrap_or(UNKNOWN_DOMAIN)
        .to_string();

    let summary = summary_value.map(|s| parse_summary(s, &main_domain));
    if let Some(summary) = &summary {
        if !summary.rank_is_consistent() {
            warn!(
                "Rank {} lies outside the ranking space of {} domains",
                summary.overall_rank,
                summary.ranking_size()
            );
        }
    }

    let competitors = parse_competitors(raw, working);
    let seo_scores = scores_value.map(|s| parse_seo_scores(s, &main_domain, &competitors));

    Ok(AnalysisComparison {
        competitors,
        summary,
        seo_scores,
        recommendations: get_array_opt(working, &["recommendations"]).map(|items| parse_recommendations(items)),
        main_domain,
    })
}

fn parse_summary(value: &Value, main_domain: &str) -> Summary {
    Summary {
        main_domain: get_string_or(value, MAIN_DOMAIN, main_domain),
        overall_score: get_score(value, &["overallScore", "overall_score"]),
        overall_rank: get_u32_or(value, &["overallRank", "overall_rank"], 1),
        total_competitors: get_u32_or(value, &["totalCompetitors", "total_competitors"], 0),
        strongest_category: get_string_or(value, &["strongestCategory", "strongest_category"], NOT_AVAILABLE),
        weakest_category: get_string_or(value, &["weakestCategory", "weakest_category"], NOT_AVAILABLE),
        analysis_date: get_string_or(value, &["analysisDate", "analysis_date"], NOT_AVAILABLE),
    }
}

fn parse_score_vector(value: Option<&Value>) -> ScoreVector {
    let Some(value) = value else {
        return ScoreVector::default();
    };
    ScoreVector {
        performance: get_score(value, &["performance"]),
        seo: get_score(value, &["seo"]),
        accessibility: get_score(value, &["accessibility"]),
        best_practices: get_score(value, &["bestPractices", "best_practices"]),
        overall: get_score(value, &["overall"]),
    }
}

fn parse_domain_scores(value: Option<&Value>, fallback_domain: &str) -> DomainScores {
    DomainScores {
        domain: value
            .and_then(|v| get_str_opt(v, DOMAIN))
            .unwrap_or(fallback_domain)
            .to_string(),
        scores: parse_score_vector(value.and_then(|v| get_any(v, &["scores"]))),
    }
}

/// Score entries without a domain take the name from the top-level
/// competitor list at the same position
fn parse_seo_scores(value: &Value, main_domain: &str, listed: &[Competitor]) -> SeoScores {
    let competitors = get_array_opt(value, &["competitors"])
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .enumerate()
                .map(|(index, item)| {
                    let fallback = listed.get(index).map_or(UNKNOWN_DOMAIN, |c| c.domain.as_str());
                    parse_domain_scores(Some(item), fallback)
                })
                .collect()
        })
        .unwrap_or_default();

    SeoScores {
        main_domain: parse_domain_scores(get_any(value, MAIN_DOMAIN), main_domain),
        competitors,
    }
}

fn parse_competitors(raw: &Value, working: &Value) -> Vec<Competitor> {
    let items = get_array_opt(raw, &["competitors"]).or_else(|| get_array_opt(working, &["competitors"]));
    let Some(items) = items else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(domain) => Some(domain.trim().to_string()),
            Value::Object(_) => Some(get_string_or(item, DOMAIN, UNKNOWN_DOMAIN)),
            _ => None,
        })
        .filter(|domain| !domain.is_empty())
        .map(|domain| Competitor { domain })
        .collect()
}

fn parse_recommendations(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
