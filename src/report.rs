//! Public entry point: generate a report and serialize it on request

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::adapter::normalize;
use crate::composer::ReportComposer;
use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::model::AnalysisComparison;
use crate::pdf::{write_pdf, DocumentMeta};
use crate::surface::{RecordingSurface, RenderedDocument};

const UNKNOWN_SLUG: &str = "unknown-domain";

/// Stored report as handed over by the retrieval layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAnalysis {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub analysis: Option<Value>,
    #[serde(default)]
    pub exported_at: Option<String>,
}

/// Builds reports; holds only immutable configuration
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> ReportResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate from a raw analysis in either stored shape
    ///
    /// `None` and JSON `null` fail with `MissingAnalysis` before anything
    /// is drawn.
    pub fn generate(&self, analysis: Option<&Value>) -> ReportResult<CompetitorReport> {
        let analysis = normalize(analysis)?;
        self.render(analysis)
    }

    pub fn generate_from_export(&self, export: &ExportedAnalysis) -> ReportResult<CompetitorReport> {
        info!(
            "Generating report for export '{}' (exported at {})",
            export.id,
            export.exported_at.as_deref().unwrap_or("unknown")
        );
        self.generate(export.analysis.as_ref())
    }

    /// Parse an exported-report JSON document and generate from it
    pub fn generate_from_json(&self, json: &str) -> ReportResult<CompetitorReport> {
        let export: ExportedAnalysis = serde_json::from_str(json)?;
        self.generate_from_export(&export)
    }

    /// Compose an already-normalized analysis
    pub fn render(&self, analysis: AnalysisComparison) -> ReportResult<CompetitorReport> {
        info!("Composing competitor report for {}", analysis.main_domain);

        let export_date = self.config.export_date();
        let mut surface = RecordingSurface::new(
            self.config.page_width,
            self.config.page_height,
            self.config.max_pages,
        );
        ReportComposer::new(&mut surface, &analysis, &self.config, export_date)
            .compose()
            .map_err(ReportError::generation)?;

        let document = surface.into_document();
        info!("Composed {} pages for {}", document.page_count(), analysis.main_domain);

        Ok(CompetitorReport {
            document,
            main_domain: analysis.main_domain,
            title: self.config.title.clone(),
            export_date,
        })
    }
}

/// A composed report, held in memory until serialized
#[derive(Debug, Clone)]
pub struct CompetitorReport {
    document: RenderedDocument,
    main_domain: String,
    title: String,
    export_date: NaiveDate,
}

impl CompetitorReport {
    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn main_domain(&self) -> &str {
        &self.main_domain
    }

    pub fn export_date(&self) -> NaiveDate {
        self.export_date
    }

    /// Download name: `competitor-analysis-{domain}-{YYYY-MM-DD}.pdf`
    pub fn filename(&self) -> String {
        format!(
            "competitor-analysis-{}-{}.pdf",
            domain_slug(&self.main_domain),
            self.export_date.format("%Y-%m-%d")
        )
    }

    /// Serialize to PDF bytes; calling this repeatedly returns the same bytes
    pub fn to_pdf_bytes(&self) -> Vec<u8> {
        let meta = DocumentMeta {
            title: &self.title,
            subject: &self.main_domain,
            created: self.export_date,
        };
        let bytes = write_pdf(&self.document, &meta);
        info!(
            "PDF generated: {} bytes ({:.2} MB)",
            bytes.len(),
            bytes.len() as f64 / 1_048_576.0
        );
        bytes
    }

    /// Write the PDF into `dir` under `filename()` and return its path
    pub fn save(&self, dir: impl AsRef<Path>) -> ReportResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.filename());
        std::fs::write(&path, self.to_pdf_bytes())?;
        info!("PDF saved to: {}", path.display());
        Ok(path)
    }
}

/// Lowercase slug of a domain; placeholder or empty input maps to `unknown-domain`
pub fn domain_slug(domain: &str) -> String {
    let mut slug = String::with_capacity(domain.len());
    for ch in domain.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        UNKNOWN_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generator() -> ReportGenerator {
        ReportGenerator::new(ReportConfig {
            generated_on: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..ReportConfig::default()
        })
        .unwrap()
    }

    fn analysis() -> Value {
        json!({
            "mainDomain": "Shop.Example.com",
            "differences": {
                "summary": {"overallScore": 82, "overallRank": 2, "totalCompetitors": 3},
                "seoScores": {"mainDomain": {"domain": "shop.example.com", "scores": {"performance": 40}}},
                "recommendations": []
            }
        })
    }

    #[test]
    fn test_missing_analysis_produces_nothing() {
        let generator = generator();
        assert!(matches!(generator.generate(None), Err(ReportError::MissingAnalysis)));
        assert!(matches!(generator.generate(Some(&Value::Null)), Err(ReportError::MissingAnalysis)));
    }

    #[test]
    fn test_export_wrapper_with_null_analysis() {
        let err = generator()
            .generate_from_json(r#"{"id": "r-1", "analysis": null, "exportedAt": "2024-06-01T10:00:00Z"}"#)
            .unwrap_err();
        assert!(matches!(err, ReportError::MissingAnalysis));
    }

    #[test]
    fn test_export_wrapper_round_trip() {
        let json = json!({"id": "r-2", "analysis": analysis(), "exportedAt": "2024-06-01"}).to_string();
        let report = generator().generate_from_json(&json).unwrap();
        assert_eq!(report.main_domain(), "Shop.Example.com");
        assert!(report.page_count() >= 2);
    }

    #[test]
    fn test_filename() {
        let report = generator().generate(Some(&analysis())).unwrap();
        assert_eq!(report.filename(), "competitor-analysis-shop-example-com-2024-06-01.pdf");

        let unknown = generator().generate(Some(&json!({}))).unwrap();
        assert_eq!(unknown.filename(), "competitor-analysis-unknown-domain-2024-06-01.pdf");
    }

    #[test]
    fn test_cover_date_matches_filename() {
        let report = ReportGenerator::default().generate(Some(&analysis())).unwrap();
        let date = report.export_date();
        let cover = format!("Generated on {}", date.format("%B %-d, %Y"));
        assert_eq!(report.document().page_of(&cover), Some(0));
        assert!(report.filename().ends_with(&format!("{}.pdf", date.format("%Y-%m-%d"))));
    }

    #[test]
    fn test_domain_slug() {
        assert_eq!(domain_slug("https://www.Example.com/"), "https-www-example-com");
        assert_eq!(domain_slug("  "), UNKNOWN_SLUG);
        assert_eq!(domain_slug("Unknown Domain"), UNKNOWN_SLUG);
        assert_eq!(domain_slug("--a..b--"), "a-b");
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let report = generator().generate(Some(&analysis())).unwrap();
        let first = report.to_pdf_bytes();
        assert!(first.starts_with(b"%PDF-"));
        assert_eq!(first, report.to_pdf_bytes());
    }

    #[test]
    fn test_page_limit_wrapped_as_generation_error() {
        let generator = ReportGenerator::new(ReportConfig {
            max_pages: 1,
            ..ReportConfig::default()
        })
        .unwrap();
        match generator.generate(Some(&analysis())) {
            Err(ReportError::Generation { message, source }) => {
                assert_eq!(message, "Failed to generate PDF report");
                assert!(matches!(*source, ReportError::PageLimitExceeded(1)));
            }
            other => panic!("expected generation error, got {:?}", other.map(|r| r.page_count())),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ReportGenerator::new(ReportConfig {
            margin: -1.0,
            ..ReportConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig(_)));
    }

    #[test]
    fn test_concurrent_generation_is_isolated() {
        let generator = generator();
        let inputs: Vec<Value> = (0..4)
            .map(|i| json!({"mainDomain": format!("site-{}.com", i), "summary": {"overallScore": i * 20}}))
            .collect();

        let shared = &generator;
        let reports: Vec<CompetitorReport> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || shared.generate(Some(input)).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.main_domain(), format!("site-{}.com", i));
            let sequential = generator.generate(Some(&inputs[i])).unwrap();
            assert_eq!(report.document(), sequential.document());
        }
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join(format!("competitor-report-test-{}", std::process::id()));
        let report = generator().generate(Some(&analysis())).unwrap();
        let path = report.save(&dir).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(report.filename().as_str()));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, report.to_pdf_bytes());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
