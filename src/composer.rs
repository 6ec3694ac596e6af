//! Document composer
//!
//! Walks the fixed section order (cover, executive summary, performance
//! overview, recommendations) against a `DrawingSurface`, using the
//! `LayoutCursor` for every page-break decision.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::ReportConfig;
use crate::cursor::LayoutCursor;
use crate::error::{ReportResult, Subsection};
use crate::model::{AnalysisComparison, DomainScores, ScoreVector};
use crate::score_color::{color_for, ScoreBand};
use crate::section::{add_section_header, palette};
use crate::surface::DrawingSurface;
use crate::types::{Color, Rect, TextStyle};

const BODY_SIZE: f64 = 11.0;
const SUBHEADING_SIZE: f64 = 13.0;
const LINE_HEIGHT: f64 = 18.0;
const SUBHEADING_HEIGHT: f64 = 24.0;
const SECTION_GAP: f64 = 24.0;
const BLOCK_GAP: f64 = 12.0;
const INDENT: f64 = 16.0;

const BAR_ROW_HEIGHT: f64 = 38.0;
const BAR_OFFSET: f64 = 18.0;
const BAR_HEIGHT: f64 = 8.0;

const COVER_BANNER_HEIGHT: f64 = 220.0;
const COVER_PANEL_HEIGHT: f64 = 240.0;
const COVER_PANEL_OFFSET: f64 = 40.0;

const CHECKBOX_SIZE: f64 = 8.0;
const NUMBER_COLUMN: f64 = 22.0;

/// Lines in a competitor block: numbered domain heading plus five scores
const COMPETITOR_BLOCK_LINES: usize = 6;

pub const NEXT_STEPS: [&str; 5] = [
    "Prioritize fixes in your weakest category before anything else.",
    "Resolve technical SEO issues on your highest-traffic pages.",
    "Benchmark page speed against the top-ranked competitor.",
    "Review accessibility issues such as missing alt text and low contrast.",
    "Re-run this analysis in 30 days to measure progress.",
];

pub const NO_COMPETITORS: &str = "No competitor data available.";

fn body() -> TextStyle {
    TextStyle::new(BODY_SIZE).color(palette::ink())
}

/// Rank line shared by the cover and the summary bullets
///
/// The main domain occupies one slot of the ranking space, hence `+ 1`.
pub fn rank_label(rank: u32, total_competitors: u32) -> String {
    format!("#{} of {}", rank, total_competitors.saturating_add(1))
}

/// Lays out one report onto a surface
pub struct ReportComposer<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    cursor: LayoutCursor,
    analysis: &'a AnalysisComparison,
    title: &'a str,
    generated_on: NaiveDate,
    page_numbers: bool,
}

impl<'a, S: DrawingSurface + ?Sized> ReportComposer<'a, S> {
    /// `generated_on` is resolved once by the caller so the cover date
    /// matches the download filename
    pub fn new(
        surface: &'a mut S,
        analysis: &'a AnalysisComparison,
        config: &'a ReportConfig,
        generated_on: NaiveDate,
    ) -> Self {
        let cursor = LayoutCursor::new(surface.page_width(), surface.page_height(), config.margin);
        Self {
            surface,
            cursor,
            analysis,
            title: &config.title,
            generated_on,
            page_numbers: config.page_numbers,
        }
    }

    /// Render every section in order
    pub fn compose(mut self) -> ReportResult<()> {
        for gap in self.analysis.missing_subsections() {
            warn!("Analysis has no '{}'; rendering placeholder", gap.key());
        }

        self.render_cover()?;
        self.render_executive_summary()?;
        self.render_performance_overview()?;
        self.render_recommendations()?;

        if self.page_numbers {
            self.render_page_footers();
        }

        debug!("Composed {} pages for {}", self.surface.page_count(), self.analysis.main_domain);
        Ok(())
    }

    // ===== Helpers =====

    /// Draw one line at the cursor and move below it
    fn write_line(&mut self, text: &str, x: f64, style: &TextStyle) {
        let baseline = self.cursor.y() + style.size;
        self.surface.text(text, x, baseline, style);
        self.cursor.advance(LINE_HEIGHT.max(style.size * 1.4));
    }

    /// Bold sub-heading kept on the same page as the next `keep_with` points
    fn subheading(&mut self, title: &str, keep_with: f64) -> ReportResult<()> {
        self.cursor.ensure_space(self.surface, SUBHEADING_HEIGHT + keep_with)?;
        let baseline = self.cursor.y() + SUBHEADING_SIZE;
        let style = TextStyle::new(SUBHEADING_SIZE).bold().color(palette::ink());
        self.surface.text(title, self.cursor.margin(), baseline, &style);
        self.cursor.advance(SUBHEADING_HEIGHT);
        Ok(())
    }

    fn placeholder(&mut self, gap: Subsection) -> ReportResult<()> {
        self.cursor.ensure_space(self.surface, LINE_HEIGHT)?;
        let style = TextStyle::new(BODY_SIZE).color(palette::muted());
        self.write_line(gap.placeholder(), self.cursor.margin(), &style);
        Ok(())
    }

    // ===== Cover =====

    fn render_cover(&mut self) -> ReportResult<()> {
        let width = self.surface.page_width();
        let height = self.surface.page_height();
        let center = width / 2.0;
        let margin = self.cursor.margin();

        self.surface.fill_rect(Rect::new(0.0, 0.0, width, COVER_BANNER_HEIGHT), palette::brand());
        self.surface.text(
            self.title,
            center,
            100.0,
            &TextStyle::new(28.0).bold().centered().color(Color::white()),
        );
        self.surface.text(
            &self.analysis.main_domain,
            center,
            140.0,
            &TextStyle::new(16.0).centered().color(Color::white()),
        );

        let (score, rank, total) = self
            .analysis
            .summary
            .as_ref()
            .map(|s| (s.overall_score, s.overall_rank, s.total_competitors))
            .unwrap_or((0, 1, 0));

        let panel_top = COVER_BANNER_HEIGHT + COVER_PANEL_OFFSET;
        self.surface.fill_rect(
            Rect::new(margin, panel_top, self.cursor.content_width(), COVER_PANEL_HEIGHT),
            palette::panel(),
        );
        self.surface.text(
            &score.to_string(),
            center,
            panel_top + 100.0,
            &TextStyle::new(72.0).bold().centered().color(color_for(score)),
        );
        self.surface.text(
            "Overall Score",
            center,
            panel_top + 135.0,
            &TextStyle::new(14.0).centered().color(palette::muted()),
        );
        self.surface.text(
            ScoreBand::from_score(score).label(),
            center,
            panel_top + 158.0,
            &TextStyle::new(12.0).bold().centered().color(color_for(score)),
        );
        self.surface.text(
            &format!("Rank: {}", rank_label(rank, total)),
            center,
            panel_top + 200.0,
            &TextStyle::new(16.0).bold().centered().color(palette::ink()),
        );

        self.surface.text(
            &format!("Generated on {}", self.generated_on.format("%B %-d, %Y")),
            center,
            height - margin,
            &TextStyle::new(10.0).centered().color(palette::muted()),
        );

        self.surface.new_page()?;
        self.cursor.reset();
        Ok(())
    }

    // ===== Executive summary =====

    fn render_executive_summary(&mut self) -> ReportResult<()> {
        let analysis = self.analysis;
        add_section_header(self.surface, &mut self.cursor, "Executive Summary", Some("01"))?;

        match &analysis.summary {
            Some(summary) => {
                let bullets = [
                    format!("Domain analyzed: {}", summary.main_domain),
                    format!("Overall rank: {}", rank_label(summary.overall_rank, summary.total_competitors)),
                    format!("Competitors analyzed: {}", summary.total_competitors),
                    format!("Overall score: {}/100", summary.overall_score),
                    format!("Strongest category: {}", summary.strongest_category),
                    format!("Weakest category: {}", summary.weakest_category),
                ];
                self.cursor.ensure_space(self.surface, bullets.len() as f64 * LINE_HEIGHT)?;
                let x = self.cursor.margin() + 8.0;
                for bullet in &bullets {
                    self.write_line(&format!("• {}", bullet), x, &body());
                }
            }
            None => self.placeholder(Subsection::Summary)?,
        }
        self.cursor.advance(BLOCK_GAP);

        match &analysis.seo_scores {
            Some(scores) => self.render_breakdown(&scores.main_domain.scores)?,
            None => self.placeholder(Subsection::SeoScores)?,
        }
        self.cursor.advance(SECTION_GAP);
        Ok(())
    }

    /// Four labelled bars, fill proportional to the score
    fn render_breakdown(&mut self, scores: &ScoreVector) -> ReportResult<()> {
        self.subheading("Performance Breakdown", BAR_ROW_HEIGHT)?;
        let x = self.cursor.margin();
        let track_width = self.cursor.content_width();

        for (label, score) in scores.categories() {
            self.cursor.ensure_space(self.surface, BAR_ROW_HEIGHT)?;
            let top = self.cursor.y();
            self.surface.text(&format!("{}: {}/100", label, score), x, top + BODY_SIZE, &body());

            let bar_y = top + BAR_OFFSET;
            self.surface.fill_rect(Rect::new(x, bar_y, track_width, BAR_HEIGHT), palette::track());
            let fill_width = track_width * f64::from(score) / 100.0;
            if fill_width > 0.0 {
                self.surface.fill_rect(Rect::new(x, bar_y, fill_width, BAR_HEIGHT), color_for(score));
            }
            self.cursor.advance(BAR_ROW_HEIGHT);
        }
        Ok(())
    }

    // ===== Performance overview =====

    fn render_performance_overview(&mut self) -> ReportResult<()> {
        let analysis = self.analysis;
        add_section_header(self.surface, &mut self.cursor, "Performance Overview", Some("02"))?;

        let Some(scores) = &analysis.seo_scores else {
            self.placeholder(Subsection::SeoScores)?;
            self.cursor.advance(SECTION_GAP);
            return Ok(());
        };

        self.subheading("Your Website", COMPETITOR_BLOCK_LINES as f64 * LINE_HEIGHT)?;
        self.score_lines(&scores.main_domain, None);
        self.cursor.advance(BLOCK_GAP);

        self.subheading("Competitors", LINE_HEIGHT)?;
        if scores.competitors.is_empty() {
            self.write_line(NO_COMPETITORS, self.cursor.margin(), &body());
            self.cursor.advance(SECTION_GAP);
            return Ok(());
        }

        let block_height = COMPETITOR_BLOCK_LINES as f64 * LINE_HEIGHT + BLOCK_GAP;
        for (index, competitor) in scores.competitors.iter().enumerate() {
            self.cursor.ensure_space(self.surface, block_height)?;
            self.score_lines(competitor, Some(index + 1));
            self.cursor.advance(BLOCK_GAP);
        }
        self.cursor.advance(SECTION_GAP);
        Ok(())
    }

    /// Domain heading followed by the five scores
    fn score_lines(&mut self, entry: &DomainScores, number: Option<usize>) {
        let margin = self.cursor.margin();
        let heading = match number {
            Some(n) => format!("{}. {}", n, entry.domain),
            None => entry.domain.clone(),
        };
        self.write_line(&heading, margin, &body().bold());
        for (label, value) in entry.scores.with_overall() {
            self.write_line(&format!("{}: {}/100", label, value), margin + INDENT, &body());
        }
    }

    // ===== Recommendations =====

    fn render_recommendations(&mut self) -> ReportResult<()> {
        let analysis = self.analysis;
        add_section_header(self.surface, &mut self.cursor, "Recommendations", Some("03"))?;

        let items = analysis.recommendations.as_deref().unwrap_or(&[]);
        if items.is_empty() {
            self.cursor.ensure_space(self.surface, LINE_HEIGHT)?;
            self.write_line(Subsection::Recommendations.placeholder(), self.cursor.margin(), &body());
        } else {
            self.numbered_list(items)?;
        }
        self.cursor.advance(BLOCK_GAP);

        self.render_next_steps()
    }

    fn numbered_list(&mut self, items: &[String]) -> ReportResult<()> {
        let margin = self.cursor.margin();
        let width = self.cursor.content_width() - NUMBER_COLUMN;
        let style = body();

        for (index, item) in items.iter().enumerate() {
            let lines = self.surface.wrap(item, width, &style);
            let height = lines.len().max(1) as f64 * LINE_HEIGHT + BLOCK_GAP / 2.0;
            self.cursor.ensure_space(self.surface, height)?;

            let top = self.cursor.y();
            self.surface.text(&format!("{}.", index + 1), margin, top + BODY_SIZE, &style.bold());
            for (row, line) in lines.iter().enumerate() {
                // Entries taller than a page continue on the next one
                if row > 0 {
                    self.cursor.ensure_space(self.surface, LINE_HEIGHT)?;
                }
                self.write_line(line, margin + NUMBER_COLUMN, &style);
            }
            self.cursor.advance(BLOCK_GAP / 2.0);
        }
        Ok(())
    }

    fn render_next_steps(&mut self) -> ReportResult<()> {
        self.subheading("Next Steps", LINE_HEIGHT)?;
        let margin = self.cursor.margin();
        let width = self.cursor.content_width() - NUMBER_COLUMN;
        let style = body();

        for step in NEXT_STEPS {
            let lines = self.surface.wrap(step, width, &style);
            self.cursor.ensure_space(self.surface, lines.len().max(1) as f64 * LINE_HEIGHT)?;

            let top = self.cursor.y();
            let box_y = top + (BODY_SIZE - CHECKBOX_SIZE) / 2.0 + 2.0;
            self.surface.fill_rect(Rect::new(margin + 4.0, box_y, CHECKBOX_SIZE, CHECKBOX_SIZE), palette::track());
            for line in &lines {
                self.write_line(line, margin + NUMBER_COLUMN, &style);
            }
        }
        Ok(())
    }

    // ===== Footers =====

    fn render_page_footers(&mut self) {
        let total = self.surface.page_count();
        let x = self.surface.page_width() - self.cursor.margin();
        let y = self.surface.page_height() - self.cursor.margin() / 2.0;
        let style = TextStyle::new(9.0).right().color(palette::muted());

        // The cover carries its own footer
        for index in 1..total {
            self.surface.select_page(index);
            self.surface.text(&format!("Page {} of {}", index + 1, total), x, y, &style);
        }
        self.surface.select_page(total.saturating_sub(1));
    }
}
