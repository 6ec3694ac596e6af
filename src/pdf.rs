//! PDF serialization of a composed document
//!
//! Object layout: 1 = catalog, 2 = page tree, 3 = document info, then one
//! object per standard font, then a (page, content stream) pair per page.
//! The output depends only on the document and its metadata, so repeated
//! serialization yields identical bytes.

use chrono::{Datelike, NaiveDate};
use log::debug;
use pdf_writer::{Date, Finish, Name, Pdf, Rect as PdfRect, Ref, TextStr};

use crate::canvas::PdfCanvas;
use crate::fonts::StandardFont;
use crate::surface::{DrawOp, RenderedDocument};

const PRODUCER: &str = "competitor_report";

/// Document info written to the PDF trailer
#[derive(Debug, Clone)]
pub struct DocumentMeta<'a> {
    pub title: &'a str,
    pub subject: &'a str,
    pub created: NaiveDate,
}

/// Serialize `document` into PDF bytes
pub fn write_pdf(document: &RenderedDocument, meta: &DocumentMeta) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let info_id = Ref::new(3);
    let mut next_ref_id = 4;
    let mut next_ref = || {
        let r = Ref::new(next_ref_id);
        next_ref_id += 1;
        r
    };

    pdf.catalog(catalog_id).pages(page_tree_id);

    let fonts: Vec<(Name<'static>, Ref)> = StandardFont::ALL
        .iter()
        .map(|font| {
            let font_id = next_ref();
            pdf.type1_font(font_id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (font.resource_name(), font_id)
        })
        .collect();

    let mut page_ids = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let page_id = next_ref();
        let content_id = next_ref();

        let mut canvas = PdfCanvas::new(page.height);
        for op in &page.ops {
            match op {
                DrawOp::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
                DrawOp::Text { text, x, y, style } => canvas.draw_string(text, *x, *y, style),
            }
        }
        pdf.stream(content_id, &canvas.finish());

        let mut page_writer = pdf.page(page_id);
        page_writer
            .media_box(PdfRect::new(0.0, 0.0, page.width as f32, page.height as f32))
            .parent(page_tree_id)
            .contents(content_id);
        {
            let mut resources = page_writer.resources();
            let mut font_dict = resources.fonts();
            for (name, font_id) in &fonts {
                font_dict.pair(*name, *font_id);
            }
        }
        page_writer.finish();

        page_ids.push(page_id);
    }

    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    pdf.document_info(info_id)
        .title(TextStr(meta.title))
        .subject(TextStr(meta.subject))
        .producer(TextStr(PRODUCER))
        .creation_date(
            Date::new(meta.created.year() as u16)
                .month(meta.created.month() as u8)
                .day(meta.created.day() as u8),
        );

    let bytes = pdf.finish();
    debug!("Serialized {} pages into {} bytes", page_ids.len(), bytes.len());
    bytes
}
