use crate::config::PageSize;
use crate::core::layout::LogSheet;
use crate::core::layout::sheet::{hour_ruler, quarter_ticks};
use crate::utils::colors::rgb;
use crate::utils::formatting::hours2readable;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes one landscape page per log sheet.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    label_w: f32,
    totals_w: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    small_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    pub fn new(page: PageSize) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let (page_w, page_h) = page.landscape();

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin: 40.0,
            label_w: 130.0,
            totals_w: 60.0,
            row_h: 36.0,

            next_id,
            font_id,

            font_size: 10.0,
            small_font_size: 7.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        // Base-14 font without an explicit encoding: ASCII only.
        let ascii: String = text
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect();

        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(ascii.as_bytes()));
        content.end_text();
    }

    fn draw_centered(&self, content: &mut Content, cx: f32, y: f32, size: f32, text: &str) {
        let approx_w = text.chars().count() as f32 * size * 0.5;
        self.draw_text(content, cx - approx_w / 2.0, y, size, text);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_line(
        &self,
        content: &mut Content,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        (r, g, b): (f32, f32, f32),
    ) {
        content.save_state();
        content.set_line_width(width);
        content.set_stroke_rgb(r, g, b);
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
        content.restore_state();
    }

    fn header_fields(sheet: &LogSheet) -> String {
        let mut fields = Vec::new();
        if let Some(d) = sheet.date {
            fields.push(format!("Date: {}", d.format("%m/%d/%Y")));
        }
        if let Some(from) = &sheet.from {
            fields.push(format!("From: {from}"));
        }
        if let Some(to) = &sheet.to {
            fields.push(format!("To: {to}"));
        }
        if let Some(miles) = sheet.total_miles {
            fields.push(format!("Total miles driving today: {miles:.0}"));
        }
        fields.join("     ")
    }

    /// Draw one day's grid on a fresh page.
    pub fn write_sheet(&mut self, sheet: &LogSheet, show_totals: bool) {
        let mut content = self.new_page();

        let totals_w = if show_totals { self.totals_w } else { 0.0 };
        let track_x = self.margin + self.label_w;
        let track_w = self.page_w - 2.0 * self.margin - self.label_w - totals_w;
        let x_at = |percent: f64| track_x + (percent as f32) / 100.0 * track_w;

        // title + header fields
        let title_y = self.page_h - self.margin - self.title_font_size;
        self.draw_text(
            &mut content,
            self.margin,
            title_y,
            self.title_font_size,
            &format!("Drivers Daily Log - Day {}", sheet.day),
        );
        let fields = Self::header_fields(sheet);
        if !fields.is_empty() {
            self.draw_text(&mut content, self.margin, title_y - 20.0, self.font_size, &fields);
        }

        let grid_top = title_y - 60.0;
        let grid_h = sheet.rows.len() as f32 * self.row_h;
        let grid_bottom = grid_top - grid_h;
        let grey = (0.65, 0.65, 0.65);
        let light = (0.85, 0.85, 0.85);
        let black = (0.0, 0.0, 0.0);

        // ruler above the grid
        for tick in hour_ruler() {
            self.draw_centered(
                &mut content,
                x_at(tick.percent),
                grid_top + 6.0,
                self.small_font_size,
                &tick.label,
            );
        }
        if show_totals {
            self.draw_centered(
                &mut content,
                track_x + track_w + totals_w / 2.0,
                grid_top + 6.0,
                self.small_font_size,
                "Total Hours",
            );
        }

        // row frames and labels
        for (i, row) in sheet.rows.iter().enumerate() {
            let top = grid_top - i as f32 * self.row_h;
            content.save_state();
            content.set_stroke_rgb(grey.0, grey.1, grey.2);
            content.rect(
                self.margin,
                top - self.row_h,
                self.label_w + track_w + totals_w,
                self.row_h,
            );
            content.stroke();
            content.restore_state();

            self.draw_text(
                &mut content,
                self.margin + 4.0,
                top - self.row_h / 2.0 - 3.0,
                self.font_size,
                &format!("{}. {}", row.index, row.label),
            );
        }

        // quarter ticks hang from each row's top edge; the half hour is longer
        for q in quarter_ticks() {
            let x = x_at(q);
            let quarter = (q / 100.0 * 96.0).round() as i64;
            let is_half = quarter % 4 == 2;
            let len = if is_half { 10.0 } else { 6.0 };
            for i in 0..sheet.rows.len() {
                let top = grid_top - i as f32 * self.row_h;
                self.draw_line(&mut content, x, top, x, top - len, 0.5, light);
            }
        }
        for tick in hour_ruler() {
            let x = x_at(tick.percent);
            self.draw_line(&mut content, x, grid_top, x, grid_bottom, 0.5, grey);
        }

        // duty segments
        for (i, row) in sheet.rows.iter().enumerate() {
            let top = grid_top - i as f32 * self.row_h;
            let mid = top - self.row_h / 2.0;
            let colour = rgb(row.category);

            for geo in &row.geometry {
                let (x1, x2) = (x_at(geo.marks.left), x_at(geo.marks.right));
                self.draw_line(&mut content, x1, mid, x2, mid, 2.0, colour);
                self.draw_line(&mut content, x1, top, x1, top - self.row_h, 1.0, colour);
                self.draw_line(&mut content, x2, top, x2, top - self.row_h, 1.0, colour);
            }

            if show_totals {
                self.draw_centered(
                    &mut content,
                    track_x + track_w + totals_w / 2.0,
                    mid - 3.0,
                    self.font_size,
                    &hours2readable(row.total_hours, true),
                );
            }
        }

        self.draw_text(
            &mut content,
            self.margin + 4.0,
            grid_bottom - 14.0,
            self.small_font_size,
            "Mid - Mid",
        );
        if show_totals {
            self.draw_centered(
                &mut content,
                track_x + track_w + totals_w / 2.0,
                grid_bottom - 14.0,
                self.font_size,
                &hours2readable(sheet.total_hours, true),
            );
            self.draw_line(
                &mut content,
                track_x + track_w,
                grid_bottom - 4.0,
                track_x + track_w + totals_w,
                grid_bottom - 4.0,
                0.5,
                black,
            );
        }

        self.finalize_page(content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
