//! SVG builder: accumulates SVG elements and produces the final string.

use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    title: Option<String>,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            title: None,
        }
    }

    pub(super) fn title(&mut self, title: &str) {
        self.title = Some(escape(title));
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            num(self.width), num(self.height), num(self.width), num(self.height)
        );
        svg.push('\n');
        if let Some(title) = &self.title {
            svg.push_str(&format!("  <title>{title}</title>\n"));
        }
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(cx), num(cy), num(r), fill
        ));
    }

    pub(super) fn stroked_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            num(cx), num(cy), num(r), fill, stroke, num(stroke_width)
        ));
    }

    /// Define a rectangular clip path and return its id.
    pub(super) fn clip_rect(&mut self, id: &str, x: f64, y: f64, w: f64, h: f64) -> String {
        self.elements.push(format!(
            r#"<defs><clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            id, num(x), num(y), num(w), num(h)
        ));
        id.to_string()
    }

    pub(super) fn clipped_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, clip_id: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" clip-path="url(#{})"/>"#,
            num(cx), num(cy), num(r), fill, clip_id
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" text-anchor="{}" font-family="sans-serif" font-size="{}" fill="{}">{}</text>"#,
            num(x), num(y), anchor, num(size), INK_COLOR, escape(content)
        ));
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub(super) fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
