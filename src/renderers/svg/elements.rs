//! SVG element building
//!
//! Collects SVG elements as strings and wraps them in a root `<svg>` element.

use crate::utils::xml_escape;

pub struct SvgBuilder {
    elements: Vec<String>,
    top: f32,
    width: f32,
    height: f32,
}

impl SvgBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_top(0.0, width, height)
    }

    /// Builder whose viewBox starts at `top` instead of 0
    pub fn with_top(top: f32, width: f32, height: f32) -> Self {
        Self {
            elements: Vec::new(),
            top,
            width,
            height,
        }
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 {} {} {}" width="{}" height="{}">"#,
            self.top, self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &str, width: f32) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    /// Image referenced by `href`, drawn with its top-left corner at (x, y)
    pub fn image(&mut self, x: f32, y: f32, w: f32, h: f32, href: &str, class: &str) {
        self.elements.push(format!(
            r#"<image x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" href="{}" class="{}"/>"#,
            x,
            y,
            w,
            h,
            xml_escape(href),
            class
        ));
    }

    /// Text whose top edge sits at `y`
    pub fn hanging_text(&mut self, x: f32, y: f32, content: &str, size: f32, class: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" dominant-baseline="hanging" class="{}">{}</text>"#,
            x,
            y,
            size,
            class,
            xml_escape(content)
        ));
    }
}
