//! SVG rendering output
//!
//! This module provides SVG rendering of the key signature staff.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;
use crate::renderers::display_list::DisplayList;

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    /// Render the staff of a display list; `None` on the prompt screen
    pub fn render_display_list(display: &DisplayList) -> Option<String> {
        display.staff.as_ref().map(SvgStaffGenerator::generate)
    }
}
