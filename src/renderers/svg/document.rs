//! SVG staff generation
//!
//! Draws the treble clef, five staff lines and the key signature glyphs of a
//! [`RenderStaff`] as one standalone SVG document.

use super::elements::SvgBuilder;
use crate::renderers::display_list::RenderStaff;

const STAFF_COLOR: &str = "#000000";
const STAFF_LINE_WIDTH: f32 = 1.0;

pub struct SvgStaffGenerator;

impl SvgStaffGenerator {
    pub fn generate(staff: &RenderStaff) -> String {
        // Glyphs above the staff block (G♯ sits at -3) widen the view upward
        let top = staff.accidentals.iter().map(|a| a.y).fold(0.0_f32, f32::min);
        let mut svg = SvgBuilder::with_top(top, staff.width, staff.height - top);

        for &y in &staff.line_ys {
            svg.line(0.0, y, staff.width, y, STAFF_COLOR, STAFF_LINE_WIDTH);
        }

        svg.image(0.0, 0.0, staff.clef_width, staff.height, &staff.clef_src, "treble-clef");

        // Natural slots keep their position but draw nothing
        for accidental in staff.accidentals.iter().filter(|a| !a.text.is_empty()) {
            svg.hanging_text(accidental.x, accidental.y, &accidental.text, staff.font_size, "accidental");
        }

        svg.build()
    }
}
