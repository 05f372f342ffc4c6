//! HTML rendering
//!
//! Produces a self-contained HTML fragment from a [`DisplayList`]. The host
//! page supplies the look of `.key-signature`, `.treble-clef`, `.staff-line`
//! and `.accidental`; staff lines and accidentals are positioned inline from
//! the layout so they always agree.

use super::display_list::*;
use crate::utils::xml_escape;

/// Render a display list as an HTML fragment
pub fn render_html(display: &DisplayList) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"keyfinder\">\n");

    if display.mode == ViewMode::Results {
        if let Some(headline) = &display.headline {
            html.push_str(&format!("  <p class=\"headline\">{}</p>\n", xml_escape(headline)));
        }
        if let Some(scale) = &display.scale {
            push_scale_table(&mut html, scale);
        }
        if let Some(staff) = &display.staff {
            push_staff(&mut html, staff);
        }
    }

    push_buttons(&mut html, display);
    html.push_str("</div>\n");
    html
}

fn push_scale_table(html: &mut String, scale: &RenderScale) {
    html.push_str(&format!("  <div><i>{}</i></div>\n", xml_escape(&scale.caption)));
    html.push_str("  <table border=\"1\" cellpadding=\"5\">\n    <tbody>\n      <tr>\n");
    for cell in &scale.cells {
        html.push_str(&format!(
            "        <td data-degree=\"{}\">{}</td>\n",
            cell.degree,
            xml_escape(&cell.text)
        ));
    }
    html.push_str("      </tr>\n    </tbody>\n  </table>\n");
}

fn push_staff(html: &mut String, staff: &RenderStaff) {
    html.push_str(&format!("  <div><i>{}</i></div>\n", xml_escape(&staff.caption)));
    html.push_str(&format!(
        "  <div class=\"key-signature\" style=\"position: relative; width: {}px; height: {}px;\">\n",
        staff.width, staff.height
    ));
    html.push_str(&format!(
        "    <img src=\"{}\" class=\"treble-clef\" alt=\"Treble clef\" />\n",
        xml_escape(&staff.clef_src)
    ));
    for y in &staff.line_ys {
        html.push_str(&format!(
            "    <hr class=\"staff-line\" style=\"position: absolute; left: 0px; top: {}px; width: {}px; margin: 0;\" />\n",
            y, staff.width
        ));
    }
    for accidental in &staff.accidentals {
        html.push_str(&format!(
            "    <span class=\"accidental\" data-letter=\"{}\" style=\"position: absolute; left: {}px; top: {}px; font-size: {}px;\">{}</span>\n",
            accidental.letter,
            accidental.x,
            accidental.y,
            staff.font_size,
            xml_escape(&accidental.text)
        ));
    }
    html.push_str("  </div>\n");
}

fn push_buttons(html: &mut String, display: &DisplayList) {
    html.push_str("  <div class=\"choose-key\">\n");
    html.push_str(&format!("    <p>{}</p>\n", xml_escape(&display.prompt)));
    for button in &display.buttons {
        html.push_str(&format!(
            "    <button type=\"button\" data-bias=\"{}\">{}</button>\n",
            button.bias,
            xml_escape(&button.label)
        ));
    }
    html.push_str("  </div>\n");
}
