//! Widget configuration
//!
//! Layout measurements and user-facing strings. JavaScript may pass a partial
//! object; every missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Configuration for rendering the widget
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Staff and key signature geometry
    pub staff: StaffLayout,

    /// Sentences and button labels
    pub text: WidgetText,
}

/// Staff geometry in pixels
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffLayout {
    /// Source of the treble clef image
    pub clef_src: String,

    /// Width of the clef image
    pub clef_width: f32,

    /// X position of the first accidental
    pub accidental_left: f32,

    /// Horizontal distance between accidentals
    pub accidental_spacing: f32,

    /// Y position of the top staff line
    pub staff_top: f32,

    /// Distance between staff lines
    pub line_spacing: f32,

    /// Total width of the staff block
    pub width: f32,

    /// Font size for accidental glyphs
    pub glyph_font_size: f32,
}

impl Default for StaffLayout {
    fn default() -> Self {
        Self {
            clef_src: "treble_clef.png".to_string(),
            clef_width: 40.0,
            accidental_left: 45.0,
            accidental_spacing: 20.0,
            staff_top: 10.0,
            line_spacing: 10.0,
            width: 200.0,
            glyph_font_size: 24.0,
        }
    }
}

impl WidgetConfig {
    /// Reject geometry that cannot be drawn
    pub fn validate(&self) -> Result<(), WidgetError> {
        let staff = &self.staff;
        let measurements = [
            ("clefWidth", staff.clef_width),
            ("accidentalLeft", staff.accidental_left),
            ("accidentalSpacing", staff.accidental_spacing),
            ("staffTop", staff.staff_top),
            ("lineSpacing", staff.line_spacing),
            ("width", staff.width),
            ("glyphFontSize", staff.glyph_font_size),
        ];
        for (name, value) in measurements {
            if !value.is_finite() || value < 0.0 {
                return Err(WidgetError::Config(format!(
                    "staff.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if staff.clef_src.trim().is_empty() {
            return Err(WidgetError::Config("staff.clefSrc must not be empty".to_string()));
        }
        Ok(())
    }
}

impl StaffLayout {
    /// Number of lines on a staff
    pub const LINE_COUNT: usize = 5;

    /// X position of the key signature slot at `index`
    pub fn accidental_x(&self, index: usize) -> f32 {
        self.accidental_left + index as f32 * self.accidental_spacing
    }

    /// Y positions of the five staff lines, top to bottom
    pub fn line_ys(&self) -> Vec<f32> {
        (0..Self::LINE_COUNT)
            .map(|i| self.staff_top + i as f32 * self.line_spacing)
            .collect()
    }

    /// Height from the top of the block to just below the bottom line
    pub fn height(&self) -> f32 {
        self.staff_top * 2.0 + (Self::LINE_COUNT - 1) as f32 * self.line_spacing
    }
}

/// User-facing strings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetText {
    pub prompt: String,
    pub retry_prompt: String,
    pub sharps_button: String,
    pub flats_button: String,
    pub scale_caption: String,
    pub key_signature_caption: String,
}

impl Default for WidgetText {
    fn default() -> Self {
        Self {
            prompt: "What key should you use for your next musical project?".to_string(),
            retry_prompt: "Or try a different scale?".to_string(),
            sharps_button: "I like sharps!".to_string(),
            flats_button: "I like flats!".to_string(),
            scale_caption: "Notes in the Scale".to_string(),
            key_signature_caption: "Key Signature".to_string(),
        }
    }
}

impl WidgetText {
    /// Sentence naming the chosen key
    pub fn headline(&self, root: &str) -> String {
        format!("You should use the key of {} major!", root)
    }
}
