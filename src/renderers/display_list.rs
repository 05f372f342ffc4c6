//! Display List for Widget Rendering
//!
//! This module defines the output structure returned from the layout engine to JavaScript.
//! The DisplayList contains all pre-calculated text and positions needed for JavaScript
//! (or the HTML and SVG renderers) to draw the widget without any music theory.

use serde::{Deserialize, Serialize};

use crate::models::Letter;
use crate::session::Bias;

/// Which screen the widget is on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Prompt,
    Results,
}

/// Top-level display list containing all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    pub mode: ViewMode,

    /// "You should use the key of ... major!" (results only)
    pub headline: Option<String>,

    /// Scale table (results only)
    pub scale: Option<RenderScale>,

    /// Key signature staff (results only)
    pub staff: Option<RenderStaff>,

    /// Sentence shown above the buttons
    pub prompt: String,

    /// Bias buttons, sharps first
    pub buttons: Vec<RenderButton>,
}

/// The scale table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderScale {
    pub caption: String,

    /// Eight cells, root to octave
    pub cells: Vec<RenderScaleCell>,
}

/// One cell of the scale table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderScaleCell {
    /// Scale degree, 1-based (8 = octave)
    pub degree: usize,

    /// Note name with accidental glyphs
    pub text: String,
}

/// Staff with clef and key signature
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderStaff {
    pub caption: String,

    /// Treble clef image source
    pub clef_src: String,

    pub clef_width: f32,

    pub width: f32,

    pub height: f32,

    /// Y position of each of the five staff lines
    pub line_ys: Vec<f32>,

    /// Font size for the accidental glyphs
    pub font_size: f32,

    /// Seven key signature slots, left to right
    pub accidentals: Vec<RenderAccidental>,
}

/// A positioned key signature slot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderAccidental {
    pub letter: Letter,

    /// Glyphs to draw, empty for a natural slot
    pub text: String,

    /// X position (left edge)
    pub x: f32,

    /// Y position (top edge), relative to the staff block
    pub y: f32,
}

/// A button that picks a new random key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderButton {
    pub label: String,
    pub bias: Bias,
}
