//! Renderers module for the key finder widget
//!
//! This module contains layout and rendering logic for turning
//! a session view into something a browser can show.

pub mod display_list;
pub mod layout;
pub mod html;
pub mod svg;

// Re-export commonly used types
pub use display_list::{
    DisplayList,
    ViewMode,
    RenderScale,
    RenderScaleCell,
    RenderStaff,
    RenderAccidental,
    RenderButton,
};
pub use layout::LayoutEngine;
pub use html::render_html;
pub use svg::SVGRenderer;
