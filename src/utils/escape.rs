//! Markup escaping
//!
//! HTML and SVG text both go through the same XML escaping; note names only
//! ever contain letters and music glyphs, but configured strings may not.

/// Escape special XML/HTML characters
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
