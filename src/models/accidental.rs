//! Accidental glyphs and signed accidental counts
//!
//! An accidental count is a signed integer: positive for sharps, negative for
//! flats, zero for natural. Display uses the Unicode music glyphs. A count of
//! exactly two sharps or flats collapses into the double glyph (𝄪 / 𝄫); any
//! other magnitude repeats the single glyph.

use serde::{Deserialize, Serialize};

use crate::error::NoteParseError;

pub const SHARP: char = '♯';
pub const FLAT: char = '♭';
pub const DOUBLE_SHARP: char = '𝄪';
pub const DOUBLE_FLAT: char = '𝄫';
pub const NATURAL: char = '♮';

/// Largest accidental count accepted on a parsed note name
///
/// Degrees of a major scale sit at most one accidental away from the root,
/// so a root within this bound keeps every degree inside `i8`.
pub const MAX_ACCIDENTALS: i8 = i8::MAX - 1;

/// Direction of an accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalKind {
    Sharp,
    Flat,
}

impl AccidentalKind {
    /// Kind implied by a signed count, `None` for natural
    pub fn of(count: i8) -> Option<AccidentalKind> {
        match count {
            0 => None,
            c if c > 0 => Some(AccidentalKind::Sharp),
            _ => Some(AccidentalKind::Flat),
        }
    }

    /// Single glyph
    pub fn glyph(self) -> char {
        match self {
            AccidentalKind::Sharp => SHARP,
            AccidentalKind::Flat => FLAT,
        }
    }

    /// Double glyph
    pub fn double_glyph(self) -> char {
        match self {
            AccidentalKind::Sharp => DOUBLE_SHARP,
            AccidentalKind::Flat => DOUBLE_FLAT,
        }
    }

    /// Signed count for `magnitude` accidentals of this kind
    pub fn signed(self, magnitude: u8) -> i8 {
        let magnitude = magnitude.min(i8::MAX as u8) as i8;
        match self {
            AccidentalKind::Sharp => magnitude,
            AccidentalKind::Flat => -magnitude,
        }
    }
}

/// Render a signed accidental count as glyphs
///
/// `0` → `""`, `1` → `"♯"`, `2` → `"𝄪"`, `3` → `"♯♯♯"`, `-2` → `"𝄫"`.
pub fn accidental_glyphs(count: i8) -> String {
    let Some(kind) = AccidentalKind::of(count) else {
        return String::new();
    };
    let magnitude = count.unsigned_abs() as usize;
    if magnitude == 2 {
        kind.double_glyph().to_string()
    } else {
        kind.glyph().to_string().repeat(magnitude)
    }
}

/// Parse the accidental suffix of a note name into a signed count
///
/// Accepts `♯`/`#`, `♭`/`b`, `𝄪`/`x`, `𝄫` and `♮`. `input` is the whole note
/// name and is only used for error messages.
pub fn parse_accidentals(suffix: &str, input: &str) -> Result<i8, NoteParseError> {
    let mut sharps: i32 = 0;
    let mut flats: i32 = 0;

    for c in suffix.chars() {
        match c {
            SHARP | '#' => sharps += 1,
            DOUBLE_SHARP | 'x' => sharps += 2,
            FLAT | 'b' => flats += 1,
            DOUBLE_FLAT => flats += 2,
            NATURAL => {}
            other => {
                return Err(NoteParseError::UnknownAccidental {
                    glyph: other,
                    input: input.to_string(),
                })
            }
        }
    }

    if sharps > 0 && flats > 0 {
        return Err(NoteParseError::MixedAccidentals(input.to_string()));
    }

    let count = sharps - flats;
    if count.abs() > i32::from(MAX_ACCIDENTALS) {
        return Err(NoteParseError::TooManyAccidentals(input.to_string()));
    }
    i8::try_from(count).map_err(|_| NoteParseError::TooManyAccidentals(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_for_small_counts() {
        assert_eq!(accidental_glyphs(0), "");
        assert_eq!(accidental_glyphs(1), "♯");
        assert_eq!(accidental_glyphs(-1), "♭");
    }

    #[test]
    fn test_exactly_two_collapses_to_double_glyph() {
        assert_eq!(accidental_glyphs(2), "𝄪");
        assert_eq!(accidental_glyphs(-2), "𝄫");
        assert!(!accidental_glyphs(2).contains(SHARP));
        assert!(!accidental_glyphs(-2).contains(FLAT));
    }

    #[test]
    fn test_larger_counts_repeat_single_glyph() {
        assert_eq!(accidental_glyphs(3), "♯♯♯");
        assert_eq!(accidental_glyphs(-4), "♭♭♭♭");
        assert_eq!(accidental_glyphs(8).chars().count(), 8);
    }

    #[test]
    fn test_parse_unicode_and_ascii() {
        assert_eq!(parse_accidentals("♯♯♯", "F♯♯♯"), Ok(3));
        assert_eq!(parse_accidentals("##", "F##"), Ok(2));
        assert_eq!(parse_accidentals("𝄪♯", "F𝄪♯"), Ok(3));
        assert_eq!(parse_accidentals("bb", "Bbb"), Ok(-2));
        assert_eq!(parse_accidentals("𝄫", "B𝄫"), Ok(-2));
        assert_eq!(parse_accidentals("", "C"), Ok(0));
        assert_eq!(parse_accidentals("♮", "C♮"), Ok(0));
    }

    #[test]
    fn test_parse_rejects_mixed_and_unknown() {
        assert_eq!(
            parse_accidentals("#b", "C#b"),
            Err(NoteParseError::MixedAccidentals("C#b".to_string()))
        );
        assert!(matches!(
            parse_accidentals("?", "C?"),
            Err(NoteParseError::UnknownAccidental { glyph: '?', .. })
        ));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let many = "#".repeat(200);
        assert!(matches!(
            parse_accidentals(&many, &many),
            Err(NoteParseError::TooManyAccidentals(_))
        ));
    }

    #[test]
    fn test_parse_limit() {
        let most = "#".repeat(MAX_ACCIDENTALS as usize);
        assert_eq!(parse_accidentals(&most, &most), Ok(MAX_ACCIDENTALS));
        let flats = "b".repeat(MAX_ACCIDENTALS as usize);
        assert_eq!(parse_accidentals(&flats, &flats), Ok(-MAX_ACCIDENTALS));

        let one_more = "#".repeat(MAX_ACCIDENTALS as usize + 1);
        assert!(matches!(
            parse_accidentals(&one_more, &one_more),
            Err(NoteParseError::TooManyAccidentals(_))
        ));
    }

    #[test]
    fn test_signed() {
        assert_eq!(AccidentalKind::Sharp.signed(3), 3);
        assert_eq!(AccidentalKind::Flat.signed(3), -3);
        assert_eq!(AccidentalKind::of(-5), Some(AccidentalKind::Flat));
        assert_eq!(AccidentalKind::of(0), None);
    }
}
