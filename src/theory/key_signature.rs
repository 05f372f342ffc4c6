//! Key signature mapping
//!
//! Maps a built major scale onto the seven key-signature slots of a treble
//! staff. Flats are written in the order B E A D G C F and sharps in the
//! reverse order F C G D A E B. Every slot is filled; slots whose degree is
//! natural carry an empty glyph string.

use serde::{Deserialize, Serialize};

use super::scale::Scale;
use crate::models::{AccidentalKind, Letter, Note};

/// Order in which flats are added to a key signature
pub const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// Order in which sharps are added to a key signature
pub const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// Vertical pixel offset of each flat slot, measured from the staff top
pub const FLAT_OFFSETS: [i32; 7] = [16, 1, 21, 6, 26, 11, 31];

/// Vertical pixel offset of each sharp slot, measured from the staff top
pub const SHARP_OFFSETS: [i32; 7] = [1, 16, -3, 11, 26, 6, 21];

/// One slot of the key signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignatureEntry {
    /// Position in the traversal, 0 = leftmost
    pub index: usize,
    pub letter: Letter,
    /// Accidental glyphs for this letter, empty when natural
    pub glyph: String,
    /// Vertical pixel offset from the staff top
    pub staff_offset: i32,
}

impl KeySignatureEntry {
    pub fn is_natural(&self) -> bool {
        self.glyph.is_empty()
    }
}

/// Seven key signature slots in circle-of-fifths order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    kind: AccidentalKind,
    entries: Vec<KeySignatureEntry>,
}

impl KeySignature {
    pub fn kind(&self) -> AccidentalKind {
        self.kind
    }

    pub fn uses_flats(&self) -> bool {
        self.kind == AccidentalKind::Flat
    }

    pub fn entries(&self) -> &[KeySignatureEntry] {
        &self.entries
    }

    /// Glyph strings in traversal order
    pub fn glyphs(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.glyph.as_str()).collect()
    }

    /// Number of slots that carry an accidental
    pub fn accidental_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_natural()).count()
    }
}

/// Traversal order and offsets for an accidental kind
pub fn traversal(kind: AccidentalKind) -> (&'static [Letter; 7], &'static [i32; 7]) {
    match kind {
        AccidentalKind::Flat => (&FLAT_ORDER, &FLAT_OFFSETS),
        AccidentalKind::Sharp => (&SHARP_ORDER, &SHARP_OFFSETS),
    }
}

/// Build the key signature for `scale`, whose root is `root`
///
/// A sharp or flat root keeps its own kind. A natural root uses the flat
/// traversal when its scale contains a flat (F major), otherwise the sharp
/// traversal (C and G major).
///
/// # Panics
/// If the scale lacks one of the seven letters. [`build_major_scale`]
/// always produces every letter exactly once.
///
/// [`build_major_scale`]: super::scale::build_major_scale
pub fn build_key_signature(scale: &Scale, root: Note) -> KeySignature {
    let kind = root.accidental_kind().unwrap_or_else(|| {
        if scale.degrees().iter().any(Note::is_flat) {
            AccidentalKind::Flat
        } else {
            AccidentalKind::Sharp
        }
    });
    let (order, offsets) = traversal(kind);

    let entries = order
        .iter()
        .zip(offsets.iter())
        .enumerate()
        .map(|(index, (&letter, &staff_offset))| {
            let degree = scale.degree_with_letter(letter).unwrap_or_else(|| {
                unreachable!("{} major scale has no degree spelled with {}", root, letter)
            });
            KeySignatureEntry {
                index,
                letter,
                glyph: degree.accidental_suffix(),
                staff_offset,
            }
        })
        .collect();

    let signature = KeySignature { kind, entries };
    log::debug!(
        "key signature for {}: {} accidentals ({:?})",
        root,
        signature.accidental_count(),
        signature.kind
    );
    signature
}
