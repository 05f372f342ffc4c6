//! Spelled notes: a letter plus a signed accidental count
//!
//! A note keeps its spelling, so F♯ and G♭ are different notes even though
//! they sound the same. Text form is the letter followed by the accidental
//! glyphs (see [`accidental_glyphs`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::accidental::{accidental_glyphs, parse_accidentals, AccidentalKind};
use super::letter::Letter;
use crate::error::NoteParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: Letter,
    /// Positive for sharps, negative for flats
    pub accidentals: i8,
}

impl Note {
    pub fn new(letter: Letter, accidentals: i8) -> Self {
        Self { letter, accidentals }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Kind of accidental carried, `None` when natural
    pub fn accidental_kind(&self) -> Option<AccidentalKind> {
        AccidentalKind::of(self.accidentals)
    }

    pub fn is_flat(&self) -> bool {
        self.accidentals < 0
    }

    /// The accidental part of the text form, without the letter
    pub fn accidental_suffix(&self) -> String {
        accidental_glyphs(self.accidentals)
    }

    /// Pitch class 0..=11 with C = 0
    pub fn pitch_class(&self) -> u8 {
        let semitones = self.letter.natural_semitones() + self.accidentals as i32;
        semitones.rem_euclid(12) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental_suffix())
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parse names like `"C"`, `"F♯♯♯"`, `"Bbb"`, `"g#"` or `"E𝄫"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let first = chars.next().ok_or(NoteParseError::Empty)?;
        let letter = Letter::from_char(first)?;
        let accidentals = parse_accidentals(chars.as_str(), trimmed)?;
        Ok(Note::new(letter, accidentals))
    }
}
