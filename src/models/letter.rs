//! The seven pitch letters of Western notation
//!
//! Letters are cyclic: the successor of B is C. E-F and B-C are the two
//! natural half steps; every other pair of adjacent letters is a natural
//! whole step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NoteParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in scale order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within `ALL` (C = 0 ... B = 6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at `index`, wrapping around the octave
    pub fn from_index(index: usize) -> Letter {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Cyclic successor (B wraps to C)
    pub fn next(self) -> Letter {
        Self::from_index(self.index() + 1)
    }

    /// Whether the step up to the next letter is a natural half step
    pub fn has_half_step_above(self) -> bool {
        matches!(self, Letter::E | Letter::B)
    }

    /// Semitones above C for the natural form of this letter
    pub fn natural_semitones(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Case-insensitive parse of a single letter
    pub fn from_char(c: char) -> Result<Letter, NoteParseError> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            _ => Err(NoteParseError::UnknownLetter(c)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_at_b() {
        assert_eq!(Letter::C.next(), Letter::D);
        assert_eq!(Letter::E.next(), Letter::F);
        assert_eq!(Letter::B.next(), Letter::C);
    }

    #[test]
    fn test_seven_steps_return_home() {
        for letter in Letter::ALL {
            let mut current = letter;
            for _ in 0..7 {
                current = current.next();
            }
            assert_eq!(current, letter);
        }
    }

    #[test]
    fn test_half_steps_only_above_e_and_b() {
        let half: Vec<Letter> = Letter::ALL
            .iter()
            .copied()
            .filter(|l| l.has_half_step_above())
            .collect();
        assert_eq!(half, vec![Letter::E, Letter::B]);
    }

    #[test]
    fn test_from_char_case_insensitive() {
        assert_eq!(Letter::from_char('g').unwrap(), Letter::G);
        assert_eq!(Letter::from_char('A').unwrap(), Letter::A);
        assert_eq!(
            Letter::from_char('H'),
            Err(NoteParseError::UnknownLetter('H'))
        );
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Letter::from_index(7), Letter::C);
        assert_eq!(Letter::from_index(13), Letter::B);
    }
}
