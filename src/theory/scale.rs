//! Major scale construction
//!
//! A major scale is built by walking up one letter at a time from the root
//! and tracking how many sharps or flats are needed to make each step the
//! right size. Adjacent letters are a natural whole step apart except E-F and
//! B-C, which are natural half steps:
//!
//! - a whole step from E or B needs one extra sharp
//! - a half step from any letter other than E or B needs one extra flat
//!
//! The running offset starts at the root's accidental count, so roots with
//! several sharps or flats propagate them through the whole scale.

use serde::{Deserialize, Serialize};

use crate::models::{Letter, Note};

/// Size of one step between adjacent scale degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Whole,
    Half,
}

impl Step {
    /// Change to the running accidental offset when taking this step from `letter`
    pub fn accidental_adjustment(self, letter: Letter) -> i8 {
        match (self, letter.has_half_step_above()) {
            (Step::Whole, true) => 1,
            (Step::Whole, false) => 0,
            (Step::Half, true) => 0,
            (Step::Half, false) => -1,
        }
    }

    /// Size in semitones
    pub fn semitones(self) -> u8 {
        match self {
            Step::Whole => 2,
            Step::Half => 1,
        }
    }
}

/// Whole-whole-half-whole-whole-whole-half
pub const MAJOR_STEP_PATTERN: [Step; 7] = [
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Half,
];

/// Number of notes in a built scale: seven degrees plus the octave
pub const SCALE_LENGTH: usize = 8;

/// Take one step up from `note`
///
/// Saturates at the ends of `i8`; roots within [`MAX_ACCIDENTALS`] never
/// reach them.
///
/// [`MAX_ACCIDENTALS`]: crate::models::MAX_ACCIDENTALS
pub fn step_from(note: Note, step: Step) -> Note {
    let accidentals = note
        .accidentals
        .saturating_add(step.accidental_adjustment(note.letter));
    Note::new(note.letter.next(), accidentals)
}

/// An eight-note major scale: root, six further degrees, root again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    notes: [Note; SCALE_LENGTH],
}

impl Scale {
    pub fn root(&self) -> Note {
        self.notes[0]
    }

    /// All eight notes, octave included
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The seven distinct degrees (octave excluded)
    pub fn degrees(&self) -> &[Note] {
        &self.notes[..SCALE_LENGTH - 1]
    }

    /// Degree spelled with `letter`
    pub fn degree_with_letter(&self, letter: Letter) -> Option<Note> {
        self.degrees().iter().copied().find(|n| n.letter == letter)
    }

    /// Text form of each note, as shown in the scale table
    pub fn display_names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.to_string()).collect()
    }
}

/// Build the major scale starting on `root`
///
/// Never fails: any parsed root has a representable scale, even when it is
/// not a conventional key.
pub fn build_major_scale(root: Note) -> Scale {
    let mut notes = [root; SCALE_LENGTH];
    let mut current = root;

    // The final step of the pattern lands back on the root, which is
    // already known, so only the first six steps are walked.
    for (i, step) in MAJOR_STEP_PATTERN[..SCALE_LENGTH - 2].iter().enumerate() {
        current = step_from(current, *step);
        notes[i + 1] = current;
    }

    log::debug!(
        "built {} major: {}",
        root,
        notes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
    );

    Scale { notes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(root: &str) -> Vec<String> {
        build_major_scale(root.parse().unwrap()).display_names()
    }

    #[test]
    fn test_c_major() {
        assert_eq!(names("C"), vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
    }

    #[test]
    fn test_g_major() {
        assert_eq!(names("G"), vec!["G", "A", "B", "C", "D", "E", "F♯", "G"]);
    }

    #[test]
    fn test_f_major() {
        assert_eq!(names("F"), vec!["F", "G", "A", "B♭", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_d_double_sharp_major() {
        assert_eq!(
            names("D##"),
            vec!["D𝄪", "E𝄪", "F♯♯♯", "G𝄪", "A𝄪", "B𝄪", "C♯♯♯", "D𝄪"]
        );
    }

    #[test]
    fn test_b_double_flat_major() {
        assert_eq!(
            names("Bbb"),
            vec!["B𝄫", "C♭", "D♭", "E𝄫", "F♭", "G♭", "A♭", "B𝄫"]
        );
    }

    #[test]
    fn test_extreme_roots_keep_exact_spelling() {
        let root: Note = format!("B{}", "#".repeat(126)).parse().unwrap();
        let scale = build_major_scale(root);
        assert_eq!(scale.notes()[1], Note::new(Letter::C, 127));

        let root: Note = format!("F{}", "b".repeat(126)).parse().unwrap();
        let scale = build_major_scale(root);
        assert_eq!(scale.degree_with_letter(Letter::B), Some(Note::new(Letter::B, -127)));

        assert!(format!("B{}", "#".repeat(127)).parse::<Note>().is_err());
    }

    #[test]
    fn test_step_adjustments() {
        assert_eq!(Step::Whole.accidental_adjustment(Letter::E), 1);
        assert_eq!(Step::Whole.accidental_adjustment(Letter::C), 0);
        assert_eq!(Step::Half.accidental_adjustment(Letter::B), 0);
        assert_eq!(Step::Half.accidental_adjustment(Letter::A), -1);
    }

    #[test]
    fn test_pattern_spans_an_octave() {
        let total: u8 = MAJOR_STEP_PATTERN.iter().map(|s| s.semitones()).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_degree_with_letter() {
        let scale = build_major_scale("D".parse().unwrap());
        assert_eq!(scale.degree_with_letter(Letter::F), Some(Note::new(Letter::F, 1)));
        assert_eq!(scale.degree_with_letter(Letter::D), Some(Note::natural(Letter::D)));
        assert_eq!(scale.degrees().len(), 7);
        assert_eq!(scale.notes().len(), 8);
    }
}
