//! Models module for the key finder widget
//!
//! This module contains the note-level data types shared by the theory
//! core, the session and the renderers.

pub mod letter;
pub mod accidental;
pub mod note;

// Re-export commonly used types
pub use letter::Letter;
pub use accidental::{accidental_glyphs, AccidentalKind, MAX_ACCIDENTALS};
pub use note::Note;
