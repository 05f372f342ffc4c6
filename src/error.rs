//! Error types for the key finder widget
//!
//! The theory functions themselves never fail; errors only arise when text
//! crosses into the crate (note names, bias names, configuration objects) or
//! when the shared session cannot be reached.

use thiserror::Error;

/// Top-level widget error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A note name could not be parsed
    #[error("Invalid note: {0}")]
    Note(#[from] NoteParseError),

    /// A bias name could not be parsed
    #[error("Invalid bias: {0}")]
    Bias(#[from] BiasParseError),

    /// The shared session lock was poisoned by an earlier panic
    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),

    /// The configuration object from JavaScript was malformed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Errors raised while parsing a note name such as `"F♯♯"` or `"Bbb"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    /// Nothing to parse
    #[error("empty note name")]
    Empty,

    /// First character is not one of C D E F G A B
    #[error("unknown letter '{0}' (expected one of C, D, E, F, G, A, B)")]
    UnknownLetter(char),

    /// A character after the letter is not an accidental glyph
    #[error("unknown accidental '{glyph}' in '{input}'")]
    UnknownAccidental { glyph: char, input: String },

    /// Sharps and flats appear in the same name
    #[error("'{0}' mixes sharps and flats")]
    MixedAccidentals(String),

    /// More than `MAX_ACCIDENTALS` sharps or flats
    #[error("'{0}' has too many accidentals")]
    TooManyAccidentals(String),
}

/// Error raised for a bias name other than `sharps` or `flats`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a bias (expected 'sharps' or 'flats')")]
pub struct BiasParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_error_converts_into_widget_error() {
        let err: WidgetError = NoteParseError::UnknownLetter('H').into();
        assert_eq!(
            err.to_string(),
            "Invalid note: unknown letter 'H' (expected one of C, D, E, F, G, A, B)"
        );
    }

    #[test]
    fn test_bias_error_message() {
        let err: WidgetError = BiasParseError("naturals".to_string()).into();
        assert!(err.to_string().contains("'naturals' is not a bias"));
    }
}
