//! Music theory core
//!
//! Pure functions from a root note to its major scale and key signature.
//! Nothing here holds state; the same root always gives the same result.

pub mod scale;
pub mod key_signature;

pub use scale::{build_major_scale, step_from, Scale, Step, MAJOR_STEP_PATTERN, SCALE_LENGTH};
pub use key_signature::{
    build_key_signature,
    KeySignature,
    KeySignatureEntry,
    FLAT_ORDER,
    SHARP_ORDER,
    FLAT_OFFSETS,
    SHARP_OFFSETS,
};
