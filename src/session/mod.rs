//! Interactive session shell
//!
//! Holds the chosen root and picks random keys. Everything shown for a root
//! is recomputed from the theory core on demand.

pub mod bias;
pub mod state;

pub use bias::Bias;
pub use state::{random_root, Session, SessionView, MAX_RANDOM_ACCIDENTALS, MIN_RANDOM_ACCIDENTALS};
