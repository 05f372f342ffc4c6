//! Session state: the currently chosen root and the random source
//!
//! The random source is a type parameter so tests and hosts can supply a
//! seeded generator and get the same sequence of keys every time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::bias::Bias;
use crate::models::{Letter, Note};
use crate::theory::{build_key_signature, build_major_scale, KeySignature, Scale};

/// Fewest accidentals a random root carries
pub const MIN_RANDOM_ACCIDENTALS: u8 = 2;

/// Most accidentals a random root carries
pub const MAX_RANDOM_ACCIDENTALS: u8 = 7;

/// Draw a root: uniform letter, uniform count in 2..=7 of the bias kind
pub fn random_root<R: Rng>(rng: &mut R, bias: Bias) -> Note {
    let letter = Letter::from_index(rng.gen_range(0..Letter::ALL.len()));
    let count = rng.gen_range(MIN_RANDOM_ACCIDENTALS..=MAX_RANDOM_ACCIDENTALS);
    Note::new(letter, bias.kind().signed(count))
}

/// What the widget should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SessionView {
    /// No key chosen yet
    Prompt,

    /// A key has been chosen
    Results {
        root: Note,
        scale: Scale,
        key_signature: KeySignature,
    },
}

impl SessionView {
    /// Derive the view for `root`
    pub fn for_root(root: Option<Note>) -> Self {
        match root {
            None => SessionView::Prompt,
            Some(root) => {
                let scale = build_major_scale(root);
                let key_signature = build_key_signature(&scale, root);
                SessionView::Results {
                    root,
                    scale,
                    key_signature,
                }
            }
        }
    }
}

/// Interactive session
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    current_root: Option<Note>,
    rng: R,
}

impl Session<StdRng> {
    /// Session whose random keys are reproducible from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the platform's entropy source
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            current_root: None,
            rng,
        }
    }

    pub fn current_root(&self) -> Option<Note> {
        self.current_root
    }

    /// Pick a random root with the given bias and make it current
    pub fn pick_random_key(&mut self, bias: Bias) -> Note {
        let root = random_root(&mut self.rng, bias);
        log::info!("picked {} major ({} bias)", root, bias);
        self.current_root = Some(root);
        root
    }

    /// Choose a root directly
    pub fn set_root(&mut self, root: Note) {
        log::debug!("root set to {}", root);
        self.current_root = Some(root);
    }

    /// Return to the prompt
    pub fn clear(&mut self) {
        self.current_root = None;
    }

    pub fn view(&self) -> SessionView {
        SessionView::for_root(self.current_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccidentalKind;

    #[test]
    fn test_new_session_shows_prompt() {
        let session = Session::seeded(1);
        assert_eq!(session.current_root(), None);
        assert_eq!(session.view(), SessionView::Prompt);
    }

    #[test]
    fn test_random_roots_respect_bias_and_range() {
        let mut session = Session::seeded(42);
        for bias in Bias::ALL {
            for _ in 0..200 {
                let root = session.pick_random_key(bias);
                assert_eq!(root.accidental_kind(), Some(bias.kind()));
                let magnitude = root.accidentals.unsigned_abs();
                assert!((MIN_RANDOM_ACCIDENTALS..=MAX_RANDOM_ACCIDENTALS).contains(&magnitude));
            }
        }
    }

    #[test]
    fn test_same_seed_same_keys() {
        let mut a = Session::seeded(7);
        let mut b = Session::seeded(7);
        for bias in [Bias::Sharps, Bias::Flats, Bias::Flats, Bias::Sharps] {
            assert_eq!(a.pick_random_key(bias), b.pick_random_key(bias));
        }
    }

    #[test]
    fn test_every_letter_and_count_reachable() {
        let mut session = Session::seeded(3);
        let mut seen_letters = std::collections::HashSet::new();
        let mut seen_counts = std::collections::HashSet::new();
        for _ in 0..2000 {
            let root = session.pick_random_key(Bias::Flats);
            seen_letters.insert(root.letter);
            seen_counts.insert(root.accidentals);
        }
        assert_eq!(seen_letters.len(), 7);
        assert_eq!(seen_counts.len(), 6);
        assert!(seen_counts.iter().all(|c| (-7..=-2).contains(c)));
    }

    #[test]
    fn test_view_after_pick_has_results() {
        let mut session = Session::seeded(11);
        let root = session.pick_random_key(Bias::Sharps);
        match session.view() {
            SessionView::Results {
                root: shown,
                scale,
                key_signature,
            } => {
                assert_eq!(shown, root);
                assert_eq!(scale.root(), root);
                assert_eq!(key_signature.kind(), AccidentalKind::Sharp);
            }
            SessionView::Prompt => panic!("expected results view"),
        }
    }

    #[test]
    fn test_set_root_and_clear() {
        let mut session = Session::seeded(0);
        session.set_root("Ab".parse().unwrap());
        assert_eq!(session.current_root(), Some(Note::new(Letter::A, -1)));
        session.clear();
        assert_eq!(session.view(), SessionView::Prompt);
    }
}
