//! Random seventh-chord generation.
//!
//! A [`ChordGenerator`] is one quiz session: it owns its random source and
//! remembers the root letter of the chord it produced last, so two
//! consecutive chords never share a bare root letter. Independent sessions
//! hold independent state and cannot interfere with each other.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::pitch::{Accidental, NoteName};
use crate::spell::{spell, ChordQuality};

/// A generated seventh chord: its display name and its four spelled notes.
///
/// # Example
/// ```
/// use seventh::ChordGenerator;
///
/// let mut generator = ChordGenerator::new();
/// let chord = generator.generate();
/// assert_eq!(chord.notes.len(), 4);
/// assert!(chord.name.starts_with(chord.notes[0].chars().next().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub name: String,
    pub notes: Vec<String>,
}

/// Root accidentals drawn with equal probability.
const ROOT_ACCIDENTALS: [Accidental; 3] =
    [Accidental::Natural, Accidental::Sharp, Accidental::Flat];

/// Cap on rejection-sampling redraws. In practice a redraw repeats the
/// rejected letter with probability 1/7, so hitting the cap would take a
/// broken RNG; past it the letter cycle is advanced deterministically.
const MAX_REDRAWS: usize = 8;

/// A quiz session that produces random seventh chords.
///
/// The random source is constructor-injected so the selection logic can be
/// tested with a seeded RNG; [`ChordGenerator::new`] seeds from the OS.
pub struct ChordGenerator<R: Rng = StdRng> {
    rng: R,
    last_root: Option<NoteName>,
}

impl ChordGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for ChordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ChordGenerator<R> {
    /// Create a generator driven by the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            last_root: None,
        }
    }

    /// Generate a random seventh chord.
    ///
    /// The root accidental, chord quality, and root letter are each drawn
    /// uniformly; the root letter is redrawn while it matches the previous
    /// chord's root letter. Only the bare letter is constrained - the
    /// accidental and quality may repeat between consecutive chords.
    pub fn generate(&mut self) -> Chord {
        let accidental = ROOT_ACCIDENTALS[self.rng.random_range(0..ROOT_ACCIDENTALS.len())];
        let quality = ChordQuality::ALL[self.rng.random_range(0..ChordQuality::ALL.len())];
        let root = self.draw_root();
        self.last_root = Some(root);

        let name = format!("{}{}{}", root, accidental.symbol(), quality.suffix());
        let notes = spell(root, accidental, quality.intervals())
            .iter()
            .map(|note| note.to_string())
            .collect();

        debug!("generated chord {}", name);
        Chord { name, notes }
    }

    fn draw_root(&mut self) -> NoteName {
        let mut root = NoteName::at(self.rng.random_range(0..NoteName::CYCLE.len()));
        let mut redraws = 0;
        while Some(root) == self.last_root {
            if redraws == MAX_REDRAWS {
                // Stepping one letter along the cycle always leaves the
                // remembered letter, keeping the loop bounded.
                root = NoteName::at(root.index() + 1);
                break;
            }
            trace!("root {} repeats the previous chord, redrawing", root);
            root = NoteName::at(self.rng.random_range(0..NoteName::CYCLE.len()));
            redraws += 1;
        }
        root
    }
}
