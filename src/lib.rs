//! # Seventh
//!
//! Music-notation engine for a jazz seventh-chord quiz.
//!
//! The engine picks a random seventh chord, spells its four notes with
//! diatonically correct letter names (double sharps and flats included), and
//! maps the spelled notes onto the keys of a two-and-a-half-octave rendered
//! keyboard so the answer can be highlighted.
//!
//! ## Entry Points
//! - [`ChordGenerator::generate`] - produce the next random chord
//! - [`normalize_to_canonical`] - reduce any spelled note to one of the 12
//!   canonical sharp-spelled pitch classes
//! - [`map_to_keys`] - turn a chord's notes into addressable keyboard keys
//!
//! ## Example
//! ```rust
//! use seventh::{map_to_keys, ChordGenerator};
//!
//! let mut generator = ChordGenerator::new();
//! let chord = generator.generate();
//! assert_eq!(chord.notes.len(), 4);
//!
//! // Which keys should light up when the answer is revealed?
//! let keys = map_to_keys(&chord.notes)?;
//! assert_eq!(keys.len(), 4);
//! # Ok::<(), seventh::EngineError>(())
//! ```
//!
//! ## Correct Spelling
//! Chord tones are named by stacking thirds through the natural letter cycle
//! and correcting each letter with accidentals, so every tone gets a distinct
//! successive letter: C7 contains B♭ (never A♯), and A♯M7 contains C♯♯
//! (never D). See [`spell()`] for the details.

pub mod error;
pub mod generate;
pub mod keyboard;
pub mod normalize;
pub mod pitch;
pub mod spell;

pub use error::EngineError;
pub use generate::{Chord, ChordGenerator};
pub use keyboard::{map_to_keys, KeyIdentifier};
pub use normalize::normalize_to_canonical;
pub use pitch::{Accidental, NoteName, PitchClass, SpelledNote};
pub use spell::{spell, ChordQuality};
