//! Mapping chord tones onto the rendered keyboard.
//!
//! The keyboard graphic spans two and a half octaves: octave index 0 holds
//! keys F..B, octave index 1 holds a full C..B octave, and octave index 2
//! holds C..F. The indices are layout-relative, not musical octaves; they
//! exist so that the same letter rendered more than once can be addressed
//! unambiguously. Chords whose first tone lands on G, A, or B start in
//! octave 0 so the whole chord sits centered around the middle C of the
//! graphic.

use serde::Serialize;
use std::fmt;

use crate::error::EngineError;
use crate::normalize::normalize_to_canonical;
use crate::pitch::{NoteName, PitchClass};

/// Address of one renderable key: canonical pitch class plus octave index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIdentifier {
    pub pitch_class: PitchClass,
    pub octave: u8,
}

impl KeyIdentifier {
    /// The id of the corresponding SVG key element, e.g. "key-F-sharp0".
    pub fn element_id(&self) -> String {
        format!("key-{}{}", self.pitch_class.slug(), self.octave)
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

/// Map an ordered chord-tone sequence onto keyboard keys.
///
/// Each note is normalized to its canonical pitch class and paired with an
/// octave index. The first note starts in octave 0 when its canonical letter
/// is G, A, or B, otherwise in octave 1. The octave then rolls over by one
/// whenever the previous note's letter was A or B (the next third up crosses
/// C), or the current note's letter is C (a C reached from G). Both
/// conditions together still increment only once.
///
/// # Examples
/// ```
/// use seventh::map_to_keys;
///
/// let keys = map_to_keys(&["G", "B", "D", "F♯"])?;
/// let ids: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
/// assert_eq!(ids, vec!["G0", "B0", "D1", "F♯1"]);
/// # Ok::<(), seventh::EngineError>(())
/// ```
///
/// # Errors
/// Returns [`EngineError::MalformedNote`] if any note string fails to parse.
pub fn map_to_keys<S: AsRef<str>>(notes: &[S]) -> Result<Vec<KeyIdentifier>, EngineError> {
    let mut keys = Vec::with_capacity(notes.len());
    let mut octave: u8 = 0;
    let mut previous_letter: Option<NoteName> = None;

    for note in notes {
        let pitch_class = normalize_to_canonical(note.as_ref())?;
        let letter = pitch_class.letter();

        match previous_letter {
            None => {
                octave = match letter {
                    NoteName::G | NoteName::A | NoteName::B => 0,
                    _ => 1,
                };
            }
            Some(prev) => {
                if matches!(prev, NoteName::A | NoteName::B) || letter == NoteName::C {
                    octave += 1;
                }
            }
        }

        keys.push(KeyIdentifier {
            pitch_class,
            octave,
        });
        previous_letter = Some(letter);
    }

    Ok(keys)
}
