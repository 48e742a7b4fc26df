//! Enharmonic normalization of spelled note strings.
//!
//! Reduces any spelled note ("C♭", "E♯♯", "B♭♭", …) to one of the 12
//! canonical sharp-spelled pitch classes, discarding its letter-name
//! spelling. This is how the keyboard mapper resolves which physical key a
//! chord tone lands on.

use crate::error::EngineError;
use crate::pitch::{NoteName, PitchClass};

/// Normalize a spelled note string to its canonical pitch class.
///
/// The input must be a single uppercase letter A-G followed by any run of
/// accidental marks. Each sharp raises the pitch a semitone and each flat
/// lowers it; mixed runs and runs longer than two marks are accepted even
/// though the engine itself never produces them. ASCII `#` and `b` are
/// accepted alongside `♯` and `♭`.
///
/// # Examples
/// ```
/// use seventh::{normalize_to_canonical, PitchClass};
///
/// assert_eq!(normalize_to_canonical("C♭")?, PitchClass::B);
/// assert_eq!(normalize_to_canonical("E♭")?, PitchClass::DSharp);
/// assert_eq!(normalize_to_canonical("E♯♯")?, PitchClass::FSharp);
/// assert_eq!(normalize_to_canonical("F#")?, PitchClass::FSharp);
/// # Ok::<(), seventh::EngineError>(())
/// ```
///
/// # Errors
/// Returns [`EngineError::MalformedNote`] if the string is empty, does not
/// start with a letter A-G, or contains anything other than accidental marks
/// after the letter.
pub fn normalize_to_canonical(note: &str) -> Result<PitchClass, EngineError> {
    let malformed = || EngineError::MalformedNote {
        input: note.to_string(),
    };

    let mut chars = note.chars();
    let letter = chars
        .next()
        .and_then(NoteName::from_letter)
        .ok_or_else(malformed)?;

    let mut offset: i32 = 0;
    for mark in chars {
        match mark {
            '♯' | '#' => offset += 1,
            '♭' | 'b' => offset -= 1,
            _ => return Err(malformed()),
        }
    }

    Ok(PitchClass::from_semitone(
        letter.natural_semitone() as i32 + offset,
    ))
}
