//! Seventh-chord qualities and the diatonic note speller.
//!
//! The speller picks a letter for each chord tone by stacking thirds through
//! the natural letter cycle, then corrects each letter to the target pitch
//! with accidentals. Stacking by thirds is what guarantees each tone sits on
//! a distinct, successive letter name - the defining property of a correctly
//! spelled chord (C7 contains B♭, never A♯).

use serde::Serialize;

use crate::pitch::{Accidental, NoteName, SpelledNote};

/// The four supported seventh-chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChordQuality {
    Major7,
    Dominant7,
    Minor7,
    HalfDiminished7,
}

impl ChordQuality {
    /// All four qualities, for uniform random selection.
    pub const ALL: [ChordQuality; 4] = [
        ChordQuality::Major7,
        ChordQuality::Dominant7,
        ChordQuality::Minor7,
        ChordQuality::HalfDiminished7,
    ];

    /// Display suffix appended to the root in the chord name.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major7 => "M7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::HalfDiminished7 => "m7(♭5)",
        }
    }

    /// Chord-tone intervals in semitones above the root.
    pub fn intervals(self) -> [u8; 4] {
        match self {
            ChordQuality::Major7 => [0, 4, 7, 11],
            ChordQuality::Dominant7 => [0, 4, 7, 10],
            ChordQuality::Minor7 => [0, 3, 7, 10],
            ChordQuality::HalfDiminished7 => [0, 3, 6, 10],
        }
    }
}

/// Spell the four chord tones for a root and an interval pattern.
///
/// Tone `i` lands on the letter two cycle steps past the previous tone
/// (`root_index + 2*i`, mod 7), then gets whichever accidental moves that
/// letter's natural pitch onto the target semitone. The correction is folded
/// into the signed range (-6, 6] so that e.g. the seventh of C7 comes out as
/// B♭ (diff -1 against natural B) rather than a six-sharp monstrosity.
///
/// # Examples
/// ```
/// use seventh::{spell, Accidental, ChordQuality, NoteName};
///
/// let notes = spell(NoteName::C, Accidental::Natural, ChordQuality::Dominant7.intervals());
/// let spelled: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
/// assert_eq!(spelled, vec!["C", "E", "G", "B♭"]);
/// ```
///
/// # Panics
/// Panics if an accidental correction outside {-2..2} would be required.
/// That cannot happen for the four supported qualities with a single-mark
/// root; it would mean the interval tables were edited into something that
/// no longer stacks in thirds.
pub fn spell(
    root_letter: NoteName,
    root_accidental: Accidental,
    intervals: [u8; 4],
) -> [SpelledNote; 4] {
    let root_pitch = (root_letter.natural_semitone() as i32 + root_accidental.offset() as i32)
        .rem_euclid(12);
    let root_index = root_letter.index();

    std::array::from_fn(|i| {
        let target_letter = NoteName::at(root_index + 2 * i);
        let desired_pitch = (root_pitch + intervals[i] as i32) % 12;

        let mut diff = (desired_pitch - target_letter.natural_semitone() as i32).rem_euclid(12);
        if diff > 6 {
            diff -= 12;
        }

        SpelledNote {
            letter: target_letter,
            accidental: Accidental::from_offset(diff as i8),
        }
    })
}
