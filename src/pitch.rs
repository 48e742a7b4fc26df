//! # Pitch Types
//!
//! This module defines the basic pitch vocabulary used by the rest of the engine.
//!
//! ## Type Hierarchy
//! ```text
//! NoteName     - the 7 natural letters (C D E F G A B), cyclically ordered
//! Accidental   - none, ♯, ♯♯, ♭, ♭♭ (never mixed signs)
//! SpelledNote  - NoteName + Accidental, e.g. "F♯♯" (display form of a chord tone)
//! PitchClass   - one of the 12 canonical sharp-spelled pitch classes, e.g. "A♯"
//! ```
//!
//! ## Key Concepts
//!
//! ### Semitone Arithmetic
//! Every letter has a fixed natural semitone distance from C
//! (C=0, D=2, E=4, F=5, G=7, A=9, B=11). All pitch arithmetic in the engine
//! reduces modulo 12 after adding accidental offsets.
//!
//! ### Letter Cycle
//! The letters repeat cyclically (…A B C D…). [`NoteName::at`] indexes the
//! cycle mod 7, which is what makes third-stacking in the speller wrap
//! correctly past B.
//!
//! ### Canonical Pitch Classes
//! [`PitchClass`] is the sharp-preferring enharmonic reduction of any spelled
//! note: C♭♭ and A♯ both reduce to `PitchClass::ASharp`. Black keys are always
//! named with a sharp, matching the rendered keyboard's key ids.
//!
//! ## Related Modules
//! - `spell` - builds `SpelledNote`s from a root and interval pattern
//! - `normalize` - parses note strings down to a `PitchClass`
//! - `keyboard` - pairs a `PitchClass` with an octave index

use serde::{Serialize, Serializer};
use std::fmt;

/// One of the seven natural note letters, in cyclic order C D E F G A B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// The letter cycle in order. `CYCLE[0]` is C.
    pub const CYCLE: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Semitone distance of the natural letter from C.
    pub fn natural_semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// Position of the letter within the cycle (C=0 … B=6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at `index` in the cycle, wrapping mod 7.
    pub fn at(index: usize) -> NoteName {
        Self::CYCLE[index % 7]
    }

    /// Parse a single uppercase letter A-G.
    pub fn from_letter(c: char) -> Option<NoteName> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    fn letter_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter_str())
    }
}

/// Accidental marks on a spelled note. Signs are never mixed on one note,
/// and the speller produces at most two marks of the same sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset contributed by the marks (-2 to +2).
    pub fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Display marks ("" for natural, "♯♯" for double sharp, …).
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "♭♭",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "♯♯",
        }
    }

    /// Accidental for a signed semitone correction in {-2..2}.
    ///
    /// # Panics
    /// Panics on any other offset. The speller only ever produces offsets in
    /// range for the four supported chord qualities; an out-of-range value
    /// means the static interval tables no longer agree with third-stacking,
    /// which is a defect to surface immediately, not an input error.
    pub fn from_offset(offset: i8) -> Accidental {
        match offset {
            -2 => Accidental::DoubleFlat,
            -1 => Accidental::Flat,
            0 => Accidental::Natural,
            1 => Accidental::Sharp,
            2 => Accidental::DoubleSharp,
            other => unreachable!(
                "accidental offset {} out of range: interval tables inconsistent with third-stacking",
                other
            ),
        }
    }
}

/// A diatonically spelled chord tone: letter plus accidental marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpelledNote {
    pub letter: NoteName,
    pub accidental: Accidental,
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.symbol())
    }
}

/// One of the 12 canonical sharp-spelled pitch classes.
///
/// Black keys are always named with a sharp (never a flat), matching the ids
/// of the rendered keyboard keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All 12 pitch classes, indexed by semitone distance from C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class for a semitone value, reduced mod 12 (negatives allowed).
    pub fn from_semitone(semitone: i32) -> PitchClass {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    /// Semitone distance from C (0-11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The natural letter part of the canonical name (C♯ → C).
    pub fn letter(self) -> NoteName {
        match self {
            PitchClass::C | PitchClass::CSharp => NoteName::C,
            PitchClass::D | PitchClass::DSharp => NoteName::D,
            PitchClass::E => NoteName::E,
            PitchClass::F | PitchClass::FSharp => NoteName::F,
            PitchClass::G | PitchClass::GSharp => NoteName::G,
            PitchClass::A | PitchClass::ASharp => NoteName::A,
            PitchClass::B => NoteName::B,
        }
    }

    /// Whether this pitch class is a black key.
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    /// Canonical display name ("C", "C♯", …).
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C♯",
            PitchClass::D => "D",
            PitchClass::DSharp => "D♯",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F♯",
            PitchClass::G => "G",
            PitchClass::GSharp => "G♯",
            PitchClass::A => "A",
            PitchClass::ASharp => "A♯",
            PitchClass::B => "B",
        }
    }

    /// Hyphenated ASCII name used in renderer element ids ("C-sharp").
    pub fn slug(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C-sharp",
            PitchClass::D => "D",
            PitchClass::DSharp => "D-sharp",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F-sharp",
            PitchClass::G => "G",
            PitchClass::GSharp => "G-sharp",
            PitchClass::A => "A",
            PitchClass::ASharp => "A-sharp",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_semitones() {
        // C=0, D=2, E=4, F=5, G=7, A=9, B=11
        let semis: Vec<u8> = NoteName::CYCLE
            .iter()
            .map(|n| n.natural_semitone())
            .collect();
        assert_eq!(semis, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_letter_cycle_wraps() {
        assert_eq!(NoteName::at(0), NoteName::C);
        assert_eq!(NoteName::at(6), NoteName::B);
        assert_eq!(NoteName::at(7), NoteName::C);
        assert_eq!(NoteName::at(9), NoteName::E);
    }

    #[test]
    fn test_pitch_class_from_semitone_wraps() {
        assert_eq!(PitchClass::from_semitone(0), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(13), PitchClass::CSharp);
        assert_eq!(PitchClass::from_semitone(-1), PitchClass::B);
        assert_eq!(PitchClass::from_semitone(-12), PitchClass::C);
    }

    #[test]
    fn test_pitch_class_semitone_round_trip() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.semitone() as usize, i);
            assert_eq!(PitchClass::from_semitone(i as i32), *pc);
        }
    }

    #[test]
    fn test_spelled_note_display() {
        let note = SpelledNote {
            letter: NoteName::F,
            accidental: Accidental::DoubleSharp,
        };
        assert_eq!(note.to_string(), "F♯♯");

        let note = SpelledNote {
            letter: NoteName::B,
            accidental: Accidental::Flat,
        };
        assert_eq!(note.to_string(), "B♭");

        let note = SpelledNote {
            letter: NoteName::C,
            accidental: Accidental::Natural,
        };
        assert_eq!(note.to_string(), "C");
    }

    #[test]
    fn test_black_keys() {
        let black: Vec<PitchClass> = PitchClass::ALL
            .iter()
            .copied()
            .filter(|pc| pc.is_sharp())
            .collect();
        assert_eq!(
            black,
            vec![
                PitchClass::CSharp,
                PitchClass::DSharp,
                PitchClass::FSharp,
                PitchClass::GSharp,
                PitchClass::ASharp,
            ]
        );
    }

    #[test]
    #[should_panic]
    fn test_accidental_offset_out_of_range_panics() {
        Accidental::from_offset(3);
    }
}
