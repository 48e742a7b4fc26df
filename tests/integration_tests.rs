//! Integration tests for the seventh-chord engine
//!
//! Exercises the public API end to end: spelling across every root and
//! quality, normalization, random generation, and keyboard mapping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seventh::{
    map_to_keys, normalize_to_canonical, spell, Accidental, ChordGenerator, ChordQuality,
    EngineError, NoteName, PitchClass,
};

#[test]
fn test_spell_all_84_combinations_advance_by_thirds() {
    // 7 letters x 3 accidentals x 4 qualities
    for letter in NoteName::CYCLE {
        for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
            for quality in ChordQuality::ALL {
                let notes = spell(letter, accidental, quality.intervals());
                assert_eq!(notes.len(), 4);
                for (i, note) in notes.iter().enumerate() {
                    // Each tone sits on the next third up the letter cycle
                    assert_eq!(note.letter, NoteName::at(letter.index() + 2 * i));
                }
            }
        }
    }
}

#[test]
fn test_spelled_notes_hit_target_semitones() {
    // Spelling changes letter names, never pitch: every spelled tone must
    // normalize to root pitch + interval
    for letter in NoteName::CYCLE {
        for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
            let root_pitch =
                (letter.natural_semitone() as i32 + accidental.offset() as i32).rem_euclid(12);
            for quality in ChordQuality::ALL {
                let notes = spell(letter, accidental, quality.intervals());
                for (note, interval) in notes.iter().zip(quality.intervals()) {
                    let expected = PitchClass::from_semitone(root_pitch + interval as i32);
                    assert_eq!(
                        normalize_to_canonical(&note.to_string()).unwrap(),
                        expected,
                        "{}{} {:?}: tone {} off pitch",
                        letter,
                        accidental.symbol(),
                        quality,
                        note
                    );
                }
            }
        }
    }
}

#[test]
fn test_c_major7_scenario() {
    let notes: Vec<String> = spell(NoteName::C, Accidental::Natural, ChordQuality::Major7.intervals())
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(notes, vec!["C", "E", "G", "B"]);
}

#[test]
fn test_c_dominant7_scenario() {
    let notes: Vec<String> = spell(
        NoteName::C,
        Accidental::Natural,
        ChordQuality::Dominant7.intervals(),
    )
    .iter()
    .map(|n| n.to_string())
    .collect();
    // The 7th lies a semitone under natural B: B♭
    assert_eq!(notes, vec!["C", "E", "G", "B♭"]);
}

#[test]
fn test_f_sharp_half_diminished_scenario() {
    let notes: Vec<String> = spell(
        NoteName::F,
        Accidental::Sharp,
        ChordQuality::HalfDiminished7.intervals(),
    )
    .iter()
    .map(|n| n.to_string())
    .collect();
    assert_eq!(notes, vec!["F♯", "A", "C", "E"]);
}

#[test]
fn test_normalizer_total_over_produced_spellings() {
    // Every letter with 0-2 same-sign marks must normalize
    for letter in NoteName::CYCLE {
        for accidental in [
            Accidental::DoubleFlat,
            Accidental::Flat,
            Accidental::Natural,
            Accidental::Sharp,
            Accidental::DoubleSharp,
        ] {
            let spelled = format!("{}{}", letter, accidental.symbol());
            let pitch_class = normalize_to_canonical(&spelled).unwrap();
            let expected =
                (letter.natural_semitone() as i32 + accidental.offset() as i32).rem_euclid(12);
            assert_eq!(pitch_class.semitone() as i32, expected);
        }
    }
}

#[test]
fn test_normalizer_round_trip_on_canonical_names() {
    for pc in PitchClass::ALL {
        assert_eq!(normalize_to_canonical(pc.name()), Ok(pc));
    }
}

#[test]
fn test_normalizer_rejects_garbage() {
    assert!(matches!(
        normalize_to_canonical("X♯"),
        Err(EngineError::MalformedNote { .. })
    ));
    assert!(matches!(
        normalize_to_canonical(""),
        Err(EngineError::MalformedNote { .. })
    ));
}

#[test]
fn test_generator_never_repeats_root_letter() {
    let mut generator = ChordGenerator::with_rng(StdRng::seed_from_u64(2024));
    let mut previous = generator.generate();
    for _ in 0..300 {
        let chord = generator.generate();
        assert_ne!(
            chord.notes[0].chars().next(),
            previous.notes[0].chars().next()
        );
        previous = chord;
    }
}

#[test]
fn test_generated_chords_map_onto_keyboard() {
    // Every generated chord must land on four distinct keys with
    // non-decreasing octave indices
    let mut generator = ChordGenerator::with_rng(StdRng::seed_from_u64(99));
    for _ in 0..200 {
        let chord = generator.generate();
        let keys = map_to_keys(&chord.notes).unwrap();
        assert_eq!(keys.len(), chord.notes.len());
        for pair in keys.windows(2) {
            assert!(
                pair[0].octave <= pair[1].octave,
                "{}: octave decreased in {:?}",
                chord.name,
                keys
            );
            assert_ne!(pair[0], pair[1]);
        }
        // The layout spans octave indices 0..=2
        assert!(keys.iter().all(|k| k.octave <= 2));
    }
}

#[test]
fn test_g_dominant_keyboard_scenario() {
    let keys = map_to_keys(&["G", "B", "D", "F♯"]).unwrap();
    let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    // Starts at octave 0 (base letter G); B triggers the rollover before D;
    // D to F♯ crosses nothing
    assert_eq!(rendered, vec!["G0", "B0", "D1", "F♯1"]);
}

#[test]
fn test_key_identifiers_address_rendered_elements() {
    let keys = map_to_keys(&["B♭", "D", "F", "A♭"]).unwrap();
    let elements: Vec<String> = keys.iter().map(|k| k.element_id()).collect();
    // Flat spellings resolve to the sharp-named black keys of the SVG
    assert_eq!(
        elements,
        vec!["key-A-sharp0", "key-D1", "key-F1", "key-G-sharp1"]
    );
}

#[test]
fn test_chord_serializes_for_ui() {
    let mut generator = ChordGenerator::with_rng(StdRng::seed_from_u64(5));
    let chord = generator.generate();
    let json = serde_json::to_value(&chord).unwrap();
    assert!(json.get("name").is_some());
    assert_eq!(json.get("notes").unwrap().as_array().unwrap().len(), 4);
}
