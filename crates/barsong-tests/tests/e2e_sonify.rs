//! End-to-end tests: scan text in, parsed MIDI file out.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p barsong-tests --test e2e_sonify
//! ```

use barsong_backend_midi::{sonify, GenerateError};
use barsong_spec::{derive_parameters, EmissionStrategy, SonifyConfig};
use barsong_tests::fixtures::EDGE_TEXTS;
use barsong_tests::{parse_phrase, ParsedNote, SCAN_FIXTURES};
use pretty_assertions::assert_eq;

fn fixed(strategy: EmissionStrategy) -> SonifyConfig {
    SonifyConfig {
        scale: "minor".to_string(),
        base_pitch: 48,
        unit_beats: 0.25,
        bpm: 120,
        chord_duration_beats: 3.0,
        strategy,
        ..SonifyConfig::fixed()
    }
}

fn note(key: u8, velocity: u8, on_tick: u64, off_tick: u64) -> ParsedNote {
    ParsedNote {
        key,
        velocity,
        on_tick,
        off_tick,
    }
}

// ============================================================================
// Bars-and-spaces scenario
// ============================================================================

#[test]
fn bars_and_spaces_sequential() {
    let result = sonify("||||    XX", &fixed(EmissionStrategy::Sequential)).unwrap();
    let phrase = parse_phrase(&result.data).unwrap();

    assert_eq!(phrase.ticks_per_beat, 480);
    assert_eq!(phrase.bpm(), Some(120));
    assert_eq!(
        phrase.notes,
        vec![
            note(63, 95, 0, 480),
            note(51, 55, 480, 960),
            note(62, 95, 960, 1200),
        ]
    );
    assert_eq!(phrase.end_tick, 1200);
}

#[test]
fn bars_and_spaces_chord() {
    let result = sonify("||||    XX", &fixed(EmissionStrategy::Chord)).unwrap();
    let phrase = parse_phrase(&result.data).unwrap();

    assert_eq!(
        phrase.notes,
        vec![
            note(51, 81, 0, 1440),
            note(62, 81, 0, 1440),
            note(63, 81, 0, 1440),
        ]
    );
}

#[test]
fn scanner_payload_pentatonic() {
    let config = SonifyConfig {
        scale: "pentatonic".to_string(),
        base_pitch: 50,
        unit_beats: 0.25,
        bpm: 130,
        instrument: 81,
        strategy: EmissionStrategy::Sequential,
        ..SonifyConfig::fixed()
    };
    let result = sonify("XXXXJ102800309", &config).unwrap();
    let phrase = parse_phrase(&result.data).unwrap();

    let keys: Vec<u8> = phrase.notes.iter().map(|n| n.key).collect();
    assert_eq!(keys, vec![66, 52, 66, 54, 50, 54, 52, 59, 54, 54]);
    assert_eq!(phrase.program, Some(81));
    assert_eq!(phrase.bpm(), Some(130));
    // 4 + 1 + 1 + 1 + 1 + 1 + 2 + 1 + 1 + 1 units of 120 ticks
    assert_eq!(phrase.end_tick, 14 * 120);
}

// ============================================================================
// Derived parameters reach the file
// ============================================================================

#[test]
fn derived_parameters_in_file() {
    for fixture in SCAN_FIXTURES.iter().filter(|f| !f.text.is_empty()) {
        let result = sonify(fixture.text, &SonifyConfig::default()).unwrap();
        let phrase = parse_phrase(&result.data).unwrap();

        assert_eq!(phrase.program, Some(fixture.instrument), "{}", fixture.text);
        assert_eq!(phrase.bpm(), Some(fixture.bpm), "{}", fixture.text);
        let chord_ticks = (fixture.chord_duration_beats * 480.0) as u64;
        assert!(
            phrase.notes.iter().all(|n| n.on_tick == 0 && n.off_tick == chord_ticks),
            "{}",
            fixture.text
        );
    }
}

#[test]
fn golden_derivations() {
    for fixture in SCAN_FIXTURES {
        let p = derive_parameters(fixture.text);
        assert_eq!(p.scale, fixture.scale, "{:?}", fixture.text);
        assert_eq!(p.bpm, fixture.bpm, "{:?}", fixture.text);
        assert_eq!(p.base_pitch, fixture.base_pitch, "{:?}", fixture.text);
        assert_eq!(p.unit_beats, fixture.unit_beats, "{:?}", fixture.text);
        assert_eq!(p.instrument, fixture.instrument, "{:?}", fixture.text);
        assert_eq!(
            p.chord_duration_beats, fixture.chord_duration_beats,
            "{:?}",
            fixture.text
        );
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn edge_texts_produce_valid_files() {
    for strategy in [EmissionStrategy::Sequential, EmissionStrategy::Chord] {
        for text in EDGE_TEXTS {
            let config = SonifyConfig {
                strategy,
                ..SonifyConfig::default()
            };
            let result = sonify(text, &config).unwrap();
            let phrase = parse_phrase(&result.data).unwrap();
            assert!(!phrase.notes.is_empty(), "{:?}", text);
        }
    }
}

#[test]
fn long_run_is_clamped() {
    let result = sonify(
        "||||||||||||||||||||||||||||||||",
        &fixed(EmissionStrategy::Sequential),
    )
    .unwrap();
    let phrase = parse_phrase(&result.data).unwrap();
    // 32 bars clamp to 12 units of a quarter beat
    assert_eq!(phrase.notes, vec![note(phrase.notes[0].key, 95, 0, 12 * 120)]);
}

#[test]
fn empty_scan_produces_nothing() {
    assert!(matches!(
        sonify("\r\n", &SonifyConfig::default()),
        Err(GenerateError::EmptyInput)
    ));
}
