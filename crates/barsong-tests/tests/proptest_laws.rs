//! Property-based tests for the segmentation, mapping and emission laws.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p barsong-tests --test proptest_laws
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;

use barsong_backend_midi::emit::{chord_velocity, emit_chord, emit_sequential, EmitParams};
use barsong_backend_midi::note::beats_to_ticks;
use barsong_backend_midi::segment::expand_runs;
use barsong_backend_midi::{map_runs, segment_runs, sonify, MappingTables, Note};
use barsong_spec::{
    derive_parameters, EmissionStrategy, ParameterSource, SonifyConfig, DERIVED_SCALE_NAMES,
};
use barsong_tests::parse_phrase;

/// Scan-like text: bars, spaces, digits, letters and the odd block glyph.
fn scan_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[| X0-9A-Za-z#\u{2588}]{1,60}")
        .unwrap()
        .boxed()
}

fn fixed_config(scale: &str, base_pitch: u8, unit_beats: f64) -> SonifyConfig {
    SonifyConfig {
        parameter_source: ParameterSource::Fixed,
        scale: scale.to_string(),
        base_pitch,
        unit_beats,
        ..SonifyConfig::default()
    }
}

// ============================================================================
// 1. Segmentation
// ============================================================================

proptest! {
    /// Runs concatenate back to the text.
    #[test]
    fn runs_round_trip(text in scan_text()) {
        prop_assert_eq!(expand_runs(&segment_runs(&text)), text);
    }

    /// Adjacent runs never share a character and no run is empty.
    #[test]
    fn runs_are_maximal(text in scan_text()) {
        let runs = segment_runs(&text);
        prop_assert!(runs.iter().all(|r| r.length >= 1));
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].ch, pair[1].ch);
        }
    }
}

// ============================================================================
// 2. Parameter derivation
// ============================================================================

proptest! {
    /// Every text derives values inside their documented ranges.
    #[test]
    fn derived_values_in_range(text in ".{0,80}") {
        let p = derive_parameters(&text);
        prop_assert!(DERIVED_SCALE_NAMES.contains(&p.scale.as_str()));
        prop_assert!((70..=190).contains(&p.bpm));
        prop_assert!((36..=60).contains(&p.base_pitch));
        prop_assert!([0.125, 0.25, 0.375, 0.5].contains(&p.unit_beats));
        prop_assert!([81u8, 100, 104, 84, 85, 86].contains(&p.instrument));
        prop_assert!((1.0..=4.5).contains(&p.chord_duration_beats));
        prop_assert_eq!(derive_parameters(&text), p);
    }
}

// ============================================================================
// 3. Mapping
// ============================================================================

proptest! {
    /// One note per run, in range, with the run-clamped duration.
    #[test]
    fn mapped_notes_in_range(
        text in scan_text(),
        scale_idx in 0usize..3,
        base in 0u8..=127,
        unit_idx in 0usize..4,
    ) {
        let unit = [0.125, 0.25, 0.375, 0.5][unit_idx];
        let runs = segment_runs(&text);
        let notes = map_runs(&runs, DERIVED_SCALE_NAMES[scale_idx], base, unit, &MappingTables::default()).unwrap();

        prop_assert_eq!(notes.len(), runs.len());
        for (run, note) in runs.iter().zip(&notes) {
            prop_assert!(note.pitch() <= 127);
            prop_assert!(note.velocity() >= 1 && note.velocity() <= 127);
            let expected = run.length.clamp(1, 12) as f64 * unit;
            prop_assert_eq!(note.duration_beats(), expected);
        }
    }
}

// ============================================================================
// 4. Emission
// ============================================================================

fn arbitrary_notes() -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec((0i32..=127, 1u32..=48, 1i32..=127), 1..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(p, eighths, v)| Note::new(p, eighths as f64 * 0.125, v).unwrap())
            .collect()
    })
}

proptest! {
    /// The k-th note-off lands on the running sum of durations, and every
    /// note lasts at least one tick even at coarse resolutions.
    #[test]
    fn sequential_offs_are_cumulative(notes in arbitrary_notes(), tpb in 1u16..=960) {
        let params = EmitParams { ticks_per_beat: tpb, ..EmitParams::default() };
        let seq = emit_sequential(&notes, &params).unwrap();

        let offs: Vec<u64> = seq.note_offs().map(|e| e.tick).collect();
        let mut sum = 0u64;
        for (note, off) in notes.iter().zip(&offs) {
            sum += note.duration_ticks(tpb);
            prop_assert_eq!(*off, sum);
        }

        let ons: Vec<u64> = seq.note_ons().map(|e| e.tick).collect();
        for k in 1..ons.len() {
            prop_assert!(ons[k] >= offs[k - 1]);
        }
        for (on, off) in ons.iter().zip(&offs) {
            prop_assert!(off > on);
        }
        prop_assert!(seq.events.windows(2).all(|w| w[0].tick <= w[1].tick));
    }

    /// Chord keys are the distinct pitches, with the truncated mean velocity.
    #[test]
    fn chord_is_distinct_pitch_set(notes in arbitrary_notes(), beats_idx in 0u8..8) {
        let params = EmitParams {
            chord_duration_beats: 1.0 + beats_idx as f64 * 0.5,
            ..EmitParams::default()
        };
        let seq = emit_chord(&notes, &params).unwrap();
        let bytes = barsong_backend_midi::write_smf(&seq).unwrap();
        let phrase = parse_phrase(&bytes).unwrap();

        let expected: BTreeSet<u8> = notes.iter().map(Note::pitch).collect();
        let keys: BTreeSet<u8> = phrase.notes.iter().map(|n| n.key).collect();
        prop_assert_eq!(keys, expected.clone());
        prop_assert_eq!(phrase.notes.len(), expected.len());

        let sum: u32 = notes.iter().map(|n| n.velocity() as u32).sum();
        let mean = (sum / notes.len() as u32) as u8;
        prop_assert_eq!(chord_velocity(&notes), Some(mean.max(1)));
        prop_assert!(phrase.notes.iter().all(|n| n.velocity == mean.max(1)));

        let off = beats_to_ticks(params.chord_duration_beats, params.ticks_per_beat);
        prop_assert!(phrase.notes.iter().all(|n| n.on_tick == 0 && n.off_tick == off));
    }
}

// ============================================================================
// 5. Whole pipeline
// ============================================================================

proptest! {
    /// The pipeline never fails on non-empty text with a valid fixed config,
    /// and the file parses back to one note per run.
    #[test]
    fn pipeline_round_trips(
        text in scan_text(),
        scale_idx in 0usize..3,
        base in 24u8..=72,
    ) {
        let mut config = fixed_config(DERIVED_SCALE_NAMES[scale_idx], base, 0.25);
        config.strategy = EmissionStrategy::Sequential;
        let result = sonify(&text, &config).unwrap();
        let phrase = parse_phrase(&result.data).unwrap();

        prop_assert_eq!(phrase.notes.len(), segment_runs(&text).len());
        let keys: Vec<u8> = phrase.notes.iter().map(|n| n.key).collect();
        let expected: Vec<u8> = result.notes.iter().map(Note::pitch).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Arbitrary text never panics the pipeline.
    #[test]
    fn pipeline_never_panics(text in ".{0,120}") {
        let _ = sonify(&text, &SonifyConfig::default());
    }
}
