//! Tests for the note type and conversion functions.

use super::*;

#[test]
fn test_note_keeps_in_range_values() {
    let note = Note::new(63, 1.0, 95).unwrap();
    assert_eq!(note.pitch(), 63);
    assert_eq!(note.duration_beats(), 1.0);
    assert_eq!(note.velocity(), 95);
}

#[test]
fn test_note_clamps_pitch() {
    assert_eq!(Note::new(140, 0.5, 80).unwrap().pitch(), 127);
    assert_eq!(Note::new(-3, 0.5, 80).unwrap().pitch(), 0);
}

#[test]
fn test_note_clamps_velocity_away_from_zero() {
    assert_eq!(Note::new(60, 0.5, 0).unwrap().velocity(), 1);
    assert_eq!(Note::new(60, 0.5, -20).unwrap().velocity(), 1);
    assert_eq!(Note::new(60, 0.5, 300).unwrap().velocity(), 127);
}

#[test]
fn test_note_rejects_non_positive_duration() {
    assert!(Note::new(60, 0.0, 80).is_err());
    assert!(Note::new(60, -1.0, 80).is_err());
    assert!(Note::new(60, f64::NAN, 80).is_err());
    assert!(Note::new(60, f64::INFINITY, 80).is_err());
}

#[test]
fn test_note_duration_ticks() {
    let note = Note::new(60, 1.5, 80).unwrap();
    assert_eq!(note.duration_ticks(480), 720);
    assert_eq!(note.duration_ticks(96), 144);
}

#[test]
fn test_note_duration_ticks_at_least_one() {
    let note = Note::new(60, 0.001, 80).unwrap();
    assert_eq!(beats_to_ticks(0.001, 480), 0);
    assert_eq!(note.duration_ticks(480), 1);
    assert_eq!(Note::new(60, 0.125, 80).unwrap().duration_ticks(1), 1);
}

#[test]
fn test_beats_to_ticks_truncates() {
    assert_eq!(beats_to_ticks(0.125, 480), 60);
    assert_eq!(beats_to_ticks(0.3, 100), 30);
    // 1/3 beat at 100 tpb = 33.33.. -> 33
    assert_eq!(beats_to_ticks(1.0 / 3.0, 100), 33);
    assert_eq!(beats_to_ticks(0.0, 480), 0);
    assert_eq!(beats_to_ticks(-1.0, 480), 0);
}

#[test]
fn test_bpm_to_micros_per_beat() {
    assert_eq!(bpm_to_micros_per_beat(120), 500_000);
    assert_eq!(bpm_to_micros_per_beat(60), 1_000_000);
    // 60e6 / 70 = 857142.857 -> 857143
    assert_eq!(bpm_to_micros_per_beat(70), 857_143);
    // 60e6 / 190 = 315789.47 -> 315789
    assert_eq!(bpm_to_micros_per_beat(190), 315_789);
    assert_eq!(bpm_to_micros_per_beat(0), 0);
}

#[test]
fn test_ticks_to_seconds() {
    assert!((ticks_to_seconds(960, 480, 120) - 1.0).abs() < 1e-9);
    assert!((ticks_to_seconds(480, 480, 60) - 1.0).abs() < 1e-9);
    assert_eq!(ticks_to_seconds(480, 0, 120), 0.0);
}

#[test]
fn test_midi_to_note_name() {
    assert_eq!(midi_to_note_name(0), "C-1");
    assert_eq!(midi_to_note_name(48), "C3");
    assert_eq!(midi_to_note_name(62), "D4");
    assert_eq!(midi_to_note_name(69), "A4");
    assert_eq!(midi_to_note_name(127), "G9");
}

#[test]
fn test_note_name_method() {
    assert_eq!(Note::new(51, 1.0, 55).unwrap().name(), "D#3");
}

#[test]
fn test_marked_chars() {
    assert_eq!(MARKED_CHARS.len(), 6);
    assert!(MARKED_CHARS.contains(&'\u{2588}'));
    assert!(!MARKED_CHARS.contains(&'0'));
}
