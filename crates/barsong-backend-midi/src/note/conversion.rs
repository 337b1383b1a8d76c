//! Beat, tick, tempo and note name conversions.

use super::constants::PITCH_CLASS_NAMES;

/// Microseconds in one minute.
const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Converts a duration in beats to ticks, truncating toward zero.
///
/// # Examples
/// ```
/// use barsong_backend_midi::note::beats_to_ticks;
///
/// assert_eq!(beats_to_ticks(1.0, 480), 480);
/// assert_eq!(beats_to_ticks(0.375, 480), 180);
/// ```
pub fn beats_to_ticks(beats: f64, ticks_per_beat: u16) -> u64 {
    if !beats.is_finite() || beats <= 0.0 {
        return 0;
    }
    (beats * ticks_per_beat as f64) as u64
}

/// Converts a tempo in BPM to microseconds per beat, rounded.
///
/// # Examples
/// ```
/// use barsong_backend_midi::note::bpm_to_micros_per_beat;
///
/// assert_eq!(bpm_to_micros_per_beat(120), 500_000);
/// ```
pub fn bpm_to_micros_per_beat(bpm: u16) -> u32 {
    if bpm == 0 {
        return 0;
    }
    (MICROS_PER_MINUTE / bpm as f64).round() as u32
}

/// Converts ticks to seconds at a given tempo.
pub fn ticks_to_seconds(ticks: u64, ticks_per_beat: u16, bpm: u16) -> f64 {
    if ticks_per_beat == 0 || bpm == 0 {
        return 0.0;
    }
    ticks as f64 / ticks_per_beat as f64 * 60.0 / bpm as f64
}

/// Converts a MIDI key to a name like "C4" (MIDI 60 = C4).
///
/// # Examples
/// ```
/// use barsong_backend_midi::note::midi_to_note_name;
///
/// assert_eq!(midi_to_note_name(60), "C4");
/// assert_eq!(midi_to_note_name(63), "D#4");
/// ```
pub fn midi_to_note_name(pitch: u8) -> String {
    let octave = (pitch / 12) as i32 - 1;
    format!("{}{}", PITCH_CLASS_NAMES[(pitch % 12) as usize], octave)
}
