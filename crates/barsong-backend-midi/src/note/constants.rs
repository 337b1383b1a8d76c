//! Constants for note construction and pitch mapping.

/// Lowest MIDI key.
pub const PITCH_MIN: u8 = 0;

/// Highest MIDI key.
pub const PITCH_MAX: u8 = 127;

/// Lowest audible velocity. Zero means "no sound" and is never emitted.
pub const VELOCITY_MIN: u8 = 1;

/// Highest velocity.
pub const VELOCITY_MAX: u8 = 127;

/// Velocity of a note from a marked (bar-like) run.
pub const MARKED_VELOCITY: u8 = 95;

/// Velocity of a note from an unmarked run.
pub const UNMARKED_VELOCITY: u8 = 55;

/// Octave shift applied to marked runs.
pub const MARKED_OCTAVE_SHIFT: i32 = 12;

/// Characters treated as bars. `X` and `x` overlap with real payload
/// characters; the set is kept exactly as is.
pub const MARKED_CHARS: [char; 6] = ['|', '1', '\u{2588}', '#', 'X', 'x'];

/// Sharp-based pitch class names (C=0).
pub(super) const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
