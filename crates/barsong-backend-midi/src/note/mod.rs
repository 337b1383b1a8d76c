//! Note value type and pitch/time conversion utilities.
//!
//! A [`Note`] is immutable once built: pitch and velocity are clamped into
//! their MIDI ranges at construction and the duration is always positive.

mod constants;
mod conversion;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::generate::GenerateError;

pub use constants::{
    MARKED_CHARS, MARKED_OCTAVE_SHIFT, MARKED_VELOCITY, PITCH_MAX, PITCH_MIN, UNMARKED_VELOCITY,
    VELOCITY_MAX, VELOCITY_MIN,
};

pub use conversion::{beats_to_ticks, bpm_to_micros_per_beat, midi_to_note_name, ticks_to_seconds};

/// A pitched, timed note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Note {
    pitch: u8,
    duration_beats: f64,
    velocity: u8,
}

impl Note {
    /// Builds a note, clamping pitch to 0-127 and velocity to 1-127.
    ///
    /// Fails if the duration is not a positive finite number of beats.
    pub fn new(pitch: i32, duration_beats: f64, velocity: i32) -> Result<Self, GenerateError> {
        if !duration_beats.is_finite() || duration_beats <= 0.0 {
            return Err(GenerateError::InvalidParameter(format!(
                "note duration must be positive, got {} beats",
                duration_beats
            )));
        }
        Ok(Self {
            pitch: clamp_pitch(pitch),
            duration_beats,
            velocity: clamp_velocity(velocity),
        })
    }

    /// MIDI key, 0-127.
    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    /// Duration in beats, always positive.
    pub fn duration_beats(&self) -> f64 {
        self.duration_beats
    }

    /// Velocity, 1-127.
    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    /// Duration in ticks at the given resolution.
    ///
    /// Truncates like [`beats_to_ticks`] but never returns less than one
    /// tick, so a note-off always lands after its note-on.
    pub fn duration_ticks(&self, ticks_per_beat: u16) -> u64 {
        beats_to_ticks(self.duration_beats, ticks_per_beat).max(1)
    }

    /// Pitch as a note name, e.g. "D#4".
    pub fn name(&self) -> String {
        midi_to_note_name(self.pitch)
    }
}

/// Clamps an integer pitch into 0-127.
pub fn clamp_pitch(pitch: i32) -> u8 {
    pitch.clamp(PITCH_MIN as i32, PITCH_MAX as i32) as u8
}

/// Clamps an integer velocity into 1-127.
pub fn clamp_velocity(velocity: i32) -> u8 {
    velocity.clamp(VELOCITY_MIN as i32, VELOCITY_MAX as i32) as u8
}
