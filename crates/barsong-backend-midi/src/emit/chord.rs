//! Single sustained chord emission.

use std::collections::BTreeSet;

use tracing::debug;

use super::{header_events, EmitParams, EventKind, EventSequence, TimedEvent};
use crate::generate::GenerateError;
use crate::note::{beats_to_ticks, clamp_velocity, Note};

/// Integer average of the note velocities, clamped to 1-127.
///
/// Truncates toward zero: 95, 55, 95 average to 81.
pub fn chord_velocity(notes: &[Note]) -> Option<u8> {
    if notes.is_empty() {
        return None;
    }
    let sum: u64 = notes.iter().map(|n| n.velocity() as u64).sum();
    let average = sum / notes.len() as u64;
    Some(clamp_velocity(average.min(i32::MAX as u64) as i32))
}

/// Collapses all notes into one chord held for `chord_duration_beats`.
///
/// Repeated pitches sound once; keys are emitted in ascending order, all
/// note-ons at tick 0 and all note-offs at the chord length. A chord length
/// that truncates to zero ticks is an `InvalidParameter` error.
pub fn emit_chord(notes: &[Note], params: &EmitParams) -> Result<EventSequence, GenerateError> {
    let velocity = chord_velocity(notes).ok_or(GenerateError::EmptyInput)?;

    if !params.chord_duration_beats.is_finite() || params.chord_duration_beats <= 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "chord_duration_beats must be positive, got {}",
            params.chord_duration_beats
        )));
    }

    let mut events = header_events(params)?;

    let off_tick = beats_to_ticks(params.chord_duration_beats, params.ticks_per_beat);
    if off_tick == 0 {
        return Err(GenerateError::InvalidParameter(format!(
            "chord_duration_beats {} is shorter than one tick at {} ticks per beat",
            params.chord_duration_beats, params.ticks_per_beat
        )));
    }

    let pitches: BTreeSet<u8> = notes.iter().map(Note::pitch).collect();
    events.reserve(pitches.len() * 2);

    for &key in &pitches {
        events.push(TimedEvent::new(
            0,
            EventKind::NoteOn {
                channel: params.channel,
                key,
                velocity,
            },
        ));
    }
    for &key in &pitches {
        events.push(TimedEvent::new(
            off_tick,
            EventKind::NoteOff {
                channel: params.channel,
                key,
            },
        ));
    }

    debug!(
        notes = notes.len(),
        voices = pitches.len(),
        velocity,
        ticks = off_tick,
        "emitted chord"
    );

    Ok(EventSequence {
        ticks_per_beat: params.ticks_per_beat,
        events,
    })
}
