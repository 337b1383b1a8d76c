//! Timed event model and emission strategies.
//!
//! Both strategies produce an [`EventSequence`]: a tempo event and a program
//! change at tick 0, followed by note-on/note-off pairs at absolute ticks in
//! non-decreasing order.
//!
//! - [`EmissionStrategy::Sequential`]: notes back to back, never overlapping.
//! - [`EmissionStrategy::Chord`]: every distinct pitch at once, held for the
//!   chord duration.

mod chord;
mod sequential;


use barsong_spec::EmissionStrategy;
use serde::Serialize;

use crate::generate::GenerateError;
use crate::note::{bpm_to_micros_per_beat, ticks_to_seconds, Note};

pub use chord::{chord_velocity, emit_chord};
pub use sequential::emit_sequential;

/// One device event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Set tempo.
    Tempo { micros_per_beat: u32 },
    /// Select instrument.
    ProgramChange { channel: u8, program: u8 },
    /// Start a note.
    NoteOn { channel: u8, key: u8, velocity: u8 },
    /// Stop a note.
    NoteOff { channel: u8, key: u8 },
}

/// An event at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedEvent {
    /// Absolute time in ticks.
    pub tick: u64,
    /// What happens.
    pub kind: EventKind,
}

impl TimedEvent {
    /// Creates a new timed event.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}

/// Ordered events plus the resolution they are expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSequence {
    /// Ticks per beat.
    pub ticks_per_beat: u16,
    /// Events in playback order.
    pub events: Vec<TimedEvent>,
}

impl EventSequence {
    /// Tick of the last event.
    pub fn duration_ticks(&self) -> u64 {
        self.events.last().map(|e| e.tick).unwrap_or(0)
    }

    /// Length in seconds at the given tempo.
    pub fn duration_seconds(&self, bpm: u16) -> f64 {
        ticks_to_seconds(self.duration_ticks(), self.ticks_per_beat, bpm)
    }

    /// Note-on events only.
    pub fn note_ons(&self) -> impl Iterator<Item = &TimedEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::NoteOn { .. }))
    }

    /// Note-off events only.
    pub fn note_offs(&self) -> impl Iterator<Item = &TimedEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::NoteOff { .. }))
    }
}

/// Playback settings shared by both strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitParams {
    /// Tempo in BPM.
    pub bpm: u16,
    /// Program number.
    pub instrument: u8,
    /// Chord length in beats (chord strategy only).
    pub chord_duration_beats: f64,
    /// Ticks per beat.
    pub ticks_per_beat: u16,
    /// MIDI channel.
    pub channel: u8,
}

impl Default for EmitParams {
    fn default() -> Self {
        Self {
            bpm: barsong_spec::config::DEFAULT_BPM,
            instrument: barsong_spec::config::DEFAULT_INSTRUMENT,
            chord_duration_beats: barsong_spec::config::DEFAULT_CHORD_DURATION_BEATS,
            ticks_per_beat: barsong_spec::config::DEFAULT_TICKS_PER_BEAT,
            channel: 0,
        }
    }
}

/// Emits notes with the chosen strategy.
///
/// # Example
/// ```
/// use barsong_backend_midi::emit::{emit, EmitParams};
/// use barsong_backend_midi::note::Note;
/// use barsong_spec::EmissionStrategy;
///
/// let notes = vec![Note::new(60, 1.0, 80).unwrap(), Note::new(64, 0.5, 80).unwrap()];
/// let seq = emit(EmissionStrategy::Sequential, &notes, &EmitParams::default()).unwrap();
/// assert_eq!(seq.duration_ticks(), 720);
/// ```
pub fn emit(
    strategy: EmissionStrategy,
    notes: &[Note],
    params: &EmitParams,
) -> Result<EventSequence, GenerateError> {
    match strategy {
        EmissionStrategy::Sequential => emit_sequential(notes, params),
        EmissionStrategy::Chord => emit_chord(notes, params),
    }
}

/// Tempo and program change at tick 0.
fn header_events(params: &EmitParams) -> Result<Vec<TimedEvent>, GenerateError> {
    if params.ticks_per_beat == 0 {
        return Err(GenerateError::InvalidParameter(
            "ticks_per_beat must be at least 1".to_string(),
        ));
    }
    if params.bpm == 0 {
        return Err(GenerateError::InvalidParameter(
            "bpm must be at least 1".to_string(),
        ));
    }
    if params.channel > 15 || params.instrument > 127 {
        return Err(GenerateError::InvalidParameter(format!(
            "channel {} / program {} outside MIDI range",
            params.channel, params.instrument
        )));
    }
    Ok(vec![
        TimedEvent::new(
            0,
            EventKind::Tempo {
                micros_per_beat: bpm_to_micros_per_beat(params.bpm),
            },
        ),
        TimedEvent::new(
            0,
            EventKind::ProgramChange {
                channel: params.channel,
                program: params.instrument,
            },
        ),
    ])
}
