//! Back-to-back note emission.

use tracing::debug;

use super::{header_events, EmitParams, EventKind, EventSequence, TimedEvent};
use crate::generate::GenerateError;
use crate::note::Note;

/// Emits each note after the previous one ends.
///
/// The k-th note-off lands on the sum of the first k durations in ticks,
/// each at least one tick (see [`Note::duration_ticks`]).
/// A note-off and the following note-on share a tick, off first.
pub fn emit_sequential(
    notes: &[Note],
    params: &EmitParams,
) -> Result<EventSequence, GenerateError> {
    if notes.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    let mut events = header_events(params)?;
    events.reserve(notes.len() * 2);

    let mut cursor: u64 = 0;
    for note in notes {
        events.push(TimedEvent::new(
            cursor,
            EventKind::NoteOn {
                channel: params.channel,
                key: note.pitch(),
                velocity: note.velocity(),
            },
        ));
        cursor = cursor.saturating_add(note.duration_ticks(params.ticks_per_beat));
        events.push(TimedEvent::new(
            cursor,
            EventKind::NoteOff {
                channel: params.channel,
                key: note.pitch(),
            },
        ));
    }

    debug!(notes = notes.len(), ticks = cursor, "emitted sequential phrase");

    Ok(EventSequence {
        ticks_per_beat: params.ticks_per_beat,
        events,
    })
}
