//! Standard MIDI File serialization.
//!
//! Output is format 1 with a single track: absolute ticks become delta times,
//! note-offs are written as `NoteOff` with velocity 0 and the track closes with
//! an end-of-track meta event.

use midly::{
    num::{u15, u24, u28, u4, u7},
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
};
use tracing::debug;

use crate::emit::{EventKind, EventSequence, TimedEvent};
use crate::generate::GenerateError;

/// Largest delta time a variable-length quantity can carry.
pub const MAX_DELTA_TICKS: u64 = (1 << 28) - 1;

/// Largest metrical resolution the header can carry.
pub const MAX_TICKS_PER_BEAT: u16 = 0x7FFF;

const MAX_TEMPO_MICROS: u32 = 0xFF_FFFF;

/// Serializes an event sequence to SMF bytes.
pub fn write_smf(sequence: &EventSequence) -> Result<Vec<u8>, GenerateError> {
    let smf = to_smf(sequence)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    debug!(
        bytes = buf.len(),
        events = sequence.events.len(),
        "wrote standard MIDI file"
    );
    Ok(buf)
}

fn to_smf(sequence: &EventSequence) -> Result<Smf<'static>, GenerateError> {
    let tpb = sequence.ticks_per_beat;
    if tpb == 0 || tpb > MAX_TICKS_PER_BEAT {
        return Err(GenerateError::InvalidParameter(format!(
            "ticks_per_beat must be within 1..={}, got {}",
            MAX_TICKS_PER_BEAT, tpb
        )));
    }

    let mut smf = Smf::new(Header::new(Format::Parallel, Timing::Metrical(u15::new(tpb))));
    let mut track: Track<'static> = Vec::with_capacity(sequence.events.len() + 1);

    let mut last_tick = 0u64;
    for event in &sequence.events {
        if event.tick < last_tick {
            return Err(GenerateError::InvalidParameter(format!(
                "events out of order: tick {} after {}",
                event.tick, last_tick
            )));
        }
        let delta = event.tick - last_tick;
        if delta > MAX_DELTA_TICKS {
            return Err(GenerateError::InvalidParameter(format!(
                "delta of {} ticks exceeds the SMF limit",
                delta
            )));
        }
        last_tick = event.tick;

        track.push(TrackEvent {
            delta: u28::new(delta as u32),
            kind: track_event_kind(&event.kind)?,
        });
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    Ok(smf)
}

fn track_event_kind(kind: &EventKind) -> Result<TrackEventKind<'static>, GenerateError> {
    let out = match *kind {
        EventKind::Tempo { micros_per_beat } => {
            if micros_per_beat == 0 || micros_per_beat > MAX_TEMPO_MICROS {
                return Err(GenerateError::InvalidParameter(format!(
                    "tempo of {} us per beat cannot be stored",
                    micros_per_beat
                )));
            }
            TrackEventKind::Meta(MetaMessage::Tempo(u24::new(micros_per_beat)))
        }
        EventKind::ProgramChange { channel, program } => TrackEventKind::Midi {
            channel: channel_u4(channel)?,
            message: MidiMessage::ProgramChange {
                program: data_u7(program, "program")?,
            },
        },
        EventKind::NoteOn {
            channel,
            key,
            velocity,
        } => TrackEventKind::Midi {
            channel: channel_u4(channel)?,
            message: MidiMessage::NoteOn {
                key: data_u7(key, "key")?,
                vel: data_u7(velocity, "velocity")?,
            },
        },
        EventKind::NoteOff { channel, key } => TrackEventKind::Midi {
            channel: channel_u4(channel)?,
            message: MidiMessage::NoteOff {
                key: data_u7(key, "key")?,
                vel: u7::new(0),
            },
        },
    };
    Ok(out)
}

fn channel_u4(channel: u8) -> Result<u4, GenerateError> {
    if channel > 15 {
        return Err(GenerateError::InvalidParameter(format!(
            "channel {} outside 0-15",
            channel
        )));
    }
    Ok(u4::new(channel))
}

fn data_u7(value: u8, what: &str) -> Result<u7, GenerateError> {
    if value > 127 {
        return Err(GenerateError::InvalidParameter(format!(
            "{} {} outside 0-127",
            what, value
        )));
    }
    Ok(u7::new(value))
}

/// Parses SMF bytes back into an event sequence.
///
/// Tracks are merged by absolute tick. Note-ons with velocity 0 read back as
/// note-offs. Events the sequence model has no place for are skipped.
pub fn read_smf(bytes: &[u8]) -> Result<EventSequence, GenerateError> {
    let smf = Smf::parse(bytes).map_err(|e| GenerateError::MidiParse(e.to_string()))?;

    let ticks_per_beat = match smf.header.timing {
        Timing::Metrical(tpb) => tpb.as_int(),
        Timing::Timecode(..) => {
            return Err(GenerateError::MidiParse(
                "timecode timing is not supported".to_string(),
            ))
        }
    };

    let mut events = Vec::new();
    for track in &smf.tracks {
        let mut tick = 0u64;
        for event in track {
            tick += event.delta.as_int() as u64;
            if let Some(kind) = event_kind(&event.kind) {
                events.push(TimedEvent::new(tick, kind));
            }
        }
    }
    // Stable sort keeps per-track order for events sharing a tick.
    events.sort_by_key(|e| e.tick);

    Ok(EventSequence {
        ticks_per_beat,
        events,
    })
}

fn event_kind(kind: &TrackEventKind<'_>) -> Option<EventKind> {
    match *kind {
        TrackEventKind::Meta(MetaMessage::Tempo(t)) => Some(EventKind::Tempo {
            micros_per_beat: t.as_int(),
        }),
        TrackEventKind::Midi { channel, message } => {
            let channel = channel.as_int();
            match message {
                MidiMessage::ProgramChange { program } => Some(EventKind::ProgramChange {
                    channel,
                    program: program.as_int(),
                }),
                MidiMessage::NoteOn { key, vel } if vel.as_int() == 0 => Some(EventKind::NoteOff {
                    channel,
                    key: key.as_int(),
                }),
                MidiMessage::NoteOn { key, vel } => Some(EventKind::NoteOn {
                    channel,
                    key: key.as_int(),
                    velocity: vel.as_int(),
                }),
                MidiMessage::NoteOff { key, .. } => Some(EventKind::NoteOff {
                    channel,
                    key: key.as_int(),
                }),
                _ => None,
            }
        }
        _ => None,
    }
}
