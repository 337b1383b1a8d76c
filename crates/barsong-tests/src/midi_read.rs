//! Reads produced SMF bytes back with midly, independent of the writer.

use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};

/// A note as it appears in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNote {
    pub key: u8,
    pub velocity: u8,
    pub on_tick: u64,
    pub off_tick: u64,
}

/// Everything the tests look at in a file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPhrase {
    pub ticks_per_beat: u16,
    pub micros_per_beat: Option<u32>,
    pub program: Option<u8>,
    /// Notes ordered by note-on.
    pub notes: Vec<ParsedNote>,
    /// Tick of the end-of-track event.
    pub end_tick: u64,
}

impl ParsedPhrase {
    /// Tempo in BPM, rounded.
    pub fn bpm(&self) -> Option<u16> {
        self.micros_per_beat
            .map(|us| (60_000_000.0 / us as f64).round() as u16)
    }
}

/// Parses bytes into a phrase, pairing each note-off with the earliest open
/// note-on of the same key.
pub fn parse_phrase(bytes: &[u8]) -> Result<ParsedPhrase, String> {
    let smf = Smf::parse(bytes).map_err(|e| e.to_string())?;
    let ticks_per_beat = match smf.header.timing {
        Timing::Metrical(t) => t.as_int(),
        Timing::Timecode(..) => return Err("timecode timing".to_string()),
    };

    let mut phrase = ParsedPhrase {
        ticks_per_beat,
        micros_per_beat: None,
        program: None,
        notes: Vec::new(),
        end_tick: 0,
    };
    let mut open: Vec<(u8, u8, u64)> = Vec::new();

    for track in &smf.tracks {
        let mut tick = 0u64;
        for event in track {
            tick += event.delta.as_int() as u64;
            match event.kind {
                TrackEventKind::Meta(MetaMessage::Tempo(t)) => {
                    phrase.micros_per_beat = Some(t.as_int())
                }
                TrackEventKind::Meta(MetaMessage::EndOfTrack) => {
                    phrase.end_tick = phrase.end_tick.max(tick)
                }
                TrackEventKind::Midi { message, .. } => match message {
                    MidiMessage::ProgramChange { program } => {
                        phrase.program = Some(program.as_int())
                    }
                    MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                        open.push((key.as_int(), vel.as_int(), tick))
                    }
                    MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                        let key = key.as_int();
                        let idx = open
                            .iter()
                            .position(|(k, _, _)| *k == key)
                            .ok_or_else(|| format!("note-off without note-on for key {}", key))?;
                        let (key, velocity, on_tick) = open.remove(idx);
                        phrase.notes.push(ParsedNote {
                            key,
                            velocity,
                            on_tick,
                            off_tick: tick,
                        });
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    if let Some((key, _, _)) = open.first() {
        return Err(format!("note {} never released", key));
    }
    phrase
        .notes
        .sort_by_key(|n| (n.on_tick, n.off_tick, n.key));
    Ok(phrase)
}
