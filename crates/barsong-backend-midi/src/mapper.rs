//! Scale/pitch mapping from runs to notes.
//!
//! Each run becomes one note:
//!
//! ```text
//! run_len   = clamp(run.length, min_run, max_run)
//! degree    = scale[(code_point + position + run_len) % scale.len()]
//! pitch     = clamp(base_pitch + degree + (12 if marked), 0, 127)
//! velocity  = 95 if marked else 55
//! duration  = run_len * unit_beats
//! ```

use barsong_spec::{ScaleTable, SonifyConfig};
use tracing::trace;

use crate::generate::GenerateError;
use crate::note::{Note, MARKED_CHARS, MARKED_OCTAVE_SHIFT, MARKED_VELOCITY, UNMARKED_VELOCITY};
use crate::segment::Run;

/// Immutable tables the mapper reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTables {
    /// Scales available by name.
    pub scales: ScaleTable,
    /// Shortest run length after clamping.
    pub min_run: u32,
    /// Longest run length after clamping.
    pub max_run: u32,
}

impl MappingTables {
    /// Builds the tables a config describes.
    pub fn from_config(config: &SonifyConfig) -> Self {
        Self {
            scales: config.scale_table(),
            min_run: config.min_run,
            max_run: config.max_run,
        }
    }
}

impl Default for MappingTables {
    fn default() -> Self {
        Self::from_config(&SonifyConfig::default())
    }
}

/// Returns true if the character counts as a bar.
pub fn is_marked(ch: char) -> bool {
    MARKED_CHARS.contains(&ch)
}

/// Maps runs to notes, one note per run, in run order.
///
/// The scale is resolved before anything else, so an unknown scale yields
/// `InvalidScale` and no notes. An empty run list yields `EmptyInput`.
///
/// # Example
/// ```
/// use barsong_backend_midi::mapper::{map_runs, MappingTables};
/// use barsong_backend_midi::segment::segment_runs;
///
/// let runs = segment_runs("||||    XX");
/// let notes = map_runs(&runs, "minor", 48, 0.25, &MappingTables::default()).unwrap();
/// assert_eq!(notes[0].pitch(), 63);
/// assert_eq!(notes[0].velocity(), 95);
/// ```
pub fn map_runs(
    runs: &[Run],
    scale: &str,
    base_pitch: u8,
    unit_beats: f64,
    tables: &MappingTables,
) -> Result<Vec<Note>, GenerateError> {
    let degrees = tables
        .scales
        .get(scale)
        .ok_or_else(|| GenerateError::InvalidScale {
            name: scale.to_string(),
            known: tables.scales.names().join(", "),
        })?;

    if tables.min_run == 0 || tables.min_run > tables.max_run {
        return Err(GenerateError::InvalidParameter(format!(
            "run window must satisfy 1 <= min_run <= max_run, got {}..{}",
            tables.min_run, tables.max_run
        )));
    }
    if !unit_beats.is_finite() || unit_beats <= 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "unit_beats must be positive, got {}",
            unit_beats
        )));
    }
    if runs.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    let mut notes = Vec::with_capacity(runs.len());
    for (position, run) in runs.iter().enumerate() {
        let run_len = clamp_run_length(run.length, tables.min_run, tables.max_run);
        let marked = is_marked(run.ch);

        let index = (run.ch as u64 + position as u64 + run_len as u64) % degrees.len() as u64;
        let degree = degrees[index as usize] as i32;

        let shift = if marked { MARKED_OCTAVE_SHIFT } else { 0 };
        let pitch = base_pitch as i32 + degree + shift;
        let velocity = if marked {
            MARKED_VELOCITY
        } else {
            UNMARKED_VELOCITY
        };

        let note = Note::new(pitch, run_len as f64 * unit_beats, velocity as i32)?;
        trace!(
            position,
            ch = %run.ch,
            run_len,
            marked,
            pitch = note.pitch(),
            "mapped run"
        );
        notes.push(note);
    }

    Ok(notes)
}

fn clamp_run_length(length: usize, min_run: u32, max_run: u32) -> u32 {
    let length = u32::try_from(length).unwrap_or(u32::MAX);
    length.clamp(min_run, max_run)
}
