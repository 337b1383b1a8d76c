//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `sonify`, `params`, `inspect` and `scales`.

use barsong_backend_midi::{is_marked, GenerateError, Note, ResolvedParameters, Run, SonifyResult};
use barsong_spec::{BackendError, DerivedParameters};
use serde::Serialize;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "MIDI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Wraps a backend error.
    pub fn from_backend(err: &GenerateError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
        }
    }
}

/// One run and the note it became.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NoteReport {
    /// Repeated character.
    pub ch: char,
    /// Run length before clamping.
    pub run_length: usize,
    /// MIDI pitch.
    pub pitch: u8,
    /// Pitch name, e.g. "D#4".
    pub name: String,
    /// Velocity.
    pub velocity: u8,
    /// Length in beats.
    pub beats: f64,
    /// Whether the character counts as a bar.
    pub marked: bool,
}

impl NoteReport {
    /// Pairs runs with their notes.
    pub fn collect(runs: &[Run], notes: &[Note]) -> Vec<Self> {
        runs.iter()
            .zip(notes)
            .map(|(run, note)| NoteReport {
                ch: run.ch,
                run_length: run.length,
                pitch: note.pitch(),
                name: note.name(),
                velocity: note.velocity(),
                beats: note.duration_beats(),
                marked: is_marked(run.ch),
            })
            .collect()
    }
}

/// Summary of a sonification.
#[derive(Debug, Clone, Serialize)]
pub struct SonifyReport {
    /// Normalized text.
    pub input: String,
    /// Written file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// BLAKE3 hash of the file bytes.
    pub hash: String,
    /// File size.
    pub bytes: usize,
    /// Strategy used.
    pub strategy: String,
    /// Parameters used.
    pub params: ResolvedParameters,
    /// Per-run detail.
    pub notes: Vec<NoteReport>,
    /// Length in ticks.
    pub duration_ticks: u64,
    /// Length in seconds.
    pub duration_seconds: f64,
}

impl SonifyReport {
    /// Builds a report from a pipeline result.
    pub fn new(result: &SonifyResult, output: Option<String>) -> Self {
        Self {
            input: result.text.clone(),
            output,
            hash: result.hash.clone(),
            bytes: result.data.len(),
            strategy: result.strategy.to_string(),
            params: result.params.clone(),
            notes: NoteReport::collect(&result.runs, &result.notes),
            duration_ticks: result.events.duration_ticks(),
            duration_seconds: result.events.duration_seconds(result.params.bpm),
        }
    }
}

/// Top-level `--json` output of `sonify` and `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct SonifyOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Errors, empty on success.
    pub errors: Vec<JsonError>,
    /// Result, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SonifyReport>,
}

impl SonifyOutput {
    /// Successful output.
    pub fn success(report: SonifyReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(report),
        }
    }

    /// Failed output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }
}

/// `--json` output of `params`.
#[derive(Debug, Clone, Serialize)]
pub struct ParamsOutput {
    /// Normalized text.
    pub input: String,
    /// Hex SHA-256 digest.
    pub digest: String,
    /// Derived parameters.
    pub params: DerivedParameters,
}
