//! Main entry point for turning scan text into a MIDI file.
//!
//! [`sonify`] runs every stage in order: config validation, text
//! normalization, parameter resolution, run segmentation, scale mapping,
//! emission and SMF serialization. Any failure stops the pipeline before
//! bytes are produced.

use barsong_spec::{
    blake3_hash, derive_parameters, text_digest_hex, validate_config, BackendError,
    EmissionStrategy, ErrorCode, ParameterSource, SonifyConfig, SpecError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::emit::{emit, EmitParams, EventSequence};
use crate::mapper::{map_runs, MappingTables};
use crate::note::Note;
use crate::segment::{segment_runs, Run};
use crate::smf::write_smf;


/// Error type for MIDI generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Scale name not present in the scale table.
    #[error("Invalid scale '{name}' (known: {known})")]
    InvalidScale { name: String, known: String },

    /// Nothing left to play after normalization.
    #[error("Empty input: no characters to sonify")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Config failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] SpecError),

    /// IO error during writing.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Bytes could not be parsed as a Standard MIDI File.
    #[error("MIDI parse error: {0}")]
    MidiParse(String),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidScale { .. } => "MIDI_001",
            GenerateError::EmptyInput => "MIDI_002",
            GenerateError::InvalidParameter(_) => "MIDI_003",
            GenerateError::InvalidConfig(_) => "MIDI_004",
            GenerateError::IoError(_) => "MIDI_005",
            GenerateError::MidiParse(_) => "MIDI_006",
        }
    }

    fn category(&self) -> &'static str {
        "midi"
    }
}

/// Parameters a sonification actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameters {
    /// Where the musical values came from.
    pub source: ParameterSource,
    /// Scale name.
    pub scale: String,
    /// Tempo in BPM.
    pub bpm: u16,
    /// Anchor pitch.
    pub base_pitch: u8,
    /// Beats per repeated character.
    pub unit_beats: f64,
    /// Program number.
    pub instrument: u8,
    /// Chord length in beats.
    pub chord_duration_beats: f64,
    /// Hex SHA-256 of the text.
    pub digest: String,
}

impl ResolvedParameters {
    /// Playback settings for the emitters.
    pub fn emit_params(&self, config: &SonifyConfig) -> EmitParams {
        EmitParams {
            bpm: self.bpm,
            instrument: self.instrument,
            chord_duration_beats: self.chord_duration_beats,
            ticks_per_beat: config.ticks_per_beat,
            channel: config.channel,
        }
    }
}

/// Picks hash-derived or configured values for a text.
///
/// The text is hashed exactly as given; callers normalize first.
pub fn resolve_parameters(text: &str, config: &SonifyConfig) -> ResolvedParameters {
    let digest = text_digest_hex(text);
    match config.parameter_source {
        ParameterSource::Derived => {
            let derived = derive_parameters(text);
            ResolvedParameters {
                source: ParameterSource::Derived,
                scale: derived.scale,
                bpm: derived.bpm,
                base_pitch: derived.base_pitch,
                unit_beats: derived.unit_beats,
                instrument: derived.instrument,
                chord_duration_beats: derived.chord_duration_beats,
                digest,
            }
        }
        ParameterSource::Fixed => ResolvedParameters {
            source: ParameterSource::Fixed,
            scale: config.scale.clone(),
            bpm: config.bpm,
            base_pitch: config.base_pitch,
            unit_beats: config.unit_beats,
            instrument: config.instrument,
            chord_duration_beats: config.chord_duration_beats,
            digest,
        },
    }
}

/// Result of a sonification.
#[derive(Debug, Clone, Serialize)]
pub struct SonifyResult {
    /// Normalized text that was played.
    pub text: String,
    /// Parameters used.
    pub params: ResolvedParameters,
    /// Strategy used.
    pub strategy: EmissionStrategy,
    /// Runs in text order.
    pub runs: Vec<Run>,
    /// One note per run.
    pub notes: Vec<Note>,
    /// Emitted events.
    pub events: EventSequence,
    /// SMF bytes.
    #[serde(skip)]
    pub data: Vec<u8>,
    /// BLAKE3 hash of the bytes.
    pub hash: String,
    /// File extension.
    pub extension: &'static str,
}

/// Runs the whole pipeline for one scan.
///
/// # Example
/// ```
/// use barsong_backend_midi::generate::sonify;
/// use barsong_spec::SonifyConfig;
///
/// let result = sonify("XXXXJ102800309\n", &SonifyConfig::default()).unwrap();
/// assert_eq!(result.text, "XXXXJ102800309");
/// assert_eq!(&result.data[0..4], b"MThd");
/// ```
pub fn sonify(text: &str, config: &SonifyConfig) -> Result<SonifyResult, GenerateError> {
    check_config(config)?;

    let text = barsong_spec::normalize_text(text);
    if text.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    let params = resolve_parameters(&text, config);
    debug!(
        source = ?params.source,
        scale = %params.scale,
        bpm = params.bpm,
        base_pitch = params.base_pitch,
        "resolved parameters"
    );

    let runs = segment_runs(&text);
    debug!(chars = text.chars().count(), runs = runs.len(), "segmented text");

    let tables = MappingTables::from_config(config);
    let notes = map_runs(
        &runs,
        &params.scale,
        params.base_pitch,
        params.unit_beats,
        &tables,
    )?;

    let events = emit(config.strategy, &notes, &params.emit_params(config))?;
    let data = write_smf(&events)?;
    let hash = blake3_hash(&data);

    debug!(strategy = %config.strategy, bytes = data.len(), hash = %hash, "sonified");

    Ok(SonifyResult {
        text,
        params,
        strategy: config.strategy,
        runs,
        notes,
        events,
        data,
        hash,
        extension: "mid",
    })
}

/// Validates a config, surfacing an unknown scale as `InvalidScale`.
fn check_config(config: &SonifyConfig) -> Result<(), GenerateError> {
    let result = validate_config(config);
    if result.has_code(ErrorCode::UnknownScale) {
        return Err(GenerateError::InvalidScale {
            name: config.scale.clone(),
            known: config.scale_table().names().join(", "),
        });
    }
    result.into_result()?;
    Ok(())
}
