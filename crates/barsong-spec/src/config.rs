//! Sonification configuration.
//!
//! A `SonifyConfig` is plain data: it can be built in code, loaded from a
//! JSON file, or both (load, then override single fields). Nothing here
//! holds process-wide state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::scale::ScaleTable;

/// Default scale name for fixed parameters.
pub const DEFAULT_SCALE: &str = "minor";
/// Default anchor pitch (C3).
pub const DEFAULT_BASE_PITCH: u8 = 48;
/// Default beats per repeated character.
pub const DEFAULT_UNIT_BEATS: f64 = 0.25;
/// Default tempo.
pub const DEFAULT_BPM: u16 = 120;
/// Default program (acoustic grand piano).
pub const DEFAULT_INSTRUMENT: u8 = 0;
/// Default chord length in beats for fixed parameters.
pub const DEFAULT_CHORD_DURATION_BEATS: f64 = 2.0;
/// Default shortest run length after clamping.
pub const DEFAULT_MIN_RUN: u32 = 1;
/// Default longest run length after clamping.
pub const DEFAULT_MAX_RUN: u32 = 12;
/// Default SMF time resolution.
pub const DEFAULT_TICKS_PER_BEAT: u16 = 480;

/// Where scale, tempo, pitch, unit, instrument and chord length come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// Derived from the SHA-256 digest of the scanned text.
    #[default]
    Derived,
    /// Taken verbatim from the config.
    Fixed,
}

impl ParameterSource {
    /// Returns the lowercase name of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterSource::Derived => "derived",
            ParameterSource::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How notes become timed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmissionStrategy {
    /// Notes back to back, one after another.
    Sequential,
    /// All distinct pitches at once for the chord duration.
    #[default]
    Chord,
}

impl EmissionStrategy {
    /// Returns the lowercase name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionStrategy::Sequential => "sequential",
            EmissionStrategy::Chord => "chord",
        }
    }
}

impl std::fmt::Display for EmissionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmissionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(EmissionStrategy::Sequential),
            "chord" => Ok(EmissionStrategy::Chord),
            other => Err(format!(
                "unknown strategy '{}', expected 'sequential' or 'chord'",
                other
            )),
        }
    }
}

/// Full configuration for one sonification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SonifyConfig {
    /// Derived or fixed musical parameters.
    pub parameter_source: ParameterSource,
    /// Scale name (fixed mode).
    pub scale: String,
    /// Anchor pitch (fixed mode).
    pub base_pitch: u8,
    /// Beats per repeated character (fixed mode).
    pub unit_beats: f64,
    /// Tempo (fixed mode).
    pub bpm: u16,
    /// Program number (fixed mode).
    pub instrument: u8,
    /// Chord length in beats (fixed mode).
    pub chord_duration_beats: f64,
    /// Shortest run length after clamping.
    pub min_run: u32,
    /// Longest run length after clamping.
    pub max_run: u32,
    /// SMF time resolution.
    pub ticks_per_beat: u16,
    /// MIDI channel, 0-15.
    pub channel: u8,
    /// Emission strategy.
    pub strategy: EmissionStrategy,
    /// Extra scales merged over the built-in table.
    #[serde(skip_serializing_if = "ScaleTable::is_empty")]
    pub scales: ScaleTable,
}

impl Default for SonifyConfig {
    fn default() -> Self {
        Self {
            parameter_source: ParameterSource::default(),
            scale: DEFAULT_SCALE.to_string(),
            base_pitch: DEFAULT_BASE_PITCH,
            unit_beats: DEFAULT_UNIT_BEATS,
            bpm: DEFAULT_BPM,
            instrument: DEFAULT_INSTRUMENT,
            chord_duration_beats: DEFAULT_CHORD_DURATION_BEATS,
            min_run: DEFAULT_MIN_RUN,
            max_run: DEFAULT_MAX_RUN,
            ticks_per_beat: DEFAULT_TICKS_PER_BEAT,
            channel: 0,
            strategy: EmissionStrategy::default(),
            scales: ScaleTable::empty(),
        }
    }
}

impl SonifyConfig {
    /// A config with fixed parameters and default values.
    pub fn fixed() -> Self {
        Self {
            parameter_source: ParameterSource::Fixed,
            ..Self::default()
        }
    }

    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the config as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The built-in scales with this config's extra scales merged over them.
    pub fn scale_table(&self) -> ScaleTable {
        ScaleTable::builtin().merged_with(&self.scales)
    }
}
