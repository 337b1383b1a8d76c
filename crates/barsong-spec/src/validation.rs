//! Config validation.
//!
//! Checks value ranges before any mapping runs. Fixed-mode musical fields
//! are only checked when the config actually uses them; derived values are
//! in range by construction. Fixed durations must span at least one tick.

use crate::config::{ParameterSource, SonifyConfig};
use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::scale::check_degrees;

/// Slowest tempo whose microseconds-per-beat fits in 24 bits.
pub const MIN_BPM: u16 = 4;

/// Largest SMF metrical division (15 bits).
pub const MAX_TICKS_PER_BEAT: u16 = 0x7FFF;

/// Validates a config, collecting every problem found.
///
/// # Example
/// ```
/// use barsong_spec::config::SonifyConfig;
/// use barsong_spec::validation::validate_config;
///
/// assert!(validate_config(&SonifyConfig::default()).is_ok());
/// ```
pub fn validate_config(config: &SonifyConfig) -> ValidationResult {
    let mut result = ValidationResult::success();

    for (name, degrees) in config.scales.iter() {
        if name.trim().is_empty() {
            result.add_error(ValidationError::new(
                ErrorCode::EmptyScaleName,
                "scale name cannot be empty",
            ));
            continue;
        }
        if let Err(message) = check_degrees(degrees) {
            result.add_error(ValidationError::with_path(
                ErrorCode::MalformedScale,
                message,
                format!("scales.{}", name),
            ));
        }
    }

    if config.min_run == 0 || config.min_run > config.max_run {
        result.add_error(ValidationError::new(
            ErrorCode::InvalidRunWindow,
            format!(
                "run window must satisfy 1 <= min_run <= max_run, got {}..{}",
                config.min_run, config.max_run
            ),
        ));
    }

    if config.ticks_per_beat == 0 || config.ticks_per_beat > MAX_TICKS_PER_BEAT {
        result.add_error(ValidationError::with_path(
            ErrorCode::TicksPerBeatOutOfRange,
            format!(
                "ticks_per_beat must be 1-{}, got {}",
                MAX_TICKS_PER_BEAT, config.ticks_per_beat
            ),
            "ticks_per_beat",
        ));
    }

    if config.channel > 15 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ChannelOutOfRange,
            format!("channel must be 0-15, got {}", config.channel),
            "channel",
        ));
    }

    if config.parameter_source == ParameterSource::Fixed {
        validate_fixed_parameters(config, &mut result);
    }

    result
}

fn validate_fixed_parameters(config: &SonifyConfig, result: &mut ValidationResult) {
    if !config.scale_table().contains(&config.scale) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnknownScale,
            format!("unknown scale '{}'", config.scale),
            "scale",
        ));
    }

    if config.base_pitch > 127 {
        result.add_error(ValidationError::with_path(
            ErrorCode::BasePitchOutOfRange,
            format!("base_pitch must be 0-127, got {}", config.base_pitch),
            "base_pitch",
        ));
    }

    if !is_positive_finite(config.unit_beats) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidUnitBeats,
            format!("unit_beats must be positive, got {}", config.unit_beats),
            "unit_beats",
        ));
    } else if is_sub_tick(config.unit_beats, config.ticks_per_beat) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidUnitBeats,
            format!(
                "unit_beats {} is shorter than one tick at {} ticks per beat",
                config.unit_beats, config.ticks_per_beat
            ),
            "unit_beats",
        ));
    }

    if !is_positive_finite(config.chord_duration_beats) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidChordDuration,
            format!(
                "chord_duration_beats must be positive, got {}",
                config.chord_duration_beats
            ),
            "chord_duration_beats",
        ));
    } else if is_sub_tick(config.chord_duration_beats, config.ticks_per_beat) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidChordDuration,
            format!(
                "chord_duration_beats {} is shorter than one tick at {} ticks per beat",
                config.chord_duration_beats, config.ticks_per_beat
            ),
            "chord_duration_beats",
        ));
    }

    if config.bpm < MIN_BPM {
        result.add_error(ValidationError::with_path(
            ErrorCode::TempoOutOfRange,
            format!("bpm must be at least {}, got {}", MIN_BPM, config.bpm),
            "bpm",
        ));
    }

    if config.instrument > 127 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InstrumentOutOfRange,
            format!("instrument must be 0-127, got {}", config.instrument),
            "instrument",
        ));
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// An out-of-range resolution is reported on its own.
fn is_sub_tick(beats: f64, ticks_per_beat: u16) -> bool {
    ticks_per_beat > 0 && beats * (ticks_per_beat as f64) < 1.0
}
