//! Config loading and command-line overrides.

use anyhow::{Context, Result};
use barsong_spec::{ParameterSource, SonifyConfig};
use std::path::Path;
use tracing::debug;

use crate::cli_args::MusicArgs;

/// Builds the config for a command: file (or defaults), then flags.
pub fn resolve_config(args: &MusicArgs) -> Result<SonifyConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => SonifyConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => SonifyConfig::default(),
    };
    apply_overrides(&mut config, args);
    debug!(
        source = ?config.parameter_source,
        strategy = %config.strategy,
        "resolved config"
    );
    Ok(config)
}

/// Applies every flag the user passed on top of `config`.
pub fn apply_overrides(config: &mut SonifyConfig, args: &MusicArgs) {
    if args.fixed || has_musical_override(args) {
        config.parameter_source = ParameterSource::Fixed;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(ref scale) = args.scale {
        config.scale = scale.clone();
    }
    if let Some(base_pitch) = args.base_pitch {
        config.base_pitch = base_pitch;
    }
    if let Some(unit_beats) = args.unit_beats {
        config.unit_beats = unit_beats;
    }
    if let Some(bpm) = args.bpm {
        config.bpm = bpm;
    }
    if let Some(instrument) = args.instrument {
        config.instrument = instrument;
    }
    if let Some(chord) = args.chord_duration {
        config.chord_duration_beats = chord;
    }
    if let Some(tpb) = args.ticks_per_beat {
        config.ticks_per_beat = tpb;
    }
    if let Some(channel) = args.channel {
        config.channel = channel;
    }
    if let Some(min_run) = args.min_run {
        config.min_run = min_run;
    }
    if let Some(max_run) = args.max_run {
        config.max_run = max_run;
    }
}

fn has_musical_override(args: &MusicArgs) -> bool {
    args.scale.is_some()
        || args.base_pitch.is_some()
        || args.unit_beats.is_some()
        || args.bpm.is_some()
        || args.instrument.is_some()
        || args.chord_duration.is_some()
}
