//! Hash-derived musical parameters.
//!
//! Every parameter is read from one byte of the SHA-256 digest of the input
//! text. The byte positions, the reductions and the lookup lists below are
//! the reproducibility contract: the same text yields the same tuple in any
//! implementation that follows them.

use serde::{Deserialize, Serialize};

use crate::hash::text_digest;
use crate::scale::DERIVED_SCALE_NAMES;

/// Instrument programs selectable by derivation (`digest[4] % 6`).
pub const DERIVED_INSTRUMENTS: [u8; 6] = [81, 100, 104, 84, 85, 86];

/// Unit durations selectable by derivation (`digest[3] % 4`).
pub const DERIVED_UNIT_BEATS: [f64; 4] = [0.125, 0.25, 0.375, 0.5];

/// Lowest derived tempo.
pub const DERIVED_BPM_MIN: u16 = 70;
/// Number of derived tempo steps (70..=190).
pub const DERIVED_BPM_SPAN: u8 = 121;
/// Lowest derived base pitch.
pub const DERIVED_BASE_PITCH_MIN: u8 = 36;
/// Number of derived base pitch steps (36..=60).
pub const DERIVED_BASE_PITCH_SPAN: u8 = 25;

/// Musical parameters derived from a text digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    /// Scale name, one of [`DERIVED_SCALE_NAMES`].
    pub scale: String,
    /// Tempo in beats per minute, 70-190.
    pub bpm: u16,
    /// Anchor pitch, 36-60.
    pub base_pitch: u8,
    /// Beats per repeated character, one of [`DERIVED_UNIT_BEATS`].
    pub unit_beats: f64,
    /// Program number, one of [`DERIVED_INSTRUMENTS`].
    pub instrument: u8,
    /// Chord length in beats, 1.0-5.0 in half-beat steps.
    pub chord_duration_beats: f64,
}

/// Derives the parameter tuple for a text.
///
/// Total over all inputs: the empty string has a well-defined digest too.
///
/// # Example
/// ```
/// use barsong_spec::params::derive_parameters;
///
/// let params = derive_parameters("ABC");
/// assert_eq!(params, derive_parameters("ABC"));
/// assert_eq!(params.scale, "minor");
/// ```
pub fn derive_parameters(text: &str) -> DerivedParameters {
    derive_from_digest(&text_digest(text))
}

/// Derives the parameter tuple from an already computed digest.
pub fn derive_from_digest(h: &[u8; 32]) -> DerivedParameters {
    let scale = DERIVED_SCALE_NAMES[h[0] as usize % DERIVED_SCALE_NAMES.len()];
    let bpm = DERIVED_BPM_MIN + (h[1] % DERIVED_BPM_SPAN) as u16;
    let base_pitch = DERIVED_BASE_PITCH_MIN + h[2] % DERIVED_BASE_PITCH_SPAN;
    let unit_beats = DERIVED_UNIT_BEATS[h[3] as usize % DERIVED_UNIT_BEATS.len()];
    let instrument = DERIVED_INSTRUMENTS[h[4] as usize % DERIVED_INSTRUMENTS.len()];
    let chord_duration_beats = 1.0 + (h[5] % 8) as f64 * 0.5;

    DerivedParameters {
        scale: scale.to_string(),
        bpm,
        base_pitch,
        unit_beats,
        instrument,
        chord_duration_beats,
    }
}
