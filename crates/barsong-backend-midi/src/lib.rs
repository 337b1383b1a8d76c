//! Barsong MIDI Backend - Deterministic Barcode Sonification
//!
//! Turns the text a barcode scanner emits into a short phrase and writes it as
//! a Standard MIDI File. The same text and config always produce the same
//! bytes.
//!
//! # Pipeline
//!
//! 1. Normalize the scan (drop CR/LF)
//! 2. Resolve parameters, hash-derived or fixed
//! 3. Collapse the text into runs of repeated characters
//! 4. Map each run to a [`Note`] through a scale
//! 5. Emit the notes as a sequential phrase or a single chord
//! 6. Serialize to SMF bytes and hash them with BLAKE3
//!
//! # Example
//!
//! ```
//! use barsong_backend_midi::sonify;
//! use barsong_spec::SonifyConfig;
//!
//! let result = sonify("||||    XX", &SonifyConfig::default()).unwrap();
//! assert_eq!(result.notes.len(), 3);
//! std::fs::write(
//!     std::env::temp_dir().join(format!("barcode.{}", result.extension)),
//!     &result.data,
//! )
//! .unwrap();
//! ```
//!
//! # Module Structure
//!
//! - [`segment`]: Run-length segmentation
//! - [`mapper`]: Scale/pitch mapping
//! - [`note`]: Note type and tick/tempo conversions
//! - [`emit`]: Timed events and emission strategies
//! - [`smf`]: Standard MIDI File writer and reader
//! - [`generate`]: Main entry point

pub mod emit;
pub mod generate;
pub mod mapper;
pub mod note;
pub mod segment;
pub mod smf;

pub use emit::{emit, EmitParams, EventKind, EventSequence, TimedEvent};
pub use generate::{resolve_parameters, sonify, GenerateError, ResolvedParameters, SonifyResult};
pub use mapper::{is_marked, map_runs, MappingTables};
pub use note::{midi_to_note_name, Note};
pub use segment::{segment_runs, Run};
pub use smf::{read_smf, write_smf};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier.
pub const BACKEND_ID: &str = "barsong-backend-midi";
