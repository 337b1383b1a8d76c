//! Barsong End-to-End Test Infrastructure
//!
//! Shared helpers for the workspace-level tests:
//!
//! - [`determinism`]: byte-identical output across repeated runs
//! - [`fixtures`]: scan texts with known derived parameters
//! - [`midi_read`]: parse produced SMF bytes back into notes with midly
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p barsong-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod midi_read;

pub use determinism::{verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{ScanFixture, SCAN_FIXTURES};
pub use midi_read::{parse_phrase, ParsedNote, ParsedPhrase};
