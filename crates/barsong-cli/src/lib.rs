//! Barsong CLI library.
//!
//! Argument definitions, config resolution, playback, the scan log and the
//! command implementations behind the `barsong` binary.

pub mod cli_args;
pub mod commands;
pub mod logging;
pub mod player;
pub mod scan_log;
pub mod settings;
