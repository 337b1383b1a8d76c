//! CLI argument definitions for the barsong command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use barsong_spec::EmissionStrategy;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::player::DEFAULT_SOUNDFONT;

/// Barsong - Barcode Scans to MIDI
#[derive(Parser, Debug)]
#[command(name = "barsong")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn one barcode text into a MIDI file
    Sonify {
        /// Scanned text
        text: String,

        /// Output MIDI file path
        #[arg(short, long, default_value = "barcode.mid")]
        output: String,

        #[command(flatten)]
        music: MusicArgs,

        /// Play the file with fluidsynth after writing it
        #[arg(long)]
        play: bool,

        /// SoundFont used for playback
        #[arg(long, default_value = DEFAULT_SOUNDFONT)]
        soundfont: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the parameters derived from a text's SHA-256 digest
    Params {
        /// Scanned text
        text: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the runs and notes a text maps to, without writing a file
    Inspect {
        /// Scanned text
        text: String,

        #[command(flatten)]
        music: MusicArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the available scales
    Scales {
        /// Config file whose extra scales are included
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Read scans from stdin, one per line, and sonify each
    Listen {
        /// Directory for generated MIDI files
        #[arg(long, default_value = ".")]
        out_dir: String,

        /// JSON file that every scan is appended to
        #[arg(long)]
        log: Option<String>,

        #[command(flatten)]
        music: MusicArgs,

        /// Play each file with fluidsynth
        #[arg(long)]
        play: bool,

        /// SoundFont used for playback
        #[arg(long, default_value = DEFAULT_SOUNDFONT)]
        soundfont: String,
    },
}

/// Options that shape the generated music.
///
/// Any explicit musical value (scale, pitch, unit, tempo, instrument, chord
/// length) switches the config to fixed parameters.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct MusicArgs {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use configured values instead of hash-derived ones
    #[arg(long)]
    pub fixed: bool,

    /// Emission strategy (chord, sequential)
    #[arg(long)]
    pub strategy: Option<EmissionStrategy>,

    /// Scale name
    #[arg(long)]
    pub scale: Option<String>,

    /// Anchor MIDI pitch
    #[arg(long)]
    pub base_pitch: Option<u8>,

    /// Beats per repeated character
    #[arg(long)]
    pub unit_beats: Option<f64>,

    /// Tempo in beats per minute
    #[arg(long)]
    pub bpm: Option<u16>,

    /// General MIDI program number
    #[arg(long)]
    pub instrument: Option<u8>,

    /// Chord length in beats
    #[arg(long)]
    pub chord_duration: Option<f64>,

    /// SMF resolution
    #[arg(long)]
    pub ticks_per_beat: Option<u16>,

    /// MIDI channel (0-15)
    #[arg(long)]
    pub channel: Option<u8>,

    /// Shortest run length after clamping
    #[arg(long)]
    pub min_run: Option<u32>,

    /// Longest run length after clamping
    #[arg(long)]
    pub max_run: Option<u32>,
}
