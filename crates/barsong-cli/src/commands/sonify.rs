//! Sonify command implementation
//!
//! Turns one barcode text into a MIDI file and optionally plays it.

use anyhow::{Context, Result};
use barsong_backend_midi::{sonify, SonifyResult};
use barsong_spec::BackendError;
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, SonifyOutput, SonifyReport};
use super::reporting::{print_backend_error, print_summary};
use crate::cli_args::MusicArgs;
use crate::player::Player;
use crate::settings::resolve_config;

/// Run the sonify command
///
/// # Arguments
/// * `text` - Scanned text
/// * `output` - Path of the MIDI file to write
/// * `music` - Config file and overrides
/// * `play` - Whether to play the file after writing it
/// * `soundfont` - SoundFont for playback
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 2 generation error
pub fn run(
    text: &str,
    output: &str,
    music: &MusicArgs,
    play: bool,
    soundfont: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let config = resolve_config(music)?;

    let result = match sonify(text, &config) {
        Ok(result) => result,
        Err(err) => {
            if json_output {
                let out = SonifyOutput::failure(JsonError::from_backend(&err));
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} {}", "Sonifying:".cyan().bold(), text.trim_end());
                print_backend_error(&err);
                println!("\n{} {}", "FAILED".red().bold(), err.code());
            }
            return Ok(ExitCode::from(2));
        }
    };

    write_output(&result, Path::new(output))?;

    if json_output {
        let out = SonifyOutput::success(SonifyReport::new(&result, Some(output.to_string())));
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {}", "Sonifying:".cyan().bold(), result.text);
        print_summary(&result);
        println!(
            "\n{} Wrote {} ({} bytes)",
            "SUCCESS".green().bold(),
            output,
            result.data.len()
        );
        println!("{} {}", "Hash:".dimmed(), &result.hash[..16]);
    }

    if play {
        let player = Player::locate(Path::new(soundfont))?;
        player.play(Path::new(output))?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes the file, creating parent directories as needed.
pub(crate) fn write_output(result: &SonifyResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, &result.data)
        .with_context(|| format!("Failed to write MIDI file: {}", path.display()))
}
