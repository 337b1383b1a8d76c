//! Params command implementation
//!
//! Prints the musical parameters derived from a text's SHA-256 digest.

use anyhow::Result;
use barsong_spec::{derive_parameters, normalize_text, text_digest_hex};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::ParamsOutput;

/// Run the params command
///
/// # Returns
/// Exit code: 0 success
pub fn run(text: &str, json_output: bool) -> Result<ExitCode> {
    let output = params_output(text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    let p = &output.params;
    println!("{} {:?}", "Input:".cyan().bold(), output.input);
    println!("{} {}", "SHA-256:".dimmed(), output.digest);
    println!("  {:<16} {}", "scale", p.scale);
    println!("  {:<16} {}", "bpm", p.bpm);
    println!(
        "  {:<16} {} ({})",
        "base_pitch",
        p.base_pitch,
        barsong_backend_midi::midi_to_note_name(p.base_pitch)
    );
    println!("  {:<16} {}", "unit_beats", p.unit_beats);
    println!("  {:<16} {}", "instrument", p.instrument);
    println!("  {:<16} {}", "chord_duration", p.chord_duration_beats);

    Ok(ExitCode::SUCCESS)
}

fn params_output(text: &str) -> ParamsOutput {
    let input = normalize_text(text);
    ParamsOutput {
        digest: text_digest_hex(&input),
        params: derive_parameters(&input),
        input,
    }
}
