//! Inspect command implementation
//!
//! Shows how a text segments into runs and which note each run becomes,
//! without writing a file.

use anyhow::Result;
use barsong_backend_midi::sonify;
use barsong_spec::BackendError;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{JsonError, NoteReport, SonifyOutput, SonifyReport};
use super::reporting::{print_backend_error, print_note_table, print_summary};
use crate::cli_args::MusicArgs;
use crate::settings::resolve_config;

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 success, 2 generation error
pub fn run(text: &str, music: &MusicArgs, json_output: bool) -> Result<ExitCode> {
    let config = resolve_config(music)?;
    let outcome = sonify(text, &config);

    if json_output {
        let (out, code) = match outcome {
            Ok(result) => (
                SonifyOutput::success(SonifyReport::new(&result, None)),
                ExitCode::SUCCESS,
            ),
            Err(err) => (
                SonifyOutput::failure(JsonError::from_backend(&err)),
                ExitCode::from(2),
            ),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(code);
    }

    println!("{} {:?}", "Inspecting:".cyan().bold(), text.trim_end_matches(['\r', '\n']));
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            print_backend_error(&err);
            println!("\n{} {}", "FAILED".red().bold(), err.code());
            return Ok(ExitCode::from(2));
        }
    };

    print_summary(&result);
    println!("\n{}", "Runs:".bold());
    print_note_table(&NoteReport::collect(&result.runs, &result.notes));
    println!(
        "\n{} {} events, {} ticks at {} tpb",
        "Events:".dimmed(),
        result.events.events.len(),
        result.events.duration_ticks(),
        result.events.ticks_per_beat
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspect_ok() {
        assert_eq!(
            run("||||    XX", &MusicArgs::default(), false).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            run("||||    XX", &MusicArgs::default(), true).unwrap(),
            ExitCode::SUCCESS
        );
    }

    #[test]
    fn test_inspect_empty() {
        assert_eq!(
            run("", &MusicArgs::default(), true).unwrap(),
            ExitCode::from(2)
        );
    }
}
