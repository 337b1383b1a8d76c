//! Colored terminal output shared by the commands.

use barsong_backend_midi::{GenerateError, SonifyResult};
use barsong_spec::BackendError;
use colored::Colorize;

use super::json_output::NoteReport;

/// Prints a backend error with its code.
pub(crate) fn print_backend_error(err: &GenerateError) {
    println!(
        "  {} [{}]: {}",
        "x".red(),
        err.code().red(),
        err.message()
    );
}

/// Prints the resolved parameters and phrase length.
pub(crate) fn print_summary(result: &SonifyResult) {
    let p = &result.params;
    println!(
        "{} {} ({})",
        "Parameters:".dimmed(),
        p.scale,
        p.source
    );
    println!(
        "  {} {} bpm, base {} ({}), unit {} beats, program {}, chord {} beats",
        "->".green(),
        p.bpm,
        p.base_pitch,
        barsong_backend_midi::midi_to_note_name(p.base_pitch),
        p.unit_beats,
        p.instrument,
        p.chord_duration_beats
    );
    println!(
        "{} {} runs -> {} notes, {} strategy, {:.2}s",
        "Phrase:".dimmed(),
        result.runs.len(),
        result.notes.len(),
        result.strategy,
        result.events.duration_seconds(p.bpm)
    );
}

/// Prints one line per run.
pub(crate) fn print_note_table(rows: &[NoteReport]) {
    for row in rows {
        let marker = if row.marked { "bar".bold() } else { "gap".dimmed() };
        println!(
            "  {} {:>8} x{:<3} {:>4} ({:<3}) vel {:>3} {:>6.3} beats",
            marker,
            format!("{:?}", row.ch),
            row.run_length,
            row.name,
            row.pitch,
            row.velocity,
            row.beats
        );
    }
}
