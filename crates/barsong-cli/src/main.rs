//! Barsong CLI - Turn barcode scans into MIDI phrases
//!
//! This binary provides commands for sonifying a single scan, inspecting the
//! derived parameters and note mapping, listing scales, and listening to a
//! scanner on stdin.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use barsong_cli::cli_args::{Cli, Commands};
use barsong_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Sonify {
            text,
            output,
            music,
            play,
            soundfont,
            json,
        } => commands::sonify::run(&text, &output, &music, play, &soundfont, json),
        Commands::Params { text, json } => commands::params::run(&text, json),
        Commands::Inspect { text, music, json } => commands::inspect::run(&text, &music, json),
        Commands::Scales { config, json } => commands::scales::run(config.as_deref(), json),
        Commands::Listen {
            out_dir,
            log,
            music,
            play,
            soundfont,
        } => commands::listen::run(&out_dir, log.as_deref(), &music, play, &soundfont),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
