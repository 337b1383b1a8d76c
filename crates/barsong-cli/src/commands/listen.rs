//! Listen command implementation
//!
//! Keyboard-wedge scanners type the code followed by Enter, so each stdin
//! line is one scan. Every scan becomes `barcode_code_<unix-seconds>.mid` in
//! the output directory, is optionally played, and is appended to the scan
//! log. Bad scans are reported and skipped; EOF ends the loop.

use anyhow::{Context, Result};
use barsong_backend_midi::sonify;
use barsong_spec::{normalize_text, BackendError, SonifyConfig};
use colored::Colorize;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use super::reporting::print_backend_error;
use super::sonify::write_output;
use crate::cli_args::MusicArgs;
use crate::player::Player;
use crate::scan_log::{append_record, ScanRecord};
use crate::settings::resolve_config;

/// Where listen puts its files.
#[derive(Debug, Clone)]
pub struct ListenOptions {
    /// Directory for MIDI files.
    pub out_dir: PathBuf,
    /// Optional JSON scan log.
    pub log: Option<PathBuf>,
}

/// Counts for one listen session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenStats {
    /// Scans turned into files.
    pub written: usize,
    /// Empty or failing scans.
    pub skipped: usize,
}

/// Run the listen command
///
/// # Returns
/// Exit code: 0 after EOF
pub fn run(
    out_dir: &str,
    log: Option<&str>,
    music: &MusicArgs,
    play: bool,
    soundfont: &str,
) -> Result<ExitCode> {
    let config = resolve_config(music)?;
    let options = ListenOptions {
        out_dir: PathBuf::from(out_dir),
        log: log.map(PathBuf::from),
    };

    let player = if play {
        match Player::locate(Path::new(soundfont)) {
            Ok(player) => Some(player),
            Err(e) => {
                println!("{} {:#}; playback disabled", "WARNING".yellow().bold(), e);
                None
            }
        }
    } else {
        None
    };

    println!(
        "{} {} (Ctrl-D to stop)",
        "Listening for scans, writing to".cyan().bold(),
        options.out_dir.display()
    );

    let stdin = std::io::stdin();
    let stats = listen_loop(stdin.lock(), &config, &options, player.as_ref(), unix_seconds)?;

    println!(
        "\n{} {} written, {} skipped",
        "DONE".green().bold(),
        stats.written,
        stats.skipped
    );
    Ok(ExitCode::SUCCESS)
}

/// Processes scans from `reader` until EOF.
///
/// `clock` supplies the timestamp used in file names and log records.
pub fn listen_loop<R: BufRead>(
    mut reader: R,
    config: &SonifyConfig,
    options: &ListenOptions,
    player: Option<&Player>,
    mut clock: impl FnMut() -> u64,
) -> Result<ListenStats> {
    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.out_dir.display()
        )
    })?;

    let mut stats = ListenStats::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .context("Failed to read scan input")?;
        if read == 0 {
            break;
        }

        let text = normalize_text(&barsong_spec::decode_scan_bytes(&line));
        if text.is_empty() {
            println!("  {} empty scan, skipped", "!".yellow());
            stats.skipped += 1;
            continue;
        }
        println!("{} {}", "Scanned:".cyan().bold(), text);

        let result = match sonify(&text, config) {
            Ok(result) => result,
            Err(err) => {
                print_backend_error(&err);
                debug!(code = err.code(), "scan skipped");
                stats.skipped += 1;
                continue;
            }
        };

        let time = clock();
        let path = unique_output_path(&options.out_dir, time);
        write_output(&result, &path)?;
        println!("  {} {}", "+".green(), path.display());

        if let Some(log) = &options.log {
            append_record(
                log,
                ScanRecord {
                    barcode: result.text.clone(),
                    time,
                    output: path.to_string_lossy().into_owned(),
                    hash: result.hash.clone(),
                },
            )?;
        }

        if let Some(player) = player {
            if let Err(e) = player.play(&path) {
                warn!(error = %e, "playback failed");
                println!("  {} playback failed: {:#}", "!".yellow(), e);
            }
        }

        stats.written += 1;
    }

    Ok(stats)
}

/// `barcode_code_<time>.mid`, with a counter suffix if that name is taken.
fn unique_output_path(dir: &Path, time: u64) -> PathBuf {
    let first = dir.join(format!("barcode_code_{}.mid", time));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| dir.join(format!("barcode_code_{}_{}.mid", time, n)))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_log::read_log;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn options(dir: &Path, log: bool) -> ListenOptions {
        ListenOptions {
            out_dir: dir.join("out"),
            log: log.then(|| dir.join("result.json")),
        }
    }

    #[test]
    fn test_each_line_becomes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), true);
        let input = Cursor::new(b"XXXXJ102800309\r\nTest Barcode\n".to_vec());

        let mut t = 1_700_000_000u64;
        let stats = listen_loop(input, &SonifyConfig::default(), &opts, None, || {
            t += 1;
            t
        })
        .unwrap();

        assert_eq!(stats, ListenStats { written: 2, skipped: 0 });
        assert!(opts.out_dir.join("barcode_code_1700000001.mid").exists());
        assert!(opts.out_dir.join("barcode_code_1700000002.mid").exists());

        let log = read_log(&dir.path().join("result.json")).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].barcode, "XXXXJ102800309");
        assert_eq!(log[1].barcode, "Test Barcode");
        assert_eq!(log[1].time, 1_700_000_002);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), false);
        let input = Cursor::new(b"\n\r\nABC".to_vec());

        let stats = listen_loop(input, &SonifyConfig::default(), &opts, None, || 42).unwrap();
        assert_eq!(stats, ListenStats { written: 1, skipped: 2 });
        assert!(opts.out_dir.join("barcode_code_42.mid").exists());
    }

    #[test]
    fn test_same_second_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), false);
        let input = Cursor::new(b"ABC\nDEF\n".to_vec());

        listen_loop(input, &SonifyConfig::default(), &opts, None, || 7).unwrap();
        assert!(opts.out_dir.join("barcode_code_7.mid").exists());
        assert!(opts.out_dir.join("barcode_code_7_1.mid").exists());
    }

    #[test]
    fn test_failing_scan_does_not_stop_loop() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), false);
        let mut config = SonifyConfig::fixed();
        config.scale = "dorian".to_string();
        let input = Cursor::new(b"ABC\n".to_vec());

        let stats = listen_loop(input, &config, &opts, None, || 1).unwrap();
        assert_eq!(stats, ListenStats { written: 0, skipped: 1 });
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), true);
        let input = Cursor::new(b"AB\xffC\n".to_vec());

        listen_loop(input, &SonifyConfig::default(), &opts, None, || 5).unwrap();
        let log = read_log(&dir.path().join("result.json")).unwrap();
        assert_eq!(log[0].barcode, "ABC");
    }
}
