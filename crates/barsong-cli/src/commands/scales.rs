//! Scales command implementation

use anyhow::{Context, Result};
use barsong_spec::{ScaleTable, SonifyConfig, DERIVED_SCALE_NAMES};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

/// Run the scales command
///
/// Lists the built-in scales plus any extra scales from `config_path`.
pub fn run(config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let table = load_table(config_path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Scales:".cyan().bold());
    for (name, degrees) in table.iter() {
        let tag = if DERIVED_SCALE_NAMES.contains(&name) {
            "(derivable)".dimmed()
        } else {
            "".dimmed()
        };
        println!("  {} {:<12} {:?} {}", "->".green(), name, degrees, tag);
    }
    Ok(ExitCode::SUCCESS)
}

fn load_table(config_path: Option<&str>) -> Result<ScaleTable> {
    let config = match config_path {
        Some(path) => SonifyConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => SonifyConfig::default(),
    };
    Ok(config.scale_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_table() {
        let table = load_table(None).unwrap();
        assert_eq!(table.names(), vec!["major", "minor", "pentatonic"]);
    }

    #[test]
    fn test_config_scales_included() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"scales": {"dorian": [0, 2, 3, 5, 7, 9, 10]}}"#).unwrap();

        let table = load_table(Some(&path.to_string_lossy())).unwrap();
        assert_eq!(table.get("dorian"), Some(&[0u8, 2, 3, 5, 7, 9, 10][..]));
        assert_eq!(table.len(), 4);
    }
}
