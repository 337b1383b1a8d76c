//! Playback through an external fluidsynth process.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// SoundFont used when none is given.
pub const DEFAULT_SOUNDFONT: &str = "/usr/share/sounds/sf2/FluidR3_GM.sf2";

/// Synthesizer executable name.
pub const FLUIDSYNTH: &str = "fluidsynth";

/// A located synthesizer plus the SoundFont it renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    program: PathBuf,
    soundfont: PathBuf,
}

impl Player {
    /// Finds fluidsynth on `PATH`.
    pub fn locate(soundfont: &Path) -> Result<Self> {
        let program = which::which(FLUIDSYNTH)
            .with_context(|| format!("{} not found in PATH", FLUIDSYNTH))?;
        debug!(program = %program.display(), "found synthesizer");
        Ok(Self::new(program, soundfont))
    }

    /// Uses an explicit synthesizer path.
    pub fn new(program: impl Into<PathBuf>, soundfont: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            soundfont: soundfont.into(),
        }
    }

    /// Path of the synthesizer executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Builds the command that renders `midi` to the ALSA output.
    pub fn command(&self, midi: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-ni", "-a", "alsa", "-g", "1.0"])
            .arg(&self.soundfont)
            .arg(midi)
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Plays a file and waits until it finishes.
    pub fn play(&self, midi: &Path) -> Result<()> {
        debug!(file = %midi.display(), "playing");
        let status = self
            .command(midi)
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;
        if !status.success() {
            bail!("{} exited with status: {}", self.program.display(), status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    #[test]
    fn test_command_arguments() {
        let player = Player::new("/usr/bin/fluidsynth", DEFAULT_SOUNDFONT);
        let cmd = player.command(Path::new("barcode.mid"));

        assert_eq!(cmd.get_program(), OsStr::new("/usr/bin/fluidsynth"));
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("-ni"),
                OsStr::new("-a"),
                OsStr::new("alsa"),
                OsStr::new("-g"),
                OsStr::new("1.0"),
                OsStr::new(DEFAULT_SOUNDFONT),
                OsStr::new("barcode.mid"),
            ]
        );
    }

    #[test]
    fn test_failed_program_is_an_error() {
        let player = Player::new("/nonexistent/fluidsynth", DEFAULT_SOUNDFONT);
        assert!(player.play(Path::new("barcode.mid")).is_err());
    }
}
