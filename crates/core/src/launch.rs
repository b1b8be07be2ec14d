//! Launch-command generation and batch file output.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::catalog::{mission_letter, GameId};

/// Name of the batch file written on final confirmation.
pub const BATCH_FILE_NAME: &str = "GO.BAT";

/// Error raised when the batch file cannot be written.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The batch file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target path of the attempted write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A fully confirmed launch selection, ready to be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCommand {
    game: GameId,
    system: usize,
    mission: usize,
}

impl LaunchCommand {
    /// Build a command from zero-based catalog indices.
    pub fn new(game: GameId, system: usize, mission: usize) -> Self {
        Self { game, system, mission }
    }

    /// The game this command launches.
    pub fn game(&self) -> GameId {
        self.game
    }

    /// The single command line the batch file will contain.
    ///
    /// System numbers are 1-based and missions use letter designations,
    /// matching what the game's own launcher scripts expect.
    pub fn line(&self) -> String {
        format!(
            "loadfix -32 play-{} {} {}",
            self.game.launch_tag(),
            self.system + 1,
            mission_letter(self.mission)
        )
    }
}

/// Result of a successful batch file write.
#[derive(Debug, Clone)]
pub struct WrittenBatch {
    /// Absolute or relative path of the file that was written.
    pub path: PathBuf,
    /// File name without extension, i.e. what the user types to run it.
    pub invocation: String,
}

impl WrittenBatch {
    /// Farewell message printed after the terminal is restored.
    pub fn message(&self) -> String {
        format!(
            "Batch file written to {}\nType {} to play...",
            BATCH_FILE_NAME, self.invocation
        )
    }
}

/// Writes launch commands to a batch file in a fixed directory.
pub struct BatchWriter {
    dir: PathBuf,
}

impl BatchWriter {
    /// Create a writer that targets `dir/GO.BAT`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the next write will target.
    pub fn target(&self) -> PathBuf {
        self.dir.join(BATCH_FILE_NAME)
    }

    /// Truncate-write the command line to the batch file.
    pub fn write(&self, command: &LaunchCommand) -> Result<WrittenBatch, LaunchError> {
        let path = self.target();
        let line = command.line();
        fs::write(&path, &line).map_err(|source| LaunchError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), %line, "batch file written");

        let invocation = invocation_name(&path);
        Ok(WrittenBatch { path, invocation })
    }
}

fn invocation_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| BATCH_FILE_NAME.to_string())
}
