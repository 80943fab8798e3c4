use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the process boundary: terminal I/O and logger setup.
///
/// Game-ending conditions are not errors; they live in
/// [`GameStatus`](crate::game::GameStatus).
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal I/O failed")]
    Terminal(#[from] io::Error),
    #[error("failed to create log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
}
