use std::fs::File;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::SnakeError;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "ascii-snake.log";

/// Routes the `log` macros to `path`.
///
/// Stdout belongs to the renderer while a round is running, so log records go
/// to a file.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), SnakeError> {
    let file = File::create(path).map_err(|source| SnakeError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(())
}
