//! Logs go to a file, the terminal belongs to the UI.
//! Follow them with `tail -f` from another terminal.

use std::path::{Path, PathBuf};

use kotoba_config::logging::LoggingConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Install the global subscriber. Respects `RUST_LOG`, defaults to `info`.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let path = &config.file;

    let directory = match path.parent() {
        Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
        Some(dir) => dir,
        None => return Err(LoggingError::InvalidPath(path.clone())),
    };
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.clone()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directory() {
        let dir = std::env::temp_dir().join("kotoba_test_logs");
        let _ = std::fs::remove_dir_all(&dir);

        let config = LoggingConfig {
            file: dir.join("nested").join("kotoba.log"),
            json: false,
        };
        // Another test may already own the global subscriber
        let _ = init(&config);

        assert!(dir.join("nested").is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn root_is_not_a_log_file() {
        let config = LoggingConfig {
            file: PathBuf::from("/"),
            json: false,
        };
        assert!(matches!(init(&config), Err(LoggingError::InvalidPath(_))));
    }
}
