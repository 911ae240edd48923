//! On-disk diagnostics for picker hosts.
//!
//! # Invariants
//! - At most one file logger runs per process.
//! - A second init succeeds only with the level and directory already active.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "placepicker";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEEP_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Reasons file logging could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeDir(String),
    /// A logger with a different configuration is already running.
    AlreadyActive { level: &'static str, dir: PathBuf },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeDir(dir) => {
                write!(f, "log directory must be an absolute path, got `{dir}`")
            }
            Self::AlreadyActive { level, dir } => write!(
                f,
                "logging already active at `{}` with level `{level}`",
                dir.display()
            ),
            Self::Backend(reason) => write!(f, "failed to start file logger: {reason}"),
        }
    }
}

impl Error for LoggingError {}

/// Starts rotating file logs at `level` inside the absolute `log_dir`.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let dir = PathBuf::from(log_dir.trim());
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeDir(log_dir.trim().to_string()));
    }

    let active = ACTIVE.get_or_try_init(|| start(level, &dir))?;
    if active.level == level && active.dir == dir {
        Ok(())
    } else {
        Err(LoggingError::AlreadyActive {
            level: active.level,
            dir: active.dir.clone(),
        })
    }
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn parse_level(raw: &str) -> Result<&'static str, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(LoggingError::UnsupportedLevel(raw.trim().to_string())),
    }
}

fn start(level: &'static str, dir: &Path) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(dir).map_err(backend)?;

    let handle = Logger::try_with_str(level)
        .map_err(backend)?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(backend)?;

    info!(
        "event=logging_init module=core status=ok level={} version={} platform={}",
        level,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );
    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn backend(err: impl Display) -> LoggingError {
    LoggingError::Backend(err.to_string())
}
