use anyhow::Context;
use flexi_logger::{FileSpec, LogSpecification, Logger, LoggerHandle};
use log::Level;
use std::fmt;
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

/// Without a log file, only problems are written, and only to stderr
const CONSOLE_LOG_LEVEL: &str = "warn";

/// A sink for the human-readable messages a calendar view emits while it
/// initializes and renders
pub(crate) trait Recorder {
    fn record(&mut self, level: Level, message: &str);
}

/// Forwards recorded messages to the `log` facade
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct LogRecorder;

impl Recorder for LogRecorder {
    fn record(&mut self, level: Level, message: &str) {
        log::log!(level, "{message}");
    }
}

/// Keeps every recorded message in memory
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryRecorder(pub(crate) Vec<(Level, String)>);

#[cfg(test)]
impl MemoryRecorder {
    pub(crate) fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|(_, msg)| msg.as_str()).collect()
    }

    pub(crate) fn errors(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Recorder for MemoryRecorder {
    fn record(&mut self, level: Level, message: &str) {
        self.0.push((level, message.to_owned()));
    }
}

/// An installed logger.  Logging stops when this is dropped.
pub(crate) struct Logging {
    handle: LoggerHandle,
    console: bool,
}

impl Logging {
    /// Run `func` with logging to stderr switched off, so that records do not
    /// scribble over a full-screen terminal.  Logging to a file carries on.
    pub(crate) fn quiet_console<F, T>(&mut self, func: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.console {
            return func();
        }
        self.handle.push_temp_spec(LogSpecification::off());
        let r = func();
        self.handle.pop_temp_spec();
        r
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logging")
            .field("console", &self.console)
            .finish_non_exhaustive()
    }
}

/// Start writing log records to `log_file`, or to stderr if there is none.
/// The level is taken from `RUST_LOG` if set.
pub(crate) fn init_logger(log_file: Option<&Path>) -> anyhow::Result<Logging> {
    let (logger, console) = match log_file {
        Some(path) => {
            let spec = FileSpec::try_from(path)
                .with_context(|| format!("invalid log file path {}", path.display()))?;
            let logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
                .context("failed to parse log level")?
                .log_to_file(spec);
            (logger, false)
        }
        None => {
            let logger = Logger::try_with_env_or_str(CONSOLE_LOG_LEVEL)
                .context("failed to parse log level")?
                .log_to_stderr();
            (logger, true)
        }
    };
    let handle = logger.start().context("failed to start logger")?;
    Ok(Logging { handle, console })
}
