//! Stderr logging for existsync.
//!
//! The library itself only emits `log` records (one `debug!` per probe and
//! per followed link). [`Logger`] is the backend the CLI installs to surface
//! them; its [`LogLevel`] comes from flags or `EXISTSYNC_LOG_MODE`.

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "EXISTSYNC_LOG_MODE";

/// How much the logger lets through, from least to most.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records, including each symlink hop.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive: `quiet`, `normal` or `verbose`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl LogLevel {
    /// The most verbose `log` level admitted at this setting.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A `log` backend writing `LEVEL: message` lines to stderr.
///
/// ```
/// use existsync::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// assert_eq!(logger.max_level(), log::LevelFilter::Debug);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The most verbose `log` level this logger lets through.
    #[must_use]
    pub const fn max_level(&self) -> log::LevelFilter {
        self.level.filter()
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn write_record<W: Write>(&self, out: &mut W, record: &log::Record<'_>) -> io::Result<()> {
        if !log::Log::enabled(self, record.metadata()) {
            return Ok(());
        }
        let prefix = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN",
            log::Level::Info => "INFO",
            log::Level::Debug | log::Level::Trace => "DEBUG",
        };
        writeln!(out, "{prefix}: {}", record.args())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        // Nowhere left to report a failed stderr write.
        let _ = self.write_record(&mut io::stderr().lock(), record);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Picks the log level: CLI flags first, then `EXISTSYNC_LOG_MODE`, then
/// [`LogLevel::Normal`]. `verbose` wins when both flags are set; an
/// unrecognised environment value is ignored.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    Logger::new(level)
}
