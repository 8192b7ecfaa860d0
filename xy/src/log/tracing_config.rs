// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};
use tracing_core::LevelFilter;

/// Default file used by [`WriterArg::File`] when no path is given.
pub const DEFAULT_LOG_FILE_PATH: &str = "xy_calc_log.txt";

/// Where log output goes. Parsed from `stdout`, `stderr`, `file`, or `none`, which is
/// how `xy_calc --log-writer` takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum WriterArg {
    Stdout,
    #[default]
    Stderr,
    File,
    None,
}

/// Configure the tracing logging to suit your needs.
///
/// Fields:
/// - `level`: [`tracing::Level`] to log at.
/// - `writer`: [`WriterArg`] to choose where to write the logs.
/// - `log_file_path`: used only when `writer` is [`WriterArg::File`].
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: tracing::Level,
    pub writer: WriterArg,
    pub log_file_path: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            writer: WriterArg::default(),
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(level: tracing::Level, writer: WriterArg) -> Self {
        Self {
            level,
            writer,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn new_file(level: tracing::Level, log_file_path: impl Into<String>) -> Self {
        Self {
            level,
            writer: WriterArg::File,
            log_file_path: log_file_path.into(),
        }
    }

    /// Builds a config from the text form of a level and a writer, eg: `("debug",
    /// "stderr")`.
    ///
    /// # Errors
    ///
    /// Fails if either string doesn't parse.
    pub fn try_from_args(level: &str, writer: &str) -> miette::Result<Self> {
        let level = tracing::Level::from_str(level)
            .map_err(|_| miette::miette!("Unknown log level: {level}"))?;
        let writer = WriterArg::from_str(writer)
            .map_err(|_| miette::miette!("Unknown log writer: {writer}"))?;
        Ok(Self::new_display(level, writer))
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
