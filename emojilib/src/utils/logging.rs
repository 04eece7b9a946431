//
// emojilib - logging module
//
// Copyright 2019 Emmanouil Pitsidianakis <manos@pitsidianak.is>
//
// This file is part of emojimap.
//
// emojimap is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojimap is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojimap. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum LogLevel {
    OFF = 0,
    ERROR,
    WARN,
    #[default]
    INFO,
    DEBUG,
    TRACE,
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::OFF,
            1 => Self::ERROR,
            2 => Self::WARN,
            3 => Self::INFO,
            4 => Self::DEBUG,
            _ => Self::TRACE,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::OFF => Self::Off,
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl LogLevel {
    /// Raise the level by `verbosity` steps, saturating at [`LogLevel::TRACE`].
    pub fn increase(self, verbosity: u8) -> Self {
        Self::from((self as u8).saturating_add(verbosity))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OFF => "OFF",
                ERROR => "ERROR",
                WARN => "WARN",
                INFO => "INFO",
                DEBUG => "DEBUG",
                TRACE => "TRACE",
            }
        )
    }
}

use LogLevel::*;

/// Targets of dependencies whose logs are not ours to print.
const QUIET_TARGETS: &[&str] = &["isahc", "curl"];

/// A [`Log`] implementation that writes to standard error.
#[derive(Clone, Copy, Debug)]
pub struct StderrLogger {
    level: LogLevel,
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl StderrLogger {
    /// Create a logger and install it as the global [`log`] logger. Only the
    /// first logger created in a process is installed.
    pub fn new(level: LogLevel) -> Self {
        use std::sync::Once;

        static INIT_STDERR_LOGGING: Once = Once::new();

        let logger = Self { level };

        log::set_max_level(LevelFilter::from(level));

        INIT_STDERR_LOGGING.call_once(|| {
            _ = log::set_boxed_logger(Box::new(logger));
        });
        logger
    }

    pub fn log_level(&self) -> LogLevel {
        self.level
    }

    /// Format `record` as `<timestamp> [LEVEL]: target: message`.
    fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} [{}]: {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.metadata().target(),
            record.args()
        )?;
        writer.flush()
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        !QUIET_TARGETS
            .iter()
            .any(|t| metadata.target().starts_with(t))
            && metadata.level() <= LevelFilter::from(self.level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        _ = Self::write_record(&mut std::io::stderr().lock(), record);
    }

    fn flush(&self) {
        _ = std::io::stderr().flush();
    }
}
