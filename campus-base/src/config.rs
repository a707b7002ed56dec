// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Configuration module

use std::fmt::Display;

use serde::{Deserialize, Deserializer};

/// Enrollment cap used when nothing is configured.
pub const DEFAULT_MAX_STUDENTS_PER_COURSE: usize = 20;

/// Backend configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Database configuration.
    pub database: DbConfig,
    /// Maximum number of students a course may hold when it is validated.
    pub max_students_per_course: usize,
}

impl Config {
    /// Creates a new `Config` backed by an SQLite file.
    pub fn new(path: &str) -> Self {
        Self {
            database: DbConfig::SQLite {
                path: path.to_owned(),
            },
            max_students_per_course: DEFAULT_MAX_STUDENTS_PER_COURSE,
        }
    }

    /// Configuration for a throwaway in-memory database.
    pub fn memory() -> Self {
        Self {
            database: DbConfig::Memory,
            max_students_per_course: DEFAULT_MAX_STUDENTS_PER_COURSE,
        }
    }

    pub fn with_max_students_per_course(mut self, max: usize) -> Self {
        self.max_students_per_course = max;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("campus.db")
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub enum DbConfig {
    /// SQLite database.
    SQLite {
        /// Path to the database.
        path: String,
    },
    /// SQLite database living only in memory.
    Memory,
}

impl DbConfig {
    /// Accepts either a path or the literal `memory`.
    pub fn deserialize_db<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = String::deserialize(deserializer)?;
        Ok(DbConfig::from(value.as_str()))
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::SQLite {
            path: "campus.db".to_owned(),
        }
    }
}

impl From<&str> for DbConfig {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == "memory" || value == ":memory:" {
            DbConfig::Memory
        } else {
            DbConfig::SQLite {
                path: value.to_owned(),
            }
        }
    }
}

impl Display for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbConfig::SQLite { path } => write!(f, "SQLite: {}", path),
            DbConfig::Memory => write!(f, "SQLite: memory"),
        }
    }
}

/// Where log events are written.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct LoggingOutput {
    pub stdout: bool,
    pub file: bool,
}

impl Default for LoggingOutput {
    fn default() -> Self {
        Self {
            stdout: true,
            file: false,
        }
    }
}

impl From<&str> for LoggingOutput {
    /// Comma separated list, e.g. `stdout,file`.
    fn from(value: &str) -> Self {
        let mut output = LoggingOutput {
            stdout: false,
            file: false,
        };
        for part in value.split(',').map(str::trim) {
            match part.to_lowercase().as_str() {
                "stdout" => output.stdout = true,
                "file" => output.file = true,
                _ => {}
            }
        }
        output
    }
}

/// When the log file is rotated.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub enum LoggingRotation {
    #[default]
    Size,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl From<&str> for LoggingRotation {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "hourly" => LoggingRotation::Hourly,
            "daily" => LoggingRotation::Daily,
            "weekly" => LoggingRotation::Weekly,
            "monthly" => LoggingRotation::Monthly,
            "yearly" => LoggingRotation::Yearly,
            "never" => LoggingRotation::Never,
            _ => LoggingRotation::Size,
        }
    }
}

impl Display for LoggingRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LoggingRotation::Size => "size",
            LoggingRotation::Hourly => "hourly",
            LoggingRotation::Daily => "daily",
            LoggingRotation::Weekly => "weekly",
            LoggingRotation::Monthly => "monthly",
            LoggingRotation::Yearly => "yearly",
            LoggingRotation::Never => "never",
        };
        write!(f, "{}", name)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Logging {
    pub output: LoggingOutput,
    /// Directory holding `campus.log`.
    pub file_path: String,
    pub rotation: LoggingRotation,
    /// Bytes, only used with `LoggingRotation::Size`.
    pub max_size: usize,
    pub max_files: usize,
    pub level: String,
}

impl Logging {
    pub fn logs(&self) -> bool {
        self.output.stdout || self.output.file
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            output: LoggingOutput::default(),
            file_path: "logs".to_owned(),
            rotation: LoggingRotation::default(),
            max_size: 100 * 1024 * 1024,
            max_files: 3,
            level: "info".to_owned(),
        }
    }
}
