// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use campus_base::{
    Config as CampusConfig, DbConfig, Error, Logging, LoggingOutput,
    LoggingRotation, config::DEFAULT_MAX_STUDENTS_PER_COURSE,
};
use serde::Deserialize;
use tracing::error;

use crate::config::Config;

const TARGET_PARAMS: &str = "Campus-Bridge-Params";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Params {
    #[serde(default)]
    campus: CampusParams,
}

impl Params {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            campus: CampusParams::from_env("CAMPUS")?,
        })
    }

    pub fn mix_config(&self, other_config: Params) -> Self {
        Self {
            campus: self.campus.mix_config(other_config.campus),
        }
    }
}

impl From<Params> for Config {
    fn from(params: Params) -> Self {
        Self {
            logging: Logging {
                output: LoggingOutput::from(
                    params.campus.logging.output.as_str(),
                ),
                file_path: params.campus.logging.file_path,
                rotation: LoggingRotation::from(
                    params.campus.logging.rotation.as_str(),
                ),
                max_size: params.campus.logging.max_size,
                max_files: params.campus.logging.max_files,
                level: params.campus.logging.level,
            },
            campus_config: CampusConfig {
                database: params.campus.database,
                max_students_per_course: params
                    .campus
                    .max_students_per_course,
            },
        }
    }
}

fn build_env_source<T>(prefix: &str) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let mut config = config::Config::builder();
    config = config.add_source(
        config::Environment::with_prefix(prefix).try_parsing(true),
    );

    let config = config.build().map_err(|e| {
        error!(TARGET_PARAMS, "Error building config: {}", e);
        Error::Bridge(format!("Error building config: {}", e))
    })?;

    config.try_deserialize().map_err(|e| {
        error!(TARGET_PARAMS, "Error try deserialize config: {}", e);
        Error::Bridge(format!("Error try deserialize config: {}", e))
    })
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct CampusParams {
    #[serde(default, deserialize_with = "DbConfig::deserialize_db")]
    database: DbConfig,
    #[serde(default = "default_max_students_per_course")]
    max_students_per_course: usize,
    #[serde(default)]
    logging: LoggingParams,
}

impl CampusParams {
    fn from_env(parent: &str) -> Result<Self, Error> {
        let campus_params: CampusParams = build_env_source(parent)?;

        Ok(Self {
            database: campus_params.database,
            max_students_per_course: campus_params.max_students_per_course,
            logging: LoggingParams::from_env(&format!("{parent}_"))?,
        })
    }

    fn mix_config(&self, other_config: CampusParams) -> Self {
        let database = if other_config.database != DbConfig::default() {
            other_config.database
        } else {
            self.database.clone()
        };

        let max_students_per_course = if other_config.max_students_per_course
            != default_max_students_per_course()
        {
            other_config.max_students_per_course
        } else {
            self.max_students_per_course
        };

        Self {
            database,
            max_students_per_course,
            logging: self.logging.mix_config(other_config.logging),
        }
    }
}

impl Default for CampusParams {
    fn default() -> Self {
        Self {
            database: DbConfig::default(),
            max_students_per_course: default_max_students_per_course(),
            logging: LoggingParams::default(),
        }
    }
}

fn default_max_students_per_course() -> usize {
    DEFAULT_MAX_STUDENTS_PER_COURSE
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct LoggingParams {
    #[serde(default = "default_log_output")]
    pub output: String, // "stdout" | "file" | "stdout,file"
    #[serde(default = "default_log_file_path")]
    pub file_path: String,
    #[serde(default = "default_log_rotation")]
    pub rotation: String, // "size" | "hourly" | "daily" | ...
    #[serde(default = "default_log_max_size")]
    pub max_size: usize, // bytes
    #[serde(default = "default_log_max_files")]
    pub max_files: usize,
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_output() -> String {
    "stdout".into()
}
fn default_log_file_path() -> String {
    "logs".into()
}
fn default_log_rotation() -> String {
    "size".into()
}
fn default_log_max_size() -> usize {
    100 * 1024 * 1024
}
fn default_log_max_files() -> usize {
    3
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingParams {
    fn default() -> Self {
        LoggingParams {
            output: default_log_output(),
            file_path: default_log_file_path(),
            rotation: default_log_rotation(),
            max_size: default_log_max_size(),
            max_files: default_log_max_files(),
            level: default_log_level(),
        }
    }
}

impl LoggingParams {
    /// Reads `CAMPUS_LOGGING_*` variables.
    fn from_env(parent: &str) -> Result<Self, Error> {
        build_env_source(&format!("{parent}LOGGING"))
    }

    /// Values of `other` win when they are not the default ones.
    fn mix_config(&self, other: LoggingParams) -> LoggingParams {
        LoggingParams {
            output: if other.output != default_log_output() {
                other.output
            } else {
                self.output.clone()
            },
            file_path: if other.file_path != default_log_file_path() {
                other.file_path
            } else {
                self.file_path.clone()
            },
            rotation: if other.rotation != default_log_rotation() {
                other.rotation
            } else {
                self.rotation.clone()
            },
            max_size: if other.max_size != default_log_max_size() {
                other.max_size
            } else {
                self.max_size
            },
            max_files: if other.max_files != default_log_max_files() {
                other.max_files
            } else {
                self.max_files
            },
            level: if other.level != default_log_level() {
                other.level
            } else {
                self.level.clone()
            },
        }
    }
}
