// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use campus_bridge::{
    Course as CourseBridge, ListFilter, Logging as LoggingBridge,
    Student as StudentBridge, config::Config as ConfigBridge,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query string of the list endpoints, mirrored from [`ListFilter`] so the
/// schema can be documented. Any other parameter is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ListQuery {
    /// Exact identifier.
    id: Option<i64>,
    /// Exact name.
    name: Option<String>,
}

impl From<ListQuery> for ListFilter {
    fn from(value: ListQuery) -> Self {
        let ListQuery { id, name } = value;
        Self { id, name }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseInfo {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

impl From<CourseBridge> for CourseInfo {
    fn from(value: CourseBridge) -> Self {
        Self {
            id: value.id,
            name: value.name,
            students: value.students.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentInfo {
    pub id: i64,
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
}

impl From<StudentBridge> for StudentInfo {
    fn from(value: StudentBridge) -> Self {
        Self {
            id: value.id,
            name: value.name,
            birth_date: value.birth_date.map(|date| date.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Config {
    pub database: String,
    pub max_students_per_course: usize,
    pub logging: LoggingConfig,
}

impl From<ConfigBridge> for Config {
    fn from(value: ConfigBridge) -> Self {
        Self {
            database: value.campus_config.database.to_string(),
            max_students_per_course: value
                .campus_config
                .max_students_per_course,
            logging: LoggingConfig::from(value.logging),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoggingConfig {
    pub stdout: bool,
    pub file: bool,
    pub file_path: String,
    pub rotation: String,
    pub max_size: usize,
    pub max_files: usize,
    pub level: String,
}

impl From<LoggingBridge> for LoggingConfig {
    fn from(value: LoggingBridge) -> Self {
        Self {
            stdout: value.output.stdout,
            file: value.output.file,
            file_path: value.file_path,
            rotation: value.rotation.to_string(),
            max_size: value.max_size,
            max_files: value.max_files,
            level: value.level,
        }
    }
}
