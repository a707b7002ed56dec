// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Campus base
//!
//! Students, courses, the join relation between them and the enrollment
//! cap rule.

pub mod api;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod helpers;
pub mod model;
pub mod query;

pub use api::Api;
pub use config::{Config, DbConfig, Logging, LoggingOutput, LoggingRotation};
pub use enrollment::EnrollmentValidator;
pub use error::Error;
pub use helpers::db::{Querys, SqliteStore};
pub use model::{
    Course, CoursePatch, CourseRequest, Id, NewCourse, NewStudent, Student,
    StudentPatch, StudentRequest,
};
pub use query::ListFilter;
