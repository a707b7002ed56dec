// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeSet;

use crate::{
    config::DbConfig,
    enrollment::EnrollmentValidator,
    error::Error,
    model::{Course, Id, NewCourse, NewStudent, Student},
    query::ListFilter,
};

pub use sqlite::SqliteStore;

mod sqlite;

/// Storage collaborator. Every write is atomic: either the whole record and
/// its join entries are committed or nothing is.
pub trait Querys {
    fn create_student(&self, student: &NewStudent) -> Result<Student, Error>;
    fn get_student(&self, id: Id) -> Result<Student, Error>;
    fn list_students(&self, filter: &ListFilter) -> Result<Vec<Student>, Error>;
    fn update_student(
        &self,
        id: Id,
        student: &NewStudent,
    ) -> Result<Student, Error>;
    /// Also drops the student from every roster.
    fn delete_student(&self, id: Id) -> Result<(), Error>;

    /// Inserts the course and its roster, then runs `validator` before
    /// committing.
    fn create_course(
        &self,
        course: &NewCourse,
        validator: &EnrollmentValidator,
    ) -> Result<Course, Error>;
    fn get_course(&self, id: Id) -> Result<Course, Error>;
    fn list_courses(&self, filter: &ListFilter) -> Result<Vec<Course>, Error>;
    /// Overwrites the name. When a roster is given it replaces the stored
    /// one and `validator` runs before committing.
    fn update_course(
        &self,
        id: Id,
        course: &NewCourse,
        validator: &EnrollmentValidator,
    ) -> Result<Course, Error>;
    /// Replaces the roster as a whole without checking the enrollment cap.
    fn set_course_students(
        &self,
        id: Id,
        students: &BTreeSet<Id>,
    ) -> Result<Course, Error>;
    /// Removes the course and its join entries, never its students.
    fn delete_course(&self, id: Id) -> Result<(), Error>;
}

pub fn open_store(config: &DbConfig) -> Result<SqliteStore, Error> {
    match config {
        DbConfig::SQLite { path } => SqliteStore::open(path),
        DbConfig::Memory => SqliteStore::open_in_memory(),
    }
}
