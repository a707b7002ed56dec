// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! API module
//!
//! Entry point used by the outer layers. Turns request bodies into
//! validated records and forwards them to the store.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::{
    config::Config,
    enrollment::EnrollmentValidator,
    error::Error,
    helpers::db::{Querys, open_store},
    model::{
        Course, CoursePatch, CourseRequest, Id, NewCourse, NewStudent,
        Student, StudentPatch, StudentRequest,
    },
    query::ListFilter,
};

const TARGET_API: &str = "Campus-Api";

pub struct Api {
    store: Box<dyn Querys + Send + Sync>,
    validator: EnrollmentValidator,
}

impl Api {
    /// Opens the configured database.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let store = open_store(&config.database)?;
        info!(
            TARGET_API,
            "Database {} ready, at most {} students per course",
            config.database,
            config.max_students_per_course
        );
        Ok(Self::with_store(Box::new(store), EnrollmentValidator::from(config)))
    }

    pub fn with_store(
        store: Box<dyn Querys + Send + Sync>,
        validator: EnrollmentValidator,
    ) -> Self {
        Self { store, validator }
    }

    pub fn create_student(
        &self,
        request: StudentRequest,
    ) -> Result<Student, Error> {
        let student = NewStudent::try_from(request)?;
        self.store.create_student(&student)
    }

    pub fn get_student(&self, id: Id) -> Result<Student, Error> {
        self.store.get_student(id)
    }

    pub fn list_students(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<Student>, Error> {
        self.store.list_students(filter)
    }

    pub fn update_student(
        &self,
        id: Id,
        request: StudentRequest,
    ) -> Result<Student, Error> {
        let student = NewStudent::try_from(request)?;
        self.store.update_student(id, &student)
    }

    pub fn patch_student(
        &self,
        id: Id,
        patch: StudentPatch,
    ) -> Result<Student, Error> {
        let mut student = self.store.get_student(id)?;
        student.patch(patch)?;
        self.store.update_student(id, &NewStudent::from(student))
    }

    pub fn delete_student(&self, id: Id) -> Result<(), Error> {
        self.store.delete_student(id)?;
        info!(TARGET_API, "Student {} deleted", id);
        Ok(())
    }

    pub fn create_course(&self, request: CourseRequest) -> Result<Course, Error> {
        let course = NewCourse::try_from(request)?;
        self.store
            .create_course(&course, &self.validator)
            .inspect_err(|e| warn!(TARGET_API, "Course not created: {}", e))
    }

    pub fn get_course(&self, id: Id) -> Result<Course, Error> {
        self.store.get_course(id)
    }

    pub fn list_courses(&self, filter: &ListFilter) -> Result<Vec<Course>, Error> {
        self.store.list_courses(filter)
    }

    pub fn update_course(
        &self,
        id: Id,
        request: CourseRequest,
    ) -> Result<Course, Error> {
        let course = NewCourse::try_from(request)?;
        self.store
            .update_course(id, &course, &self.validator)
            .inspect_err(|e| warn!(TARGET_API, "Course {} not updated: {}", id, e))
    }

    pub fn patch_course(
        &self,
        id: Id,
        patch: CoursePatch,
    ) -> Result<Course, Error> {
        let stored = self.store.get_course(id)?;
        let course = NewCourse::from_patch(&stored, patch)?;
        self.store
            .update_course(id, &course, &self.validator)
            .inspect_err(|e| warn!(TARGET_API, "Course {} not updated: {}", id, e))
    }

    /// Replaces a roster without looking at the enrollment cap. Use
    /// [`Api::validate_course`] to check the result.
    pub fn set_course_students(
        &self,
        id: Id,
        students: &BTreeSet<Id>,
    ) -> Result<Course, Error> {
        self.store.set_course_students(id, students)
    }

    /// Checks the stored roster of a course against the enrollment cap.
    pub fn validate_course(&self, id: Id) -> Result<(), Error> {
        let course = self.store.get_course(id)?;
        self.validator.validate(&course)
    }

    pub fn delete_course(&self, id: Id) -> Result<(), Error> {
        self.store.delete_course(id)?;
        info!(TARGET_API, "Course {} deleted", id);
        Ok(())
    }
}
