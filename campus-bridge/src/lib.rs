// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::BTreeSet, future::Future, sync::Arc};

pub use campus_base::{
    Api as CampusApi, Config as CampusConfig, Course, CoursePatch,
    CourseRequest, DbConfig, Error, Id, ListFilter, Logging, LoggingOutput,
    LoggingRotation, Student, StudentPatch, StudentRequest,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

pub mod config;
pub mod settings;
pub use clap;

use crate::config::Config;

const TARGET_BRIDGE: &str = "Campus-Bridge";

#[derive(Clone)]
pub struct Bridge {
    api: Arc<CampusApi>,
    settings: Config,
    cancellation: CancellationToken,
}

impl Bridge {
    pub async fn build(
        settings: Config,
        token: Option<CancellationToken>,
    ) -> Result<Self, Error> {
        let api = CampusApi::new(&settings.campus_config)?;

        let token = if let Some(token) = token {
            token
        } else {
            CancellationToken::new()
        };

        Self::bind_with_shutdown(token.clone(), tokio::signal::ctrl_c());
        info!(TARGET_BRIDGE, "Campus bridge ready");

        Ok(Self {
            api: Arc::new(api),
            settings,
            cancellation: token,
        })
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn settings(&self) -> &Config {
        &self.settings
    }

    fn bind_with_shutdown(
        token: CancellationToken,
        shutdown_signal: impl Future + Send + 'static,
    ) {
        let cancellation_token = token.clone();
        tokio::spawn(async move {
            shutdown_signal.await;
            cancellation_token.cancel();
        });
    }

    /// Path identifiers that are not integers cannot name a record.
    fn parse_id(id: &str, kind: &str) -> Result<Id, Error> {
        id.parse::<Id>()
            .map_err(|_| Error::NotFound(format!("{} {} not found", kind, id)))
    }

    /// Runs a store call on the blocking pool, off the async workers.
    async fn blocking<T, F>(&self, call: F) -> Result<T, Error>
    where
        F: FnOnce(&CampusApi) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || call(&api))
            .await
            .map_err(|e| {
                Error::Bridge(format!("Store task did not finish: {}", e))
            })?
    }

    pub async fn get_courses(
        &self,
        filter: ListFilter,
    ) -> Result<Vec<Course>, Error> {
        self.blocking(move |api| api.list_courses(&filter)).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, Error> {
        let id = Self::parse_id(course_id, "Course")?;
        self.blocking(move |api| api.get_course(id)).await
    }

    pub async fn post_course(
        &self,
        request: CourseRequest,
    ) -> Result<Course, Error> {
        self.blocking(move |api| api.create_course(request)).await
    }

    pub async fn put_course(
        &self,
        course_id: &str,
        request: CourseRequest,
    ) -> Result<Course, Error> {
        let id = Self::parse_id(course_id, "Course")?;
        self.blocking(move |api| api.update_course(id, request)).await
    }

    pub async fn patch_course(
        &self,
        course_id: &str,
        patch: CoursePatch,
    ) -> Result<Course, Error> {
        let id = Self::parse_id(course_id, "Course")?;
        self.blocking(move |api| api.patch_course(id, patch)).await
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(course_id, "Course")?;
        self.blocking(move |api| api.delete_course(id)).await
    }

    pub async fn set_course_students(
        &self,
        course_id: &str,
        students: Vec<Id>,
    ) -> Result<Course, Error> {
        let id = Self::parse_id(course_id, "Course")?;
        let students: BTreeSet<Id> = students.into_iter().collect();
        self.blocking(move |api| api.set_course_students(id, &students))
            .await
    }

    pub async fn validate_course(&self, course_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(course_id, "Course")?;
        self.blocking(move |api| api.validate_course(id)).await
    }

    pub async fn get_students(
        &self,
        filter: ListFilter,
    ) -> Result<Vec<Student>, Error> {
        self.blocking(move |api| api.list_students(&filter)).await
    }

    pub async fn get_student(&self, student_id: &str) -> Result<Student, Error> {
        let id = Self::parse_id(student_id, "Student")?;
        self.blocking(move |api| api.get_student(id)).await
    }

    pub async fn post_student(
        &self,
        request: StudentRequest,
    ) -> Result<Student, Error> {
        self.blocking(move |api| api.create_student(request)).await
    }

    pub async fn put_student(
        &self,
        student_id: &str,
        request: StudentRequest,
    ) -> Result<Student, Error> {
        let id = Self::parse_id(student_id, "Student")?;
        self.blocking(move |api| api.update_student(id, request)).await
    }

    pub async fn patch_student(
        &self,
        student_id: &str,
        patch: StudentPatch,
    ) -> Result<Student, Error> {
        let id = Self::parse_id(student_id, "Student")?;
        self.blocking(move |api| api.patch_student(id, patch)).await
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(student_id, "Student")?;
        self.blocking(move |api| api.delete_student(id)).await
    }
}
