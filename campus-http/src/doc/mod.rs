// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{
    server::*,
    wrappers::{Config, CourseInfo, ListQuery, LoggingConfig, StudentInfo},
};
use utoipa::OpenApi;
/// Campus HTTP
///
/// CRUD API over students and courses. Course rosters are bounded by a
/// configurable enrollment cap that is checked whenever a course is saved
/// and on demand through the validate endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus HTTP",
        description = "CRUD API over students and courses with a configurable enrollment cap per course.",
        version = "0.1.0",
        license(
            name = "AGPL-3.0-only",
            url = "https://www.gnu.org/licenses/agpl-3.0.html"
        )
    ),
    paths(
        get_courses,
        get_course,
        post_course,
        put_course,
        patch_course,
        delete_course,
        validate_course,
        get_students,
        get_student,
        post_student,
        put_student,
        patch_student,
        delete_student,
        get_config
    ),
    components(
        schemas(
            ListQuery,
            CourseInfo,
            StudentInfo,
            Config,
            LoggingConfig
        )
    ),
    tags(
        (name = "Course", description = "Endpoints for managing courses and their rosters."),
        (name = "Student", description = "Endpoints for managing students."),
        (name = "Other", description = "Service configuration."),
    )
)]
pub struct ApiDoc;
