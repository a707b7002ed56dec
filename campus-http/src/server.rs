// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use crate::{
    enviroment::build_doc,
    error::Error,
    wrappers::{Config as ConfigCampusHttp, CourseInfo, ListQuery, StudentInfo},
};
use axum::{
    Extension, Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use campus_bridge::{
    Bridge, CoursePatch, CourseRequest, ListFilter, StudentPatch,
    StudentRequest,
};
use tower::ServiceBuilder;

use crate::doc::ApiDoc;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Courses
///
/// Lists courses. `id` and `name` narrow the result to exact matches; when
/// both are given a course must satisfy both.
#[utoipa::path(
    get,
    path = "/courses/",
    operation_id = "Courses",
    tag = "Course",
    params(
        ("parameters" = ListQuery, Query, description = "The query parameters for the request"),
    ),
    responses(
        (status = 200, description = "Courses successfully retrieved", body = [CourseInfo],
        example = json!(
            [
                {
                    "id": 1,
                    "name": "Test Course",
                    "students": [1, 2]
                }
            ]
        )),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn get_courses(
    Extension(bridge): Extension<Arc<Bridge>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<CourseInfo>>, Error> {
    let Query(parameters) = query?;
    let courses = bridge.get_courses(ListFilter::from(parameters)).await?;
    Ok(Json(courses.into_iter().map(CourseInfo::from).collect()))
}

/// Course
///
/// Obtains a course by its identifier.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/",
    operation_id = "Course",
    tag = "Course",
    params(
        ("course_id" = String, Path, description = "Course unique id"),
    ),
    responses(
        (status = 200, description = "Course successfully retrieved", body = CourseInfo),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn get_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseInfo>, Error> {
    let course = bridge.get_course(&course_id).await?;
    Ok(Json(CourseInfo::from(course)))
}

/// Create Course
///
/// Creates a course. `students` is an optional list of existing student
/// ids; the enrollment cap is checked before the course is stored.
#[utoipa::path(
    post,
    path = "/courses/",
    operation_id = "Create Course",
    tag = "Course",
    request_body(content = String, content_type = "application/json", description = "Course name and optional student ids",
        example = json!({ "name": "New Course", "students": [1, 2] })),
    responses(
        (status = 201, description = "Course created", body = CourseInfo),
        (status = 400, description = "Missing fields, unknown students or too many students"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn post_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseInfo>), Error> {
    let Json(request) = body?;
    let course = bridge.post_course(request).await?;
    Ok((StatusCode::CREATED, Json(CourseInfo::from(course))))
}

/// Update Course
///
/// Replaces the name of a course and, when `students` is given, its roster.
#[utoipa::path(
    put,
    path = "/courses/{course_id}/",
    operation_id = "Update Course",
    tag = "Course",
    params(
        ("course_id" = String, Path, description = "Course unique id"),
    ),
    request_body(content = String, content_type = "application/json", description = "Full replacement of the course",
        example = json!({ "name": "Updated Course" })),
    responses(
        (status = 200, description = "Course updated", body = CourseInfo),
        (status = 400, description = "Missing fields, unknown students or too many students"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn put_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(course_id): Path<String>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<CourseInfo>, Error> {
    let Json(request) = body?;
    let course = bridge.put_course(&course_id, request).await?;
    Ok(Json(CourseInfo::from(course)))
}

/// Patch Course
///
/// Changes only the given fields of a course.
#[utoipa::path(
    patch,
    path = "/courses/{course_id}/",
    operation_id = "Patch Course",
    tag = "Course",
    params(
        ("course_id" = String, Path, description = "Course unique id"),
    ),
    request_body(content = String, content_type = "application/json", description = "Fields to change",
        example = json!({ "students": [3] })),
    responses(
        (status = 200, description = "Course updated", body = CourseInfo),
        (status = 400, description = "Invalid fields, unknown students or too many students"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn patch_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(course_id): Path<String>,
    body: Result<Json<CoursePatch>, JsonRejection>,
) -> Result<Json<CourseInfo>, Error> {
    let Json(patch) = body?;
    let course = bridge.patch_course(&course_id, patch).await?;
    Ok(Json(CourseInfo::from(course)))
}

/// Delete Course
///
/// Deletes a course. Its students are kept.
#[utoipa::path(
    delete,
    path = "/courses/{course_id}/",
    operation_id = "Delete Course",
    tag = "Course",
    params(
        ("course_id" = String, Path, description = "Course unique id"),
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn delete_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, Error> {
    bridge.delete_course(&course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Validate Course
///
/// Checks the stored roster of a course against the enrollment cap.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/validate/",
    operation_id = "Validate Course",
    tag = "Course",
    params(
        ("course_id" = String, Path, description = "Course unique id"),
    ),
    responses(
        (status = 204, description = "The roster respects the enrollment cap"),
        (status = 400, description = "Too many students", body = String,
        example = json!(
            "Validation error: Cannot enroll more than 20 students in a course"
        )),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn validate_course(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, Error> {
    bridge.validate_course(&course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Students
///
/// Lists students, optionally narrowed by exact `id` and `name`.
#[utoipa::path(
    get,
    path = "/students/",
    operation_id = "Students",
    tag = "Student",
    params(
        ("parameters" = ListQuery, Query, description = "The query parameters for the request"),
    ),
    responses(
        (status = 200, description = "Students successfully retrieved", body = [StudentInfo],
        example = json!(
            [
                {
                    "id": 1,
                    "name": "Ana",
                    "birth_date": "2002-05-14"
                }
            ]
        )),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn get_students(
    Extension(bridge): Extension<Arc<Bridge>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<StudentInfo>>, Error> {
    let Query(parameters) = query?;
    let students = bridge.get_students(ListFilter::from(parameters)).await?;
    Ok(Json(students.into_iter().map(StudentInfo::from).collect()))
}

/// Student
///
/// Obtains a student by its identifier.
#[utoipa::path(
    get,
    path = "/students/{student_id}/",
    operation_id = "Student",
    tag = "Student",
    params(
        ("student_id" = String, Path, description = "Student unique id"),
    ),
    responses(
        (status = 200, description = "Student successfully retrieved", body = StudentInfo),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn get_student(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentInfo>, Error> {
    let student = bridge.get_student(&student_id).await?;
    Ok(Json(StudentInfo::from(student)))
}

/// Create Student
#[utoipa::path(
    post,
    path = "/students/",
    operation_id = "Create Student",
    tag = "Student",
    request_body(content = String, content_type = "application/json", description = "Student name and optional birth date",
        example = json!({ "name": "Ana", "birth_date": "2002-05-14" })),
    responses(
        (status = 201, description = "Student created", body = StudentInfo),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn post_student(
    Extension(bridge): Extension<Arc<Bridge>>,
    body: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentInfo>), Error> {
    let Json(request) = body?;
    let student = bridge.post_student(request).await?;
    Ok((StatusCode::CREATED, Json(StudentInfo::from(student))))
}

/// Update Student
#[utoipa::path(
    put,
    path = "/students/{student_id}/",
    operation_id = "Update Student",
    tag = "Student",
    params(
        ("student_id" = String, Path, description = "Student unique id"),
    ),
    request_body(content = String, content_type = "application/json", description = "Full replacement of the student",
        example = json!({ "name": "Ana Maria", "birth_date": null })),
    responses(
        (status = 200, description = "Student updated", body = StudentInfo),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn put_student(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(student_id): Path<String>,
    body: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<Json<StudentInfo>, Error> {
    let Json(request) = body?;
    let student = bridge.put_student(&student_id, request).await?;
    Ok(Json(StudentInfo::from(student)))
}

/// Patch Student
#[utoipa::path(
    patch,
    path = "/students/{student_id}/",
    operation_id = "Patch Student",
    tag = "Student",
    params(
        ("student_id" = String, Path, description = "Student unique id"),
    ),
    request_body(content = String, content_type = "application/json", description = "Fields to change",
        example = json!({ "birth_date": "2002-05-15" })),
    responses(
        (status = 200, description = "Student updated", body = StudentInfo),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn patch_student(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(student_id): Path<String>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> Result<Json<StudentInfo>, Error> {
    let Json(patch) = body?;
    let student = bridge.patch_student(&student_id, patch).await?;
    Ok(Json(StudentInfo::from(student)))
}

/// Delete Student
///
/// Deletes a student and removes it from every course roster.
#[utoipa::path(
    delete,
    path = "/students/{student_id}/",
    operation_id = "Delete Student",
    tag = "Student",
    params(
        ("student_id" = String, Path, description = "Student unique id"),
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal Server Error"),
    )
)]
async fn delete_student(
    Extension(bridge): Extension<Arc<Bridge>>,
    Path(student_id): Path<String>,
) -> Result<StatusCode, Error> {
    bridge.delete_student(&student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Config
///
/// Active configuration of the service.
#[utoipa::path(
    get,
    path = "/config",
    operation_id = "Config",
    tag = "Other",
    responses(
        (status = 200, description = "Obtain the service configuration", body = ConfigCampusHttp,
        example = json!(
            {
                "database": "SQLite: campus.db",
                "max_students_per_course": 20,
                "logging": {
                    "stdout": true,
                    "file": false,
                    "file_path": "logs",
                    "rotation": "size",
                    "max_size": 104857600,
                    "max_files": 3,
                    "level": "info"
                }
            }
        )),
    )
)]
async fn get_config(
    Extension(bridge): Extension<Arc<Bridge>>,
) -> Json<ConfigCampusHttp> {
    Json(ConfigCampusHttp::from(bridge.settings().clone()))
}

pub fn build_routes(bridge: Bridge) -> Router {
    let bridge = Arc::new(bridge);
    let routes = Router::new()
        .route("/courses/", get(get_courses).post(post_course))
        .route(
            "/courses/{course_id}/",
            get(get_course)
                .put(put_course)
                .patch(patch_course)
                .delete(delete_course),
        )
        .route("/courses/{course_id}/validate/", get(validate_course))
        .route("/students/", get(get_students).post(post_student))
        .route(
            "/students/{student_id}/",
            get(get_student)
                .put(put_student)
                .patch(patch_student)
                .delete(delete_student),
        )
        .route("/config", get(get_config))
        .layer(ServiceBuilder::new().layer(Extension(bridge)));

    if build_doc() {
        Router::new().merge(routes).merge(
            RapiDoc::with_openapi("/doc/campusapi.json", ApiDoc::openapi())
                .path("/doc"),
        )
    } else {
        Router::new().merge(routes)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, header},
    };
    use campus_bridge::{CampusConfig, Logging, config::Config};
    use serde_json::{Value, json};
    use test_log::test;
    use tower::ServiceExt;

    use super::*;

    async fn build_app(max_students: usize) -> Router {
        let settings = Config {
            campus_config: CampusConfig::memory()
                .with_max_students_per_course(max_students),
            logging: Logging::default(),
        };
        build_routes(Bridge::build(settings, None).await.unwrap())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_course(app: &Router, body: Value) -> Value {
        let (status, course) =
            send(app, Method::POST, "/courses/", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        course
    }

    async fn create_students(app: &Router, quantity: usize) -> Vec<i64> {
        let mut ids = vec![];
        for i in 0..quantity {
            let (status, student) = send(
                app,
                Method::POST,
                "/students/",
                Some(json!({ "name": format!("Student {}", i) })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            ids.push(student["id"].as_i64().unwrap());
        }
        ids
    }

    #[test(tokio::test)]
    async fn test_retrieve_course() {
        let app = build_app(20).await;
        let course = create_course(&app, json!({ "name": "Course" })).await;
        let id = course["id"].as_i64().unwrap();

        let (status, body) =
            send(&app, Method::GET, &format!("/courses/{}/", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
    }

    #[test(tokio::test)]
    async fn test_list_courses() {
        let app = build_app(20).await;
        for i in 0..3 {
            create_course(&app, json!({ "name": format!("Course {}", i) }))
                .await;
        }

        let (status, body) = send(&app, Method::GET, "/courses/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[test(tokio::test)]
    async fn test_filter_courses_by_id() {
        let app = build_app(20).await;
        let mut ids = vec![];
        for i in 0..3 {
            let course =
                create_course(&app, json!({ "name": format!("Course {}", i) }))
                    .await;
            ids.push(course["id"].as_i64().unwrap());
        }

        let (status, body) =
            send(&app, Method::GET, &format!("/courses/?id={}", ids[0]), None)
                .await;
        assert_eq!(status, StatusCode::OK);
        let courses = body.as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["id"], ids[0]);
    }

    #[test(tokio::test)]
    async fn test_filter_courses_by_name() {
        let app = build_app(20).await;
        create_course(&app, json!({ "name": "Other" })).await;
        create_course(&app, json!({ "name": "Test Course" })).await;

        let (status, body) = send(
            &app,
            Method::GET,
            "/courses/?name=Test%20Course&ordering=id",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let courses = body.as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["name"], "Test Course");

        let (status, body) =
            send(&app, Method::GET, "/courses/?id=1&name=Test%20Course", None)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());

        let (status, _) =
            send(&app, Method::GET, "/courses/?id=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test(tokio::test)]
    async fn test_create_course() {
        let app = build_app(20).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/courses/",
            Some(json!({
                "name": "New Course",
                "description": "Course Description"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "New Course");
        assert!(body["id"].is_i64());
        assert_eq!(body["students"], json!([]));
    }

    #[test(tokio::test)]
    async fn test_create_course_missing_name() {
        let app = build_app(20).await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/courses/",
            Some(json!({ "description": "No name" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/courses/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test(tokio::test)]
    async fn test_update_course() {
        let app = build_app(20).await;
        let course = create_course(&app, json!({ "name": "Course" })).await;
        let uri = format!("/courses/{}/", course["id"]);

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({
                "name": "Updated Course",
                "description": "Updated Description"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Updated Course");

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["name"], "Updated Course");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/courses/999/",
            Some(json!({ "name": "Ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test(tokio::test)]
    async fn test_patch_course_over_cap() {
        let app = build_app(2).await;
        let students = create_students(&app, 3).await;
        let course = create_course(
            &app,
            json!({ "name": "Course", "students": &students[..2] }),
        )
        .await;
        let uri = format!("/courses/{}/", course["id"]);

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "students": students })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains('2'));

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "name": "Renamed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Renamed");
        assert_eq!(body["students"], json!(&students[..2]));
    }

    #[test(tokio::test)]
    async fn test_delete_course() {
        let app = build_app(20).await;
        let students = create_students(&app, 2).await;
        let course = create_course(
            &app,
            json!({ "name": "Course", "students": students }),
        )
        .await;
        let id = course["id"].as_i64().unwrap();
        let uri = format!("/courses/{}/", id);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, body) =
            send(&app, Method::GET, &format!("/courses/?id={}", id), None)
                .await;
        assert!(body.as_array().unwrap().is_empty());

        for student in students {
            let (status, _) = send(
                &app,
                Method::GET,
                &format!("/students/{}/", student),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test(tokio::test)]
    async fn test_validate_course() {
        let app = build_app(20).await;
        let students = create_students(&app, 20).await;
        let course = create_course(
            &app,
            json!({ "name": "Full", "students": students }),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/courses/{}/validate/", course["id"]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) =
            send(&app, Method::GET, "/courses/77/validate/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test(tokio::test)]
    async fn test_student_routes() {
        let app = build_app(20).await;
        let (status, student) = send(
            &app,
            Method::POST,
            "/students/",
            Some(json!({ "name": "Ana", "birth_date": "2002-05-14" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(student["birth_date"], "2002-05-14");
        let uri = format!("/students/{}/", student["id"]);

        let course = create_course(
            &app,
            json!({ "name": "Course", "students": [student["id"]] }),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "birth_date": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["birth_date"], Value::Null);

        let (status, _) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "birth_date": "2002-05-14" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/students/",
            Some(json!({ "name": "Bad", "birth_date": "14/05/2002" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) =
            send(&app, Method::GET, "/students/?name=Ana", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(
            &app,
            Method::GET,
            &format!("/courses/{}/", course["id"]),
            None,
        )
        .await;
        assert_eq!(body["students"], json!([]));

        let (status, _) =
            send(&app, Method::GET, "/students/abc/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test(tokio::test)]
    async fn test_get_config() {
        let app = build_app(25).await;
        let (status, body) = send(&app, Method::GET, "/config", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_students_per_course"], 25);
        assert_eq!(body["database"], "SQLite: memory");
    }
}
