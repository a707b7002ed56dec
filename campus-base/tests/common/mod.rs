// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use campus_base::{
    Api, Config, Course, CourseRequest, Id, Student, StudentRequest,
};

pub fn create_api(max_students: usize) -> Api {
    let config = Config::memory().with_max_students_per_course(max_students);
    Api::new(&config).unwrap()
}

pub fn create_course(api: &Api, name: &str) -> Course {
    api.create_course(CourseRequest {
        name: Some(name.to_owned()),
        students: None,
    })
    .unwrap()
}

#[allow(dead_code)]
pub fn create_courses(api: &Api, quantity: usize) -> Vec<Course> {
    (0..quantity)
        .map(|i| create_course(api, &format!("Course {}", i)))
        .collect()
}

pub fn create_students(api: &Api, quantity: usize) -> Vec<Id> {
    (0..quantity)
        .map(|i| {
            let student: Student = api
                .create_student(StudentRequest {
                    name: Some(format!("Student {}", i)),
                    birth_date: None,
                })
                .unwrap();
            student.id
        })
        .collect()
}
