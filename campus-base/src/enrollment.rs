// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Enrollment rule
//!
//! Mutating a roster and validating it are separate steps. Nothing in the
//! store calls [`EnrollmentValidator::validate`] on its own; callers invoke
//! it before committing a change they want checked.

use tracing::debug;

use crate::{
    config::{Config, DEFAULT_MAX_STUDENTS_PER_COURSE},
    error::Error,
    model::Course,
};

const TARGET_ENROLLMENT: &str = "Campus-Enrollment";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnrollmentValidator {
    max_students: usize,
}

impl EnrollmentValidator {
    pub fn new(max_students: usize) -> Self {
        Self { max_students }
    }

    pub fn max_students(&self) -> usize {
        self.max_students
    }

    /// Fails when the course holds more students than allowed. A roster of
    /// exactly `max_students` is accepted.
    pub fn validate(&self, course: &Course) -> Result<(), Error> {
        let enrolled = course.enrolled();
        debug!(
            TARGET_ENROLLMENT,
            "Course {} has {} of {} students",
            course.id,
            enrolled,
            self.max_students
        );

        if enrolled > self.max_students {
            return Err(Error::Validation(format!(
                "Cannot enroll more than {} students in a course",
                self.max_students
            )));
        }

        Ok(())
    }
}

impl Default for EnrollmentValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STUDENTS_PER_COURSE)
    }
}

impl From<&Config> for EnrollmentValidator {
    fn from(config: &Config) -> Self {
        Self::new(config.max_students_per_course)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn course_with(students: usize) -> Course {
        Course {
            id: 1,
            name: "Course".to_owned(),
            students: (1..=students as i64).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_cap_is_inclusive() {
        let validator = EnrollmentValidator::default();
        assert_eq!(validator.max_students(), 20);

        for (students, is_valid) in
            [(0, true), (19, true), (20, true), (21, false), (25, false)]
        {
            let result = validator.validate(&course_with(students));
            assert_eq!(result.is_ok(), is_valid, "{} students", students);
        }
    }

    #[test]
    fn test_message_states_limit() {
        let validator = EnrollmentValidator::new(2);
        let Err(Error::Validation(message)) = validator.validate(&course_with(3))
        else {
            panic!("three students must not fit in a course of two");
        };
        assert!(message.contains('2'));
    }

    #[test]
    fn test_from_config() {
        let config = Config::memory().with_max_students_per_course(5);
        assert_eq!(EnrollmentValidator::from(&config).max_students(), 5);
    }
}
