// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::{Id, required_name};

/// Stored course with its materialized roster.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: Id,
    pub name: String,
    pub students: BTreeSet<Id>,
}

impl Course {
    /// Number of students currently enrolled.
    pub fn enrolled(&self) -> usize {
        self.students.len()
    }

    /// Replaces the roster as a whole. The enrollment cap is not checked
    /// here, see [`EnrollmentValidator`](crate::EnrollmentValidator).
    pub fn set_students<I>(&mut self, students: I)
    where
        I: IntoIterator<Item = Id>,
    {
        self.students = students.into_iter().collect();
    }
}

/// Body of a create or full update request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub students: Option<Vec<Id>>,
}

/// Body of a partial update.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CoursePatch {
    pub name: Option<String>,
    #[serde(default)]
    pub students: Option<Vec<Id>>,
}

/// A course ready to be written. `students: None` keeps the stored roster
/// on update and means an empty roster on create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub students: Option<BTreeSet<Id>>,
}

impl TryFrom<CourseRequest> for NewCourse {
    type Error = Error;

    fn try_from(value: CourseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_name(value.name)?,
            students: value.students.map(|ids| ids.into_iter().collect()),
        })
    }
}

impl NewCourse {
    /// Merges a partial update over the stored course.
    pub fn from_patch(course: &Course, patch: CoursePatch) -> Result<Self, Error> {
        let name = match patch.name {
            Some(name) => required_name(Some(name))?,
            None => course.name.clone(),
        };
        Ok(Self {
            name,
            students: patch.students.map(|ids| ids.into_iter().collect()),
        })
    }
}
