// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::Error;

use super::{Id, double_option, required_name};

/// Stored student.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: Id,
    pub name: String,
    pub birth_date: Option<Date>,
}

impl Student {
    pub fn patch(&mut self, patch: StudentPatch) -> Result<(), Error> {
        if let Some(name) = patch.name {
            self.name = required_name(Some(name))?;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        Ok(())
    }
}

/// Body of a create or full update request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StudentRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<Date>,
}

/// Body of a partial update. `birth_date: null` clears the date.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_date: Option<Option<Date>>,
}

/// A student ready to be written, identity not yet assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub birth_date: Option<Date>,
}

impl TryFrom<StudentRequest> for NewStudent {
    type Error = Error;

    fn try_from(value: StudentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_name(value.name)?,
            birth_date: value.birth_date,
        })
    }
}

impl From<Student> for NewStudent {
    fn from(value: Student) -> Self {
        Self {
            name: value.name,
            birth_date: value.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::*;

    #[test]
    fn test_student_request_requires_name() {
        let request: StudentRequest =
            serde_json::from_value(json!({ "birth_date": "2001-02-03" }))
                .unwrap();
        assert!(matches!(
            NewStudent::try_from(request),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_student_date_format() {
        let request: StudentRequest = serde_json::from_value(
            json!({ "name": "Ana", "birth_date": "2001-02-03" }),
        )
        .unwrap();
        let new = NewStudent::try_from(request).unwrap();
        assert_eq!(new.birth_date, Some(date!(2001 - 02 - 03)));

        let student = Student {
            id: 1,
            name: new.name,
            birth_date: new.birth_date,
        };
        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({ "id": 1, "name": "Ana", "birth_date": "2001-02-03" })
        );
    }

    #[test]
    fn test_student_patch_null_clears_date() {
        let mut student = Student {
            id: 1,
            name: "Ana".to_owned(),
            birth_date: Some(date!(2001 - 02 - 03)),
        };

        let patch: StudentPatch =
            serde_json::from_value(json!({ "name": "Anna" })).unwrap();
        student.patch(patch).unwrap();
        assert_eq!(student.name, "Anna");
        assert!(student.birth_date.is_some());

        let patch: StudentPatch =
            serde_json::from_value(json!({ "birth_date": null })).unwrap();
        student.patch(patch).unwrap();
        assert_eq!(student.birth_date, None);
    }
}
