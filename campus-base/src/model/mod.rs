// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Data model
//!
//! Records as they are stored plus the request bodies accepted for them.
//! Request bodies keep every field optional so that a missing field is
//! reported as [`Error::Validation`](crate::Error::Validation) instead of a
//! deserialization failure.

pub mod course;
pub mod student;

pub use course::{Course, CoursePatch, CourseRequest, NewCourse};
pub use student::{NewStudent, Student, StudentPatch, StudentRequest};

use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// System-assigned identity of a record.
pub type Id = i64;

/// Returns the name without surrounding whitespace, or a validation error
/// naming the field when nothing is left.
pub(crate) fn required_name(name: Option<String>) -> Result<String, Error> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_owned()),
        Some(_) => Err(Error::Validation(
            "Field 'name' may not be blank".to_owned(),
        )),
        None => Err(Error::Validation("Field 'name' is required".to_owned())),
    }
}

/// Distinguishes an explicit `null` from an absent field.
pub(crate) fn double_option<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_name() {
        assert_eq!(required_name(Some("Rust".to_owned())).unwrap(), "Rust");
        assert_eq!(
            required_name(Some("  Rust 101\t".to_owned())).unwrap(),
            "Rust 101"
        );
        assert!(matches!(
            required_name(Some("   ".to_owned())),
            Err(Error::Validation(_))
        ));
        assert_eq!(
            required_name(None).unwrap_err(),
            Error::Validation("Field 'name' is required".to_owned())
        );
    }
}
