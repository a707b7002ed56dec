// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::BTreeSet,
    path::Path,
    sync::{Mutex, MutexGuard},
};

use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::{debug, info};

use crate::{
    enrollment::EnrollmentValidator,
    error::Error,
    model::{Course, Id, NewCourse, NewStudent, Student},
    query::ListFilter,
};

use super::Querys;

const TARGET_SQLITE: &str = "Campus-SQLite";

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;
    CREATE TABLE IF NOT EXISTS student (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        birth_date TEXT
    );
    CREATE TABLE IF NOT EXISTS course (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS course_students (
        course_id INTEGER NOT NULL REFERENCES course (id) ON DELETE CASCADE,
        student_id INTEGER NOT NULL REFERENCES student (id) ON DELETE CASCADE,
        PRIMARY KEY (course_id, student_id)
    );
";

fn db_error(context: &str) -> impl FnOnce(rusqlite::Error) -> Error + '_ {
    move |e| Error::Database(format!("{}: {}", context, e))
}

/// SQLite backed store. One connection, serialized behind a mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self, Error> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Database(format!(
                        "Can not create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path)
            .map_err(db_error("SQLite fail open connection"))?;
        info!(TARGET_SQLITE, "Opened SQLite database at {}", path);
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()
            .map_err(db_error("SQLite fail open connection"))?;
        debug!(TARGET_SQLITE, "Opened in-memory SQLite database");
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, Error> {
        conn.execute_batch(SCHEMA)
            .map_err(db_error("Can not create tables"))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.conn.lock().map_err(|_| {
            Error::Database("SQLite connection lock poisoned".to_owned())
        })
    }
}

fn read_student(conn: &Connection, id: Id) -> Result<Option<Student>, Error> {
    conn.query_row(
        "SELECT id, name, birth_date FROM student WHERE id = ?1",
        params![id],
        |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                birth_date: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(db_error("Can not read student"))
}

fn student_exists(conn: &Connection, id: Id) -> Result<bool, Error> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM student WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()
        .map_err(db_error("Can not read student"))?;
    Ok(found.is_some())
}

fn read_roster(conn: &Connection, course_id: Id) -> Result<BTreeSet<Id>, Error> {
    let mut stmt = conn
        .prepare(
            "SELECT student_id FROM course_students WHERE course_id = ?1 ORDER BY student_id",
        )
        .map_err(db_error("Can not read roster"))?;
    let roster = stmt
        .query_map(params![course_id], |row| row.get(0))
        .map_err(db_error("Can not read roster"))?
        .collect::<Result<BTreeSet<Id>, _>>()
        .map_err(db_error("Can not read roster"));
    roster
}

fn read_course(conn: &Connection, id: Id) -> Result<Option<Course>, Error> {
    let name: Option<String> = conn
        .query_row("SELECT name FROM course WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()
        .map_err(db_error("Can not read course"))?;

    match name {
        Some(name) => Ok(Some(Course {
            id,
            name,
            students: read_roster(conn, id)?,
        })),
        None => Ok(None),
    }
}

/// Replaces the join entries of a course. Unknown students are a client
/// error, the roster size is not looked at.
fn write_roster(
    conn: &Connection,
    course_id: Id,
    students: &BTreeSet<Id>,
) -> Result<(), Error> {
    for student_id in students {
        if !student_exists(conn, *student_id)? {
            return Err(Error::Validation(format!(
                "Invalid student id {}: object does not exist",
                student_id
            )));
        }
    }

    conn.execute(
        "DELETE FROM course_students WHERE course_id = ?1",
        params![course_id],
    )
    .map_err(db_error("Can not clear roster"))?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO course_students (course_id, student_id) VALUES (?1, ?2)",
        )
        .map_err(db_error("Can not write roster"))?;
    for student_id in students {
        stmt.execute(params![course_id, student_id])
            .map_err(db_error("Can not write roster"))?;
    }

    Ok(())
}

fn course_not_found(id: Id) -> Error {
    Error::NotFound(format!("Course {} not found", id))
}

fn student_not_found(id: Id) -> Error {
    Error::NotFound(format!("Student {} not found", id))
}

impl Querys for SqliteStore {
    fn create_student(&self, student: &NewStudent) -> Result<Student, Error> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO student (name, birth_date) VALUES (?1, ?2)",
            params![student.name, student.birth_date],
        )
        .map_err(db_error("Can not insert student"))?;

        let id = conn.last_insert_rowid();
        debug!(TARGET_SQLITE, "Student {} created", id);
        Ok(Student {
            id,
            name: student.name.clone(),
            birth_date: student.birth_date,
        })
    }

    fn get_student(&self, id: Id) -> Result<Student, Error> {
        let conn = self.lock()?;
        read_student(&conn, id)?.ok_or_else(|| student_not_found(id))
    }

    fn list_students(&self, filter: &ListFilter) -> Result<Vec<Student>, Error> {
        let conn = self.lock()?;
        let (clause, values) = filter.where_clause();
        let sql = format!(
            "SELECT id, name, birth_date FROM student{} ORDER BY id",
            clause
        );

        let mut stmt =
            conn.prepare(&sql).map_err(db_error("Can not list students"))?;
        let students = stmt
            .query_map(params_from_iter(values), |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    birth_date: row.get(2)?,
                })
            })
            .map_err(db_error("Can not list students"))?
            .collect::<Result<Vec<Student>, _>>()
            .map_err(db_error("Can not list students"));
        students
    }

    fn update_student(
        &self,
        id: Id,
        student: &NewStudent,
    ) -> Result<Student, Error> {
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "UPDATE student SET name = ?1, birth_date = ?2 WHERE id = ?3",
                params![student.name, student.birth_date, id],
            )
            .map_err(db_error("Can not update student"))?;

        if changed == 0 {
            return Err(student_not_found(id));
        }

        debug!(TARGET_SQLITE, "Student {} updated", id);
        Ok(Student {
            id,
            name: student.name.clone(),
            birth_date: student.birth_date,
        })
    }

    fn delete_student(&self, id: Id) -> Result<(), Error> {
        let conn = self.lock()?;
        let changed = conn
            .execute("DELETE FROM student WHERE id = ?1", params![id])
            .map_err(db_error("Can not delete student"))?;

        if changed == 0 {
            return Err(student_not_found(id));
        }

        debug!(TARGET_SQLITE, "Student {} deleted", id);
        Ok(())
    }

    fn create_course(
        &self,
        course: &NewCourse,
        validator: &EnrollmentValidator,
    ) -> Result<Course, Error> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(db_error("Can not open transaction"))?;

        tx.execute("INSERT INTO course (name) VALUES (?1)", params![course.name])
            .map_err(db_error("Can not insert course"))?;
        let id = tx.last_insert_rowid();

        if let Some(students) = &course.students {
            write_roster(&tx, id, students)?;
        }

        let created = read_course(&tx, id)?.ok_or_else(|| course_not_found(id))?;
        validator.validate(&created)?;

        tx.commit().map_err(db_error("Can not commit course"))?;
        debug!(TARGET_SQLITE, "Course {} created", id);
        Ok(created)
    }

    fn get_course(&self, id: Id) -> Result<Course, Error> {
        let conn = self.lock()?;
        read_course(&conn, id)?.ok_or_else(|| course_not_found(id))
    }

    fn list_courses(&self, filter: &ListFilter) -> Result<Vec<Course>, Error> {
        let conn = self.lock()?;
        let (clause, values) = filter.where_clause();
        let sql = format!("SELECT id, name FROM course{} ORDER BY id", clause);

        let mut stmt =
            conn.prepare(&sql).map_err(db_error("Can not list courses"))?;
        let rows = stmt
            .query_map(params_from_iter(values), |row| {
                Ok((row.get::<_, Id>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(db_error("Can not list courses"))?
            .collect::<Result<Vec<(Id, String)>, _>>()
            .map_err(db_error("Can not list courses"))?;

        rows.into_iter()
            .map(|(id, name)| {
                Ok(Course {
                    id,
                    name,
                    students: read_roster(&conn, id)?,
                })
            })
            .collect()
    }

    fn update_course(
        &self,
        id: Id,
        course: &NewCourse,
        validator: &EnrollmentValidator,
    ) -> Result<Course, Error> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(db_error("Can not open transaction"))?;

        let changed = tx
            .execute(
                "UPDATE course SET name = ?1 WHERE id = ?2",
                params![course.name, id],
            )
            .map_err(db_error("Can not update course"))?;
        if changed == 0 {
            return Err(course_not_found(id));
        }

        if let Some(students) = &course.students {
            write_roster(&tx, id, students)?;
        }

        let updated = read_course(&tx, id)?.ok_or_else(|| course_not_found(id))?;
        // A rename alone leaves the roster as stored, cap included.
        if course.students.is_some() {
            validator.validate(&updated)?;
        }

        tx.commit().map_err(db_error("Can not commit course"))?;
        debug!(TARGET_SQLITE, "Course {} updated", id);
        Ok(updated)
    }

    fn set_course_students(
        &self,
        id: Id,
        students: &BTreeSet<Id>,
    ) -> Result<Course, Error> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(db_error("Can not open transaction"))?;

        let Some(mut course) = read_course(&tx, id)? else {
            return Err(course_not_found(id));
        };
        write_roster(&tx, id, students)?;
        tx.commit().map_err(db_error("Can not commit roster"))?;

        course.set_students(students.iter().copied());
        debug!(
            TARGET_SQLITE,
            "Course {} roster set to {} students",
            id,
            course.enrolled()
        );
        Ok(course)
    }

    fn delete_course(&self, id: Id) -> Result<(), Error> {
        let conn = self.lock()?;
        let changed = conn
            .execute("DELETE FROM course WHERE id = ?1", params![id])
            .map_err(db_error("Can not delete course"))?;

        if changed == 0 {
            return Err(course_not_found(id));
        }

        debug!(TARGET_SQLITE, "Course {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_owned(),
            birth_date: None,
        }
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("campus.db");
        let path = path.to_str().unwrap();

        let id = {
            let store = SqliteStore::open(path).unwrap();
            store.create_student(&new_student("Ana")).unwrap().id
        };

        let store = SqliteStore::open(path).unwrap();
        assert_eq!(store.get_student(id).unwrap().name, "Ana");
    }

    #[test]
    fn test_failed_validation_rolls_back() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.create_student(&new_student("A")).unwrap().id;
        let b = store.create_student(&new_student("B")).unwrap().id;

        let result = store.create_course(
            &NewCourse {
                name: "Tiny".to_owned(),
                students: Some(BTreeSet::from([a, b])),
            },
            &EnrollmentValidator::new(1),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.list_courses(&ListFilter::new()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_student_in_roster() {
        let store = SqliteStore::open_in_memory().unwrap();
        let course = store
            .create_course(
                &NewCourse {
                    name: "Course".to_owned(),
                    students: None,
                },
                &EnrollmentValidator::default(),
            )
            .unwrap();

        let result =
            store.set_course_students(course.id, &BTreeSet::from([99]));
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.get_course(course.id).unwrap().students.is_empty());
    }
}
