// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Error module.
//!

use thiserror::Error;

use serde::{Deserialize, Serialize};

/// Error type.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// The request is not acceptable: missing fields, unknown references
    /// or a broken enrollment rule.
    #[error("Validation error: {0}")]
    Validation(String),
    /// The referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
    /// Settings or bootstrap error.
    #[error("Bridge error: {0}")]
    Bridge(String),
}

impl Error {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}
