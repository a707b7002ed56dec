// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_bridge::Error as CampusError;

// Error
#[derive(Debug)]
pub enum Error {
    Campus(CampusError),
    /// Body or query string that could not be read.
    Request(String),
}

impl From<CampusError> for Error {
    fn from(value: CampusError) -> Self {
        Error::Campus(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::Request(value.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(value: QueryRejection) -> Self {
        Error::Request(value.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Campus(error) => {
                if !error.is_client_error() {
                    tracing::error!("{}", error);
                }
                let status = match error {
                    CampusError::Validation(_) => StatusCode::BAD_REQUEST,
                    CampusError::NotFound(_) => StatusCode::NOT_FOUND,
                    CampusError::Database(_) | CampusError::Bridge(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, Json(error.to_string())).into_response()
            }
            Error::Request(error) => {
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (CampusError::Validation("x".to_owned()), StatusCode::BAD_REQUEST),
            (CampusError::NotFound("x".to_owned()), StatusCode::NOT_FOUND),
            (
                CampusError::Database("x".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CampusError::Bridge("x".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in &cases {
            assert_eq!(error.is_client_error(), status.is_client_error());
        }

        for (error, status) in cases {
            assert_eq!(Error::from(error).into_response().status(), status);
        }

        assert_eq!(
            Error::Request("bad".to_owned()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
