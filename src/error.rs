// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the temperature check.
//!
//! One variant per failure category: invalid input, a request that could not
//! be completed, a non-success answer from the weather service, a body that
//! does not carry a temperature, and a state file that cannot be read or
//! written.
//!
//! None of these errors ever carries the API key. Transport errors are
//! stripped of their request URL before being wrapped, since the key travels
//! in the query string.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invocation parameter was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request to the weather service could not be completed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The weather service answered with a non-success status.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// The response body did not contain a usable temperature.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The state file exists but could not be read.
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// The new value could not be persisted.
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Errors raised while validating invocation parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A required parameter was empty or whitespace only.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// A numeric parameter must be greater than zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Name of the offending parameter.
        field: &'static str,
    },
}

/// Errors raised when the request cannot be completed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or body transfer failure.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The request did not complete in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The HTTP client could not be constructed.
    #[error("cannot build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Non-success answers from the weather service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The service rejected the API key.
    #[error("authentication failed")]
    Unauthorized,

    /// Any other non-success status.
    #[error("HTTP {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message reported by the service, or the canonical reason.
        message: String,
    },
}

/// Errors raised while reading the temperature out of a response body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON or a field has the wrong type.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors raised while reading the state file.
///
/// A missing file or unparsable contents are not errors; see
/// [`StateFile::read_prior`](crate::store::StateFile::read_prior).
#[derive(Debug, Error)]
pub enum ReadError {
    /// The state file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors raised while persisting the new value.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The state file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::Empty { field: "city" };
        assert_eq!(err.to_string(), "city must not be empty");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::Empty { field: "api_key" }.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::Empty { field: "api_key" })
        ));
    }

    #[test]
    fn remote_error_display() {
        let err = RemoteError::Status {
            status: 404,
            message: "city not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 - city not found");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("main.temp".to_string());
        assert_eq!(err.to_string(), "missing field in response: main.temp");
    }

    #[test]
    fn write_error_names_path() {
        let err = WriteError::Io {
            path: PathBuf::from("/nowhere/temp.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot write /nowhere/temp.txt: denied");
    }

    #[test]
    fn read_error_names_path() {
        let err: Error = ReadError::Io {
            path: PathBuf::from("/etc/state"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.to_string(), "read error: cannot read /etc/state: denied");
    }

    #[test]
    fn zero_value_error_display() {
        let err = ValueError::Zero { field: "timeout" };
        assert_eq!(err.to_string(), "timeout must be greater than zero");
    }

    #[test]
    fn top_level_error_prefixes_category() {
        let err: Error = FetchError::Timeout(10_000).into();
        assert_eq!(
            err.to_string(),
            "fetch error: request timed out after 10000 ms"
        );
    }
}
