// Copyright 2025 The Greeter Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types shared across API versions.
//!
//! All variants map to HTTP 400; the `Display` strings are the wire-level
//! messages returned in the versioned response bodies.

use thiserror::Error;

/// Errors produced at the API boundary.
///
/// `ValidationFailure` is never propagated to the caller as an error; each
/// version's handler converts it locally into its response shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required request fields were empty or missing.
    #[error("Incoming payload did not pass the validation on fields: {}", .0.join(", "))]
    ValidationFailure(Vec<&'static str>),

    /// The `api-version` query parameter did not name a known version.
    #[error("Unknown API version: {0}")]
    UnknownVersion(String),

    /// The request body was not valid JSON for the versioned request shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ApiError {
    /// Ordered failing field names, for the error-path log line.
    pub fn failing_fields(&self) -> &[&'static str] {
        match self {
            ApiError::ValidationFailure(fields) => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_message_joins_fields() {
        let err = ApiError::ValidationFailure(vec!["FirstName", "userRole"]);
        assert_eq!(
            err.to_string(),
            "Incoming payload did not pass the validation on fields: FirstName, userRole"
        );
    }

    #[test]
    fn test_single_field_message() {
        let err = ApiError::ValidationFailure(vec!["LastName"]);
        assert_eq!(
            err.to_string(),
            "Incoming payload did not pass the validation on fields: LastName"
        );
    }

    #[test]
    fn test_failing_fields_accessor() {
        let err = ApiError::ValidationFailure(vec!["FirstName"]);
        assert_eq!(err.failing_fields(), &["FirstName"]);
        assert!(ApiError::UnknownVersion("9".into())
            .failing_fields()
            .is_empty());
    }
}
