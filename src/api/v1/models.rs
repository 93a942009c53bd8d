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

//! Request and response shapes for API v1.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::shared::UserPayload;

/// User payload accepted by `POST /User?api-version=1`.
///
/// Missing fields deserialize as empty and fail validation, matching the
/// empty-field rule.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserRequestV1 {
    #[serde(rename = "FirstName", default)]
    pub first_name: String,
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    #[serde(rename = "userRole", default)]
    pub roles: Vec<String>,
}

impl UserPayload for UserRequestV1 {
    const FIELD_NAMES: [&'static str; 3] = ["FirstName", "LastName", "userRole"];

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Greeting or validation-error message returned by v1.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponseV1 {
    #[serde(rename = "Message")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let user: UserRequestV1 = serde_json::from_str(
            r#"{"FirstName":"Ada","LastName":"Lovelace","userRole":["admin"]}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.roles, ["admin"]);
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let user: UserRequestV1 = serde_json::from_str(r#"{"FirstName":"Ada"}"#).unwrap();
        assert!(user.last_name.is_empty());
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_response_wire_name() {
        let body = serde_json::to_value(UserResponseV1 {
            message: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"Message": "hi"}));
    }
}
