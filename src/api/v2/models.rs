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

//! Request and response shapes for API v2.
//!
//! Same payload as v1 with the roles field renamed to `UserRoles`, and a
//! `Success` flag on the response reflecting the validation outcome.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::shared::UserPayload;

/// User payload accepted by `POST /User?api-version=2`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserRequestV2 {
    #[serde(rename = "FirstName", default)]
    pub first_name: String,
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    #[serde(rename = "UserRoles", default)]
    pub roles: Vec<String>,
}

impl UserPayload for UserRequestV2 {
    const FIELD_NAMES: [&'static str; 3] = ["FirstName", "LastName", "UserRoles"];

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

/// Greeting or validation-error message returned by v2.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponseV2 {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Success")]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let user: UserRequestV2 = serde_json::from_str(
            r#"{"FirstName":"Bob","LastName":"Builder","UserRoles":["admin","user"]}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Bob");
        assert_eq!(user.last_name, "Builder");
        assert_eq!(user.roles, ["admin", "user"]);
    }

    #[test]
    fn test_v1_roles_field_is_ignored() {
        // A v1-shaped body sent to v2 leaves UserRoles empty.
        let user: UserRequestV2 = serde_json::from_str(
            r#"{"FirstName":"Bob","LastName":"Builder","userRole":["admin"]}"#,
        )
        .unwrap();
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_response_wire_names() {
        let body = serde_json::to_value(UserResponseV2 {
            message: "hi".to_string(),
            success: true,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"Message": "hi", "Success": true}));
    }
}
