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

//! API v2 handler for the user endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;

use super::models::{UserRequestV2, UserResponseV2};
use crate::api::shared::{greeting, missing_required_fields, ApiError};

/// Greet a user (API v2)
///
/// Validates that `FirstName`, `LastName`, and `UserRoles` are non-empty.
/// The response additionally carries a `Success` flag reflecting the
/// validation outcome.
#[utoipa::path(
    post,
    path = "/User",
    params(
        ("api-version" = Option<String>, Query, description = "API version selector, \"2\" for this shape")
    ),
    request_body = UserRequestV2,
    responses(
        (status = 200, description = "Greeting for a valid payload", body = UserResponseV2),
        (status = 400, description = "Payload failed required-field validation", body = UserResponseV2),
    ),
    tag = "User"
)]
pub async fn post_user(Json(user): Json<UserRequestV2>) -> (StatusCode, Json<UserResponseV2>) {
    let failing = missing_required_fields(&user);
    if !failing.is_empty() {
        let err = ApiError::ValidationFailure(failing);
        error!(
            "Incoming payload did not pass the validation on fields: {:?}",
            err.failing_fields()
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(UserResponseV2 {
                message: err.to_string(),
                success: false,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(UserResponseV2 {
            message: greeting(&user),
            success: true,
        }),
    )
}

/// Parse a raw body as a v2 request and run the handler.
pub(crate) async fn handle_post_user(body: &[u8]) -> Response {
    match serde_json::from_slice::<UserRequestV2>(body) {
        Ok(user) => post_user(Json(user)).await.into_response(),
        Err(e) => {
            let err = ApiError::from(e);
            (
                StatusCode::BAD_REQUEST,
                Json(UserResponseV2 {
                    message: err.to_string(),
                    success: false,
                }),
            )
                .into_response()
        }
    }
}
