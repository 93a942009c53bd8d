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

//! Handlers shared across API versions: version dispatch for the user
//! endpoint, the health probe, and the version listing.

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{debug, warn};
use serde::Deserialize;

use crate::api::shared::{ApiVersionsResponse, ErrorMessage, HealthResponse};
use crate::api::version::ApiVersion;
use crate::api::{v1, v2};

/// Query parameters carrying the requested API version
#[derive(Debug, Deserialize)]
pub struct VersionQuery {
    #[serde(rename = "api-version")]
    pub api_version: Option<String>,
}

/// Dispatch `POST /User` to the versioned handler.
///
/// The version is read from the `api-version` query parameter; when the
/// parameter is absent, the configured default applies. The body is taken
/// raw because its shape is only known after the version is resolved.
pub async fn post_user(
    Extension(default_version): Extension<ApiVersion>,
    Query(query): Query<VersionQuery>,
    body: Bytes,
) -> Response {
    let version = match query.api_version {
        Some(raw) => match raw.parse::<ApiVersion>() {
            Ok(version) => version,
            Err(err) => {
                warn!("Rejected POST /User: {err}");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorMessage {
                        message: err.to_string(),
                    }),
                )
                    .into_response();
            }
        },
        None => default_version,
    };

    debug!("Dispatching POST /User to API {version}");
    match version {
        ApiVersion::V1 => v1::handlers::handle_post_user(&body).await,
        ApiVersion::V2 => v2::handlers::handle_post_user(&body).await,
    }
}

/// List available API versions
#[utoipa::path(
    get,
    path = "/api/versions",
    responses(
        (status = 200, description = "List of available API versions", body = ApiVersionsResponse),
    ),
    tag = "API"
)]
pub async fn list_api_versions(
    Extension(default_version): Extension<ApiVersion>,
) -> Json<ApiVersionsResponse> {
    Json(ApiVersionsResponse {
        versions: ApiVersion::all_strings(),
        default: default_version.to_string(),
    })
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}
