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

//! OpenAPI documentation for the v2 version group.
//!
//! The spec is available at `/openapi/v2.json` and in the Swagger UI
//! served at `/docs`.

use utoipa::OpenApi;

use super::models::{UserRequestV2, UserResponseV2};
use crate::api::shared::{ApiVersionsResponse, ErrorMessage, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::post_user,
        crate::api::shared::handlers::list_api_versions,
        crate::api::shared::handlers::health_check,
    ),
    components(
        schemas(
            UserRequestV2,
            UserResponseV2,
            HealthResponse,
            ApiVersionsResponse,
            ErrorMessage,
        )
    ),
    tags(
        (name = "User", description = "Versioned user greeting endpoint"),
        (name = "API", description = "API version information"),
        (name = "Health", description = "Health check endpoints"),
    ),
    info(
        title = "Greeter Server API v2",
        version = "2.0.0",
        description = "Greeter Server REST API v2.\n\n## API Versioning\n\nThis API uses query-string versioning: select a version with the `api-version` query parameter (`?api-version=2`).\n\nThe v2 user payload carries roles in the `UserRoles` field and responses contain a `Message` plus a `Success` flag reflecting the validation outcome.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDocV2;
