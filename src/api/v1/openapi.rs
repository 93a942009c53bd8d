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

//! OpenAPI documentation for the v1 version group.
//!
//! The spec is available at `/openapi/v1.json` and in the Swagger UI
//! served at `/docs`.

use utoipa::OpenApi;

use super::models::{UserRequestV1, UserResponseV1};
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
            UserRequestV1,
            UserResponseV1,
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
        title = "Greeter Server API v1",
        version = "1.0.0",
        description = "Greeter Server REST API v1.\n\n## API Versioning\n\nThis API uses query-string versioning: select a version with the `api-version` query parameter (`?api-version=1`). Requests without the parameter are served by the configured default version.\n\nThe v1 user payload carries roles in the `userRole` field and responses contain only a `Message`.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDocV1;
