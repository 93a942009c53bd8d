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

//! API route definitions.
//!
//! All versions share the `/User` route; the dispatch handler resolves the
//! target version from the `api-version` query parameter at request time.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::shared::handlers;
use crate::api::version::ApiVersion;

/// Build the API router.
///
/// `default_version` is applied to requests that carry no `api-version`
/// query parameter.
pub fn build_router(default_version: ApiVersion) -> Router {
    Router::new()
        .route("/User", post(handlers::post_user))
        .route("/health", get(handlers::health_check))
        .route("/api/versions", get(handlers::list_api_versions))
        .layer(Extension(default_version))
}
