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

//! REST API implementation for Greeter Server.
//!
//! This module provides the versioned user greeting endpoint. The API uses
//! query-string versioning: the `api-version` parameter selects the payload
//! shape, and requests without it are served by the configured default
//! version (v1 out of the box).
//!
//! ## API Structure
//!
//! ```text
//! /health                    - Health check (unversioned)
//! /api/versions              - List available API versions
//! /User?api-version=1        - v1 user greeting endpoint
//! /User?api-version=2        - v2 user greeting endpoint
//! ```
//!
//! ## Module Organization
//!
//! - `shared` - Validation, error, and response types shared across versions
//! - `v1` / `v2` - Per-version payload shapes, handlers, and OpenAPI docs
//! - `version` - Version constants and parsing
//! - `routes` - Route construction with version dispatch

pub mod routes;
pub mod shared;
pub mod v1;
pub mod v2;
pub mod version;

// Re-export commonly used types
pub use routes::build_router;
pub use shared::error::ApiError;
pub use shared::handlers::{health_check, list_api_versions, post_user};
pub use v1::ApiDocV1;
pub use v2::ApiDocV2;
pub use version::{ApiVersion, API_DEFAULT_VERSION};
