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

//! API Version 2 (v2) implementation.
//!
//! Selected with `?api-version=2`.
//!
//! - `POST /User` — accepts `{FirstName, LastName, UserRoles[]}` and
//!   returns `{Message, Success}`; `Success` mirrors the validation
//!   outcome, so 400 responses carry `Success: false`.

pub mod handlers;
pub mod models;
pub mod openapi;

pub use models::{UserRequestV2, UserResponseV2};
pub use openapi::ApiDocV2;
