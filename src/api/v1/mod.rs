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

//! API Version 1 (v1) implementation.
//!
//! Selected with `?api-version=1` (the shipped default).
//!
//! - `POST /User` — accepts `{FirstName, LastName, userRole[]}` and
//!   returns `{Message}`; validation failures answer 400 with the list of
//!   failing fields in the message.

pub mod handlers;
pub mod models;
pub mod openapi;

pub use models::{UserRequestV1, UserResponseV1};
pub use openapi::ApiDocV1;
