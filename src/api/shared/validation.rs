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

//! Required-field validation and greeting formatting, shared by all API
//! versions.
//!
//! Both functions are pure; the versioned request types only differ in
//! wire-level field names, which they expose through [`UserPayload`].

/// Capability set a versioned user request exposes to the shared
/// validator and formatter.
pub trait UserPayload {
    /// Wire names of the required fields, in declaration order:
    /// first name, last name, roles.
    const FIELD_NAMES: [&'static str; 3];

    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn roles(&self) -> &[String];
}

/// Return the wire names of required fields that are empty, in declaration
/// order. An empty result means the payload passed validation.
///
/// A name field fails when it is the empty string; the roles field fails
/// when the sequence is empty. No other constraints apply.
pub fn missing_required_fields<T: UserPayload>(payload: &T) -> Vec<&'static str> {
    let [first_name, last_name, roles] = T::FIELD_NAMES;
    let mut failing = Vec::new();
    if payload.first_name().is_empty() {
        failing.push(first_name);
    }
    if payload.last_name().is_empty() {
        failing.push(last_name);
    }
    if payload.roles().is_empty() {
        failing.push(roles);
    }
    failing
}

/// Format the greeting for a payload that passed validation.
pub fn greeting<T: UserPayload>(payload: &T) -> String {
    format!(
        "Hello {} {}. Your roles are: {}",
        payload.first_name(),
        payload.last_name(),
        payload.roles().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct TestPayload {
        first_name: String,
        last_name: String,
        roles: Vec<String>,
    }

    impl TestPayload {
        fn new(first_name: &str, last_name: &str, roles: &[&str]) -> Self {
            Self {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                roles: roles.iter().map(|r| r.to_string()).collect(),
            }
        }
    }

    impl UserPayload for TestPayload {
        const FIELD_NAMES: [&'static str; 3] = ["FirstName", "LastName", "Roles"];

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

    #[test_case("Ada", "Lovelace", &["admin"], &[]; "all fields present")]
    #[test_case("", "Lovelace", &["admin"], &["FirstName"]; "empty first name")]
    #[test_case("Ada", "", &["admin"], &["LastName"]; "empty last name")]
    #[test_case("Ada", "Lovelace", &[], &["Roles"]; "empty roles")]
    #[test_case("", "", &[], &["FirstName", "LastName", "Roles"]; "all fields empty")]
    fn test_missing_required_fields(
        first_name: &str,
        last_name: &str,
        roles: &[&str],
        expected: &[&str],
    ) {
        let payload = TestPayload::new(first_name, last_name, roles);
        assert_eq!(missing_required_fields(&payload), expected);
    }

    #[test]
    fn test_failing_fields_keep_declaration_order() {
        let payload = TestPayload::new("", "Lovelace", &[]);
        assert_eq!(missing_required_fields(&payload), ["FirstName", "Roles"]);
    }

    #[test]
    fn test_greeting_joins_roles() {
        let payload = TestPayload::new("Ada", "Lovelace", &["admin", "user"]);
        assert_eq!(
            greeting(&payload),
            "Hello Ada Lovelace. Your roles are: admin, user"
        );
    }

    #[test]
    fn test_greeting_single_role() {
        let payload = TestPayload::new("Ada", "Lovelace", &["admin"]);
        assert_eq!(
            greeting(&payload),
            "Hello Ada Lovelace. Your roles are: admin"
        );
    }
}
