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

//! Configuration File Tests
//!
//! Verifies YAML-first/JSON-fallback parsing, default handling for missing
//! files, and validation failures for unusable settings.

#![allow(clippy::unwrap_used)]

use greeter_server::{ApiVersion, GreeterServerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_config() {
    let file = write_config(
        "api:\n  host: 127.0.0.1\n  port: 9090\n  default_version: \"2\"\nserver:\n  log_level: debug\n",
    );

    let config = GreeterServerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.api.host, "127.0.0.1");
    assert_eq!(config.api.port, 9090);
    assert_eq!(config.default_api_version().unwrap(), ApiVersion::V2);
    assert_eq!(config.server.log_level, "debug");
    config.validate().unwrap();
}

#[test]
fn test_load_json_config_fallback() {
    let file = write_config(r#"{"api": {"port": 8181}}"#);

    let config = GreeterServerConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.api.port, 8181);
    assert_eq!(config.api.host, "0.0.0.0");
}

#[test]
fn test_unparseable_config_reports_both_errors() {
    let file = write_config("api: [not: a mapping");

    let err = GreeterServerConfig::load_from_file(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("YAML error"), "got: {message}");
    assert!(message.contains("JSON error"), "got: {message}");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = GreeterServerConfig::load_or_default("does/not/exist.yaml").unwrap();
    assert_eq!(config.api.port, 8080);
    assert_eq!(config.default_api_version().unwrap(), ApiVersion::V1);
}

#[test]
fn test_missing_file_with_explicit_load_fails() {
    assert!(GreeterServerConfig::load_from_file("does/not/exist.yaml").is_err());
}

#[test]
fn test_invalid_default_version_fails_validation() {
    let file = write_config("api:\n  default_version: \"7\"\n");

    let config = GreeterServerConfig::load_from_file(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unknown API version: 7"));
}
