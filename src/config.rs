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

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::api::version::ApiVersion;

/// GreeterServer configuration wrapping API settings and server settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GreeterServerConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Server settings controlling operational behavior like logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// API server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// API version assumed when a request carries no `api-version` parameter
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_version: default_version(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_version() -> String {
    crate::api::version::API_DEFAULT_VERSION.as_str().to_string()
}

impl GreeterServerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {}: {}", path_ref.display(), e)
        })?;

        // Try YAML first, then JSON
        match serde_yaml::from_str::<GreeterServerConfig>(&content) {
            Ok(config) => Ok(config),
            Err(yaml_err) => match serde_json::from_str::<GreeterServerConfig>(&content) {
                Ok(config) => Ok(config),
                Err(json_err) => Err(anyhow::anyhow!(
                    "Failed to parse config file '{}':\n  YAML error: {}\n  JSON error: {}",
                    path_ref.display(),
                    yaml_err,
                    json_err
                )),
            },
        }
    }

    /// Load a config file, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if path_ref.exists() {
            Self::load_from_file(path_ref)
        } else {
            info!(
                "Config file {} not found, using default settings",
                path_ref.display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.port == 0 {
            return Err(anyhow::anyhow!(
                "Invalid API port: {} (cannot be 0)",
                self.api.port
            ));
        }

        if self.api.host.is_empty() {
            return Err(anyhow::anyhow!("API host cannot be empty"));
        }

        self.default_api_version()?;

        Ok(())
    }

    /// Resolve the configured default API version
    pub fn default_api_version(&self) -> Result<ApiVersion> {
        self.api
            .default_version
            .parse::<ApiVersion>()
            .map_err(|e| anyhow::anyhow!("Invalid default API version: {e}"))
    }
}
