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
use axum::Router;
use log::{error, info};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api;
use crate::api::version::ApiVersion;
use crate::config::GreeterServerConfig;

pub struct GreeterServer {
    host: String,
    port: u16,
    default_version: ApiVersion,
    config_file_path: Option<String>,
}

impl GreeterServer {
    /// Create a new GreeterServer from a configuration file
    pub fn new(config_path: PathBuf, port_override: Option<u16>) -> Result<Self> {
        let config = GreeterServerConfig::load_or_default(&config_path)?;
        config.validate()?;

        let mut server = Self::from_config(&config)?;
        if let Some(port) = port_override {
            server.port = port;
        }
        server.config_file_path = config_path
            .exists()
            .then(|| config_path.to_string_lossy().to_string());
        Ok(server)
    }

    /// Create a GreeterServer from an already-loaded configuration
    pub fn from_config(config: &GreeterServerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            host: config.api.host.clone(),
            port: config.api.port,
            default_version: config.default_api_version()?,
            config_file_path: None,
        })
    }

    /// Build the application router: versioned user endpoint, health and
    /// version listing, plus the Swagger UI with one spec per version group.
    pub fn build_app(default_version: ApiVersion) -> Router {
        Router::new()
            .merge(api::build_router(default_version))
            .merge(SwaggerUi::new("/docs").urls(vec![
                (
                    Url::with_primary(
                        "v1",
                        "/openapi/v1.json",
                        default_version == ApiVersion::V1,
                    ),
                    api::ApiDocV1::openapi(),
                ),
                (
                    Url::with_primary(
                        "v2",
                        "/openapi/v2.json",
                        default_version == ApiVersion::V2,
                    ),
                    api::ApiDocV2::openapi(),
                ),
            ]))
            .layer(CorsLayer::permissive())
    }

    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting Greeter Server");
        if let Some(config_file) = &self.config_file_path {
            println!("  Config file: {config_file}");
        }
        println!("  API Port: {}", self.port);
        println!("  Default API version: {}", self.default_version);

        let app = Self::build_app(self.default_version);

        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting web API on {addr}");
        info!("User endpoint available at http://{addr}/User?api-version=1");
        info!("Swagger UI available at http://{addr}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Web API server error: {e}");
            }
        });

        // Wait for shutdown signal
        tokio::signal::ctrl_c().await?;

        info!("Shutting down Greeter Server");
        Ok(())
    }
}
