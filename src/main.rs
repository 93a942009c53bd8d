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

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;

use greeter_server::{GreeterServer, GreeterServerConfig};

#[derive(Parser)]
#[command(name = "greeter-server")]
#[command(about = "Versioned HTTP API server for user greetings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { config }) => validate_config(config),
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        None => run_server(cli.config, cli.port).await,
    }
}

async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();

    let config = GreeterServerConfig::load_or_default(&config_path)?;
    config.validate()?;

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    info!("Starting Greeter Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());
    debug!("Server configuration: {config:?}");

    let server = GreeterServer::new(config_path, port_override)?;
    server.run().await?;

    Ok(())
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    match GreeterServerConfig::load_from_file(&config_path) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                println!("[OK] Configuration file is valid");
                println!();
                println!("Summary:");
                println!("  Host: {}", config.api.host);
                println!("  Port: {}", config.api.port);
                println!(
                    "  Default API version: {}",
                    config.default_api_version().map_or_else(
                        |_| config.api.default_version.clone(),
                        |v| v.to_string()
                    )
                );
                println!("  Log level: {}", config.server.log_level);
                Ok(())
            }
            Err(e) => {
                println!("[ERROR] Configuration is invalid: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            println!("[ERROR] Failed to parse configuration: {e}");
            std::process::exit(1);
        }
    }
}
