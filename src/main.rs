//! github-plugin - GitHub REST normalizing proxy

use clap::Parser;
use clap::builder::FalseyValueParser;
use github_rest_plugin::config::{Config, ConfigOverrides};
use github_rest_plugin::server;
use github_rest_plugin::utils::logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Normalizing proxy between a reconciliation controller and the GitHub REST API
#[derive(Debug, Parser)]
#[command(name = "github-plugin", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "GITHUB_PLUGIN_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(
        long,
        env = "DEBUG",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    debug: Option<bool>,

    /// Disable colored log output
    #[arg(
        long,
        env = "NO_COLOR",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    no_color: Option<bool>,

    /// Base URL of the upstream REST API
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            debug: self.debug,
            no_color: self.no_color,
            base_url: self.github_api_url.clone(),
        }
    }
}

async fn load_config(cli: &Cli) -> github_rest_plugin::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    config.with_overrides(cli.overrides())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.logging);

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server exited with an error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
