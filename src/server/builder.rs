//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{ProxyError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ProxyError::config("Configuration is required"))?;
        config.validate()?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(version = crate::VERSION, "Starting GitHub REST plugin");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        upstream = %server.state().github.base_url(),
        "Server starting at http://{}",
        server.config().address()
    );
    info!("   GET    /repository/{{owner}}/{{repo}}/collaborators/{{username}}/permission");
    info!("   POST   /repository/{{owner}}/{{repo}}/collaborators/{{username}}");
    info!("   PATCH  /repository/{{owner}}/{{repo}}/collaborators/{{username}}");
    info!("   DELETE /repository/{{owner}}/{{repo}}/collaborators/{{username}}");
    info!("   GET    /teamrepository/orgs/{{org}}/teams/{{team_slug}}/repos/{{owner}}/{{repo}}");
    info!("   GET    /healthz, /readyz");

    server.start().await
}
