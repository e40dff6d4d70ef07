//! Common test utilities for github-rest-plugin

pub mod assertions;

use actix_web::web;
use github_rest_plugin::config::{Config, UpstreamConfig};
use github_rest_plugin::server::AppState;
use wiremock::MockServer;

pub use assertions::{read_json, read_text};

/// Credential sent by tests; upstream mocks require it to be forwarded
pub const TOKEN: &str = "token ghp_test";

/// Configuration pointing at the mock upstream
pub fn config_for(server: &MockServer, page_size: u32) -> Config {
    Config {
        upstream: UpstreamConfig {
            base_url: server.uri(),
            invitations_page_size: page_size,
            readiness_timeout: 2,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mock upstream plus application state wired to it
pub async fn setup() -> (MockServer, web::Data<AppState>) {
    setup_with_page_size(30).await
}

pub async fn setup_with_page_size(page_size: u32) -> (MockServer, web::Data<AppState>) {
    let server = MockServer::start().await;
    let state = AppState::new(config_for(&server, page_size)).expect("valid test config");
    state.service.mark_started();
    (server, web::Data::new(state))
}
