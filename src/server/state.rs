//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::github::GitHubClient;
use crate::utils::error::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness and readiness flags reported by the probe endpoints
#[derive(Debug, Default)]
pub struct ServiceState {
    healthy: AtomicBool,
    ready: AtomicBool,
}

impl ServiceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener is bound and serving
    pub fn mark_started(&self) {
        self.healthy.store(true, Ordering::SeqCst);
        self.ready.store(true, Ordering::SeqCst);
    }

    /// Stop taking new traffic; liveness stays up while in-flight requests drain
    pub fn begin_shutdown(&self) {
        self.ready.store(false, Ordering::SeqCst);
    }

    /// Server has fully stopped
    pub fn mark_stopped(&self) {
        self.ready.store(false, Ordering::SeqCst);
        self.healthy.store(false, Ordering::SeqCst);
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// HTTP server state shared across handlers
///
/// Cheap to clone: the client pools connections internally and the rest is
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Plugin configuration (shared read-only)
    pub config: Arc<Config>,
    /// Upstream API client
    pub github: GitHubClient,
    /// Probe flags
    pub service: Arc<ServiceState>,
}

impl AppState {
    /// Create a new AppState with fresh probe flags
    pub fn new(config: Config) -> Result<Self> {
        Self::with_service(config, Arc::new(ServiceState::new()))
    }

    /// Create a new AppState sharing existing probe flags
    pub fn with_service(config: Config, service: Arc<ServiceState>) -> Result<Self> {
        let github = GitHubClient::new(&config.upstream)?;
        Ok(Self {
            config: Arc::new(config),
            github,
            service,
        })
    }

    /// Get plugin configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
