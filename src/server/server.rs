//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its lifecycle.

use crate::config::{Config, ServerConfig};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::{AppState, ServiceState};
use crate::utils::error::{ProxyError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::new(config.clone())?;

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "github-rest-plugin")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and serve until a termination signal arrives
    ///
    /// On SIGINT/SIGTERM readiness drops first, in-flight requests get up to
    /// `shutdown_timeout` seconds to finish, then liveness drops.
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let service = Arc::clone(&self.state.service);

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(self.config.client_request_timeout())
            .keep_alive(self.config.keep_alive())
            .shutdown_timeout(self.config.shutdown_timeout)
            .disable_signals();
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| ProxyError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();
        let handle = server.handle();
        tokio::pin!(server);

        service.mark_started();
        info!("HTTP server listening on {}", bind_addr);

        tokio::select! {
            result = &mut server => {
                service.mark_stopped();
                result?;
            }
            _ = shutdown_signal() => {
                info!("Shutdown signal received, draining in-flight requests");
                service.begin_shutdown();
                let (result, ()) = tokio::join!(&mut server, handle.stop(true));
                service.mark_stopped();
                result?;
            }
        }

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Probe flags, shared with the running server
    pub fn service(&self) -> Arc<ServiceState> {
        Arc::clone(&self.state.service)
    }
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
