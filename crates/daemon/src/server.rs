//! Router assembly and the listening loop

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{any, get};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{DaemonError, Result};
use crate::routes;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wee-daemon/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.api.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            settings: Arc::new(settings),
            http,
        })
    }
}

/// HTTP server for the web client
pub struct HttpServer {
    state: AppState,
}

impl HttpServer {
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            state: AppState::new(settings)?,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Build the application router
    pub fn router(&self) -> Router {
        let settings = &self.state.settings;
        let mut app = Router::new()
            .route("/health", get(routes::health_check))
            .route("/wee/{code}", get(routes::resolve_short_link))
            .route("/api/{*path}", any(routes::proxy_api))
            .with_state(self.state.clone());

        let static_dir = Path::new(&settings.server.static_dir);
        if static_dir.is_dir() {
            let index_path = static_dir.join(&settings.server.static_index);
            let serve_dir = ServeDir::new(static_dir);
            app = if index_path.is_file() {
                info!("Serving {} with client-side route fallback", static_dir.display());
                app.fallback_service(serve_dir.fallback(ServeFile::new(index_path)))
            } else {
                warn!(
                    "Index file {} missing, client-side routes will 404",
                    index_path.display()
                );
                app.fallback_service(serve_dir)
            };
        } else {
            warn!(
                "Static directory '{}' does not exist, skipping static file serving",
                static_dir.display()
            );
        }

        app = app.layer(TraceLayer::new_for_http());
        if settings.server.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }
        app
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start(
        &self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let addr = self.state.settings.bind_addr()?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            DaemonError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to bind to {addr}: {e}"),
            ))
        })?;
        info!("HTTP server listening on {addr}");
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("HTTP server stopped");
        Ok(())
    }
}
