//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, cookies, metrics)
//! - Build the upstream clients and the session store shared by handlers
//! - Bind server to listener, sweep expired sessions, stop on shutdown

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::session::{self, MemorySessionStore, SessionCookies, SessionStore};
use crate::upstream::{self, GameDataClient, PlayerClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub game_data: GameDataClient,
    pub players: PlayerClient,
    pub sessions: Arc<dyn SessionStore>,
    pub cookies: SessionCookies,
}

impl AppState {
    /// Build clients from `config`. The cookie signing key is freshly random.
    pub fn new(config: &AppConfig, sessions: Arc<dyn SessionStore>) -> UpstreamResult<Self> {
        let client = upstream::build_http_client(&config.upstream, &config.timeouts)?;

        Ok(Self {
            game_data: GameDataClient::new(client.clone(), &config.upstream),
            players: PlayerClient::new(client, &config.upstream, &config.riot),
            sessions,
            cookies: SessionCookies::with_random_key(
                config.session.cookie_name.clone(),
                config.session.ttl(),
            ),
        })
    }
}

/// HTTP server for the application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    sessions: Arc<dyn SessionStore>,
}

impl HttpServer {
    /// Create a server backed by an in-memory session store.
    pub fn new(config: AppConfig) -> UpstreamResult<Self> {
        let sessions = MemorySessionStore::with_ttl(config.session.ttl());
        Self::with_session_store(config, Arc::new(sessions))
    }

    /// Create a server with a caller-provided session store.
    pub fn with_session_store(
        config: AppConfig,
        sessions: Arc<dyn SessionStore>,
    ) -> UpstreamResult<Self> {
        let state = AppState::new(&config, sessions.clone())?;
        let router = build_router(&config, state);
        Ok(Self {
            router,
            config,
            sessions,
        })
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let sweeper = session::spawn_sweeper(
            self.sessions,
            self.config.session.sweep_interval(),
            shutdown.clone(),
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.notified())
            .await?;

        // Also stops the sweeper when serve ended on its own
        shutdown.trigger();
        let _ = sweeper.await;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &AppConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::top))
        .route("/set_user", post(handlers::set_user))
        .route("/index", get(handlers::index))
        .route("/champion/{short_id}/{key}", get(handlers::champion))
        .route("/search", get(handlers::search_redirect).post(handlers::search))
        .route("/logout", get(handlers::logout))
        .route_layer(middleware::from_fn(metrics::track_requests))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CookieManagerLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
