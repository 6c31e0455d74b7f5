use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::db::{DataClients, DatabaseConfig};
use service::cache::PageCache;
use service::invalidation::{InvalidationSink, RouteInvalidator};

use crate::errors::StartupError;
use crate::render;
use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_config() -> Result<configs::AppConfig, StartupError> {
    // Missing config file is fine, env vars fill the gaps.
    let mut cfg = configs::load_default().unwrap_or_default();
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Bind address from config, with env var overrides.
fn load_bind_addr(server: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| server.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(server.port);
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e: std::net::AddrParseError| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging();

    common::env::ensure_env("admin-ui").await?;

    let cfg = load_config()?;

    let db_cfg = DatabaseConfig::from_settings(&cfg.database);
    let clients = DataClients::connect(&db_cfg).await?;

    let cache = PageCache::new(cfg.cache.max_pages, Duration::from_secs(cfg.cache.ttl_secs));
    let invalidator: Arc<dyn InvalidationSink> = Arc::new(RouteInvalidator::new(cache.clone()));
    let hb = Arc::new(render::get_handlebars()?);

    let state = ServerState { clients, cache, invalidator, hb };

    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, "starting site server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
