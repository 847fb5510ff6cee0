//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use logins_common::{AppConfig, AppError, AppResult};
use logins_db::{
    create_pool, ensure_schema, statement_timeout_from_millis, DatabaseConfig, PgLoginRepository,
};
use logins_service::ServiceContextBuilder;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        statement_timeout: statement_timeout_from_millis(config.database.statement_timeout_ms),
        ..Default::default()
    };
    let pool = create_pool(&db_config).await.map_err(AppError::database)?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool).await.map_err(AppError::database)?;

    let login_repo = PgLoginRepository::with_defaults(pool.clone())
        .with_window(config.pagination.window);
    info!(window = %login_repo.window(), "Login repository ready");

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .login_repo(Arc::new(login_repo))
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl+C
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    if let Ok(local) = listener.local_addr() {
        info!("Server listening on http://{}", local);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, draining connections");
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
