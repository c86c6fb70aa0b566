//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, optional seeding, and the Axum
//! server lifecycle.

use crate::application::seeder::{Seeder, USUARIOS_SEED_COUNT, VENTAS_SEED_COUNT};
use crate::config::Config;
use crate::infrastructure::persistence::{PgUsuarioRepository, PgVentaRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Fake data, when `SEED_ON_STARTUP` is set
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);

    if config.seed_on_startup {
        seed(pool.clone()).await?;
    }

    let state = AppState::from_pool(pool, &config);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(service = %config.service, "Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the connection pool from the configured limits.
async fn connect(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Fills empty tables with fake usuarios, then fake ventas for them.
async fn seed(pool: Arc<PgPool>) -> Result<()> {
    let seeder = Seeder::new(
        Arc::new(PgUsuarioRepository::new(pool.clone())),
        Arc::new(PgVentaRepository::new(pool)),
    );
    let mut rng = rand::rng();

    seeder
        .seed_usuarios(&mut rng, USUARIOS_SEED_COUNT)
        .await
        .context("Failed to seed usuarios")?;
    seeder
        .seed_ventas(
            &mut rng,
            VENTAS_SEED_COUNT,
            chrono::Local::now().date_naive(),
        )
        .await
        .context("Failed to seed ventas")?;

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
