//! # holocrond: holocron daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`holocron.toml` + environment variables)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use holocron_adapter_http_axum::state::AppState;
use holocron_adapter_storage_sqlite_sqlx::{
    SqliteFavoriteRepository, SqlitePersonRepository, SqlitePlanetRepository,
    SqliteUserRepository,
};
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::person_service::PersonService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = holocron_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let planet_repo = SqlitePlanetRepository::new(pool.clone());
    let person_repo = SqlitePersonRepository::new(pool.clone());
    let favorite_repo = SqliteFavoriteRepository::new(pool);

    // HTTP
    let state = AppState::new(
        UserService::new(user_repo),
        PlanetService::new(planet_repo),
        PersonService::new(person_repo),
        FavoriteService::new(favorite_repo),
    );
    let app = holocron_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "holocrond listening");

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("holocrond stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. If the handler cannot be installed the
/// future never resolves, so the server keeps running.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_resolve_when_signal_fires() {
        wait_for_shutdown(async { Ok(()) }).await;
    }

    #[tokio::test]
    async fn should_keep_serving_when_signal_handler_fails() {
        let shutdown = wait_for_shutdown(async {
            Err(std::io::Error::other("signal handler unavailable"))
        });

        tokio::select! {
            biased;
            () = shutdown => panic!("shutdown resolved without a signal"),
            () = tokio::task::yield_now() => {}
        }
    }
}
