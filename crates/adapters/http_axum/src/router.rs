//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use holocron_app::ports::{
    FavoriteRepository, PersonRepository, PlanetRepository, UserRepository,
};

use crate::state::AppState;

/// The served application: the router wrapped so that `/planets/` and
/// `/planets` resolve to the same route.
pub type App = NormalizePath<Router>;

/// Build the top-level application.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] for browser clients.
///
/// Trailing slashes are trimmed before routing, which has to happen outside
/// the [`Router`] to affect route matching. Serve the result with
/// `axum::ServiceExt::<axum::extract::Request>::into_make_service`.
pub fn build<UR, PLR, PER, FR>(state: AppState<UR, PLR, PER, FR>) -> App
where
    UR: UserRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    PER: PersonRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(crate::sitemap::index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn health_check() -> &'static str {
    "OK"
}
