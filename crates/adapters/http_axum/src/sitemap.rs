//! Route map served at `/`.

use axum::Json;
use serde::Serialize;

/// Every public route, as `(method, path)`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("GET", "/user/{id}"),
    ("DELETE", "/user/{id}"),
    ("GET", "/user/favorites/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/peoples"),
    ("POST", "/peoples"),
    ("GET", "/peoples/{id}"),
    ("DELETE", "/peoples/{id}"),
    ("POST", "/favorite/planet"),
    ("DELETE", "/favorite/planet/{planet_id}"),
    ("POST", "/favorite/people"),
    ("DELETE", "/favorite/people/{people_id}"),
];

#[derive(Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
}

/// `GET /`
pub async fn index() -> Json<Sitemap> {
    let endpoints = ROUTES
        .iter()
        .map(|&(method, path)| Endpoint { method, path })
        .collect();
    Json(Sitemap { endpoints })
}
