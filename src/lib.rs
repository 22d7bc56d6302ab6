pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::services::CsvStore;

/// Build the application router over an initialized store.
pub fn app(store: CsvStore) -> Router {
    // Wide-open CORS is the intended default; clients are served from
    // arbitrary origins. Wildcard origins cannot be combined with
    // credentials, so none are allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login/", post(handlers::login))
        .route("/create_user/", post(handlers::create_user))
        .route("/create_task/", post(handlers::create_task))
        .route("/get_tasks/", get(handlers::get_tasks))
        .layer(cors)
        .with_state(store)
}
