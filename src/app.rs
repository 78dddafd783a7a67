use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contact::{get_contact, list_contacts, submit_contact},
        health::{api_info, health},
        responses::{create_response, list_responses},
        static_files::{asset, index, page},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/", get(api_info))
        .route("/contact", post(submit_contact))
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}", get(get_contact))
        .route(
            "/contacts/{id}/responses",
            get(list_responses).post(create_response),
        )
        .route("/health", get(health))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/assets/{*path}", get(asset))
        .route("/{page}", get(page))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
