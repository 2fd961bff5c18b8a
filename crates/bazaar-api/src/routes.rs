//! # Routes
//!
//! Axum router configuration for the storefront API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /api/items-list - List items (with artificial delay)
/// - GET  /api/items-list/{item_id} - Get one item
/// - POST /api/items - Store a new item
/// - POST /api/create-checkout-session - Create a Stripe checkout session
pub fn create_router(state: AppState) -> Router {
    // Single-origin CORS, scoped to the storefront frontend
    let origin = state
        .config
        .frontend_origin
        .parse::<HeaderValue>()
        .expect("FRONTEND_ORIGIN is not a valid header value");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let api_routes = Router::new()
        .route("/items-list", get(handlers::list_items))
        .route("/items-list/{item_id}", get(handlers::get_item))
        .route("/items", post(handlers::create_item))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session),
        );

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        // Storefront API
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
