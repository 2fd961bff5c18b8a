//! # bazaar-api
//!
//! HTTP API layer for bazaar-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the item collection and checkout
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/items-list` | List items |
//! | GET | `/api/items-list/{id}` | Get item by id |
//! | POST | `/api/items` | Store a new item |
//! | POST | `/api/create-checkout-session` | Create checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
