//! # Request Handlers
//!
//! Axum request handlers for the storefront API: item listing and
//! creation over the item store, checkout session creation over the
//! payment gateway.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bazaar_core::{assemble_line_items, BazaarError, BazaarResult, CartLine, Item};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout request
#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Cart lines to turn into provider line items
    pub items: Vec<CartLine>,
}

/// Items list response
#[derive(Debug, Serialize)]
pub struct ItemsListResponse {
    pub items: Vec<Item>,
}

/// Get-item response. A miss keeps the 200 status and omits the field
/// entirely, which clients probe with `'item' in body`.
#[derive(Debug, Serialize)]
pub struct ItemLookupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// Create-item response
#[derive(Debug, Serialize)]
pub struct ItemStoredResponse {
    pub message: &'static str,
    pub item: Item,
}

/// Checkout session response: the session id alone, the frontend
/// redirects through Stripe.js
#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Fixed body for any checkout failure. Provider detail goes to the
/// logs, never to the browser.
const CHECKOUT_FAILED: &str = "Failed to create checkout session";

fn storage_error(err: &BazaarError) -> (StatusCode, Json<ErrorBody>) {
    error!("item store failure: {}", err);
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bazaar",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all items.
///
/// Holds the response for the configured delay so the storefront's
/// loading states stay exercised during development.
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ItemsListResponse>, (StatusCode, Json<ErrorBody>)> {
    let items = state.store.read().await.map_err(|e| storage_error(&e))?;

    if !state.config.list_delay.is_zero() {
        tokio::time::sleep(state.config.list_delay).await;
    }

    Ok(Json(ItemsListResponse { items }))
}

/// Get a single item by id.
///
/// A miss is not an error: the status stays 200 and the `item` field
/// is omitted.
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemLookupResponse>, (StatusCode, Json<ErrorBody>)> {
    let items = state.store.read().await.map_err(|e| storage_error(&e))?;
    let item = items.into_iter().find(|item| item.id == item_id);

    Ok(Json(ItemLookupResponse { item }))
}

/// Store a new item.
///
/// Accepts any JSON object, stamps a fresh id over whatever the client
/// sent, and prepends the item to the collection.
#[instrument(skip(state, fields))]
pub async fn create_item(
    State(state): State<AppState>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<ItemStoredResponse>), (StatusCode, Json<ErrorBody>)> {
    let item = Item::with_fresh_id(fields);
    info!("storing new item: id={}", item.id);

    let to_insert = item.clone();
    state
        .store
        .update(Box::new(move |mut items| {
            items.insert(0, to_insert);
            items
        }))
        .await
        .map_err(|e| storage_error(&e))?;

    Ok((
        StatusCode::CREATED,
        Json(ItemStoredResponse {
            message: "Stored new item.",
            item,
        }),
    ))
}

/// Create a Stripe checkout session for a cart.
///
/// The body is decoded inside the handler so that malformed carts and
/// gateway failures share one path: log the cause, answer with the
/// fixed 500 body.
#[instrument(skip(state, body))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SessionCreatedResponse>, (StatusCode, Json<ErrorBody>)> {
    match checkout_session_for(&state, body).await {
        Ok(session_id) => Ok(Json(SessionCreatedResponse { id: session_id })),
        Err(err) => {
            error!("checkout session creation failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: CHECKOUT_FAILED.to_string(),
                }),
            ))
        }
    }
}

async fn checkout_session_for(state: &AppState, body: Value) -> BazaarResult<String> {
    let request: CreateCheckoutRequest = serde_json::from_value(body)
        .map_err(|e| BazaarError::InvalidRequest(format!("malformed cart: {}", e)))?;

    let line_items = assemble_line_items(&request.items, &state.policy);

    info!(
        "creating checkout session: {} cart lines, {} line items",
        request.items.len(),
        line_items.len()
    );

    let session = state
        .gateway
        .create_session(&line_items, &state.urls)
        .await?;

    info!("created checkout session: {}", session.session_id);
    Ok(session.session_id)
}
