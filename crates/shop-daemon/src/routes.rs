//! Axum router and all HTTP handlers for shop-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Bodies are taken as raw bytes and decoded here so every
//! malformed payload is a 400, whatever the content type.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shop_schemas::{CartItem, Order};
use tracing::{debug, info};

use crate::{
    api_types::{CartQuery, HealthResponse},
    decode::decode_body,
    error::ApiError,
    state::AppState,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (tracing) are **not** applied here; `main.rs` attaches
/// them after this call so tests can use the bare router. Request bodies are
/// not size-limited.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/cart",
            get(cart_get).post(cart_post).fallback(method_not_allowed),
        )
        .route("/checkout", post(checkout).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_user_id(pairs: &[(String, String)]) -> Result<String, ApiError> {
    CartQuery::from_pairs(pairs)
        .user_id
        .ok_or(ApiError::MISSING_USER_ID)
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service.to_string(),
            version: st.build.version.to_string(),
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /cart?user_id=
// ---------------------------------------------------------------------------

pub(crate) async fn cart_get(
    State(st): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let user_id = require_user_id(&params)?;
    let items = st.store.cart(&user_id).await;
    debug!(%user_id, items = items.len(), "cart/get");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /cart?user_id=
// ---------------------------------------------------------------------------

pub(crate) async fn cart_post(
    State(st): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let user_id = require_user_id(&params)?;
    let item: CartItem = decode_body(&body)?;

    info!(%user_id, product_id = %item.product_id, quantity = item.quantity, "cart/append");
    st.store.append_item(&user_id, item).await;
    Ok(StatusCode::CREATED)
}

// ---------------------------------------------------------------------------
// POST /checkout
// ---------------------------------------------------------------------------

pub(crate) async fn checkout(
    State(st): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let draft: Order = decode_body(&body)?;
    let order = st.store.place_order(draft).await;

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        items = order.items.len(),
        total = order.total,
        "checkout"
    );
    Ok((StatusCode::CREATED, Json(order)))
}
