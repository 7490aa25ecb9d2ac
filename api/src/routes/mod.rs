//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/rooms` → Room listings; browsing is public, management requires a token
//! - `/hotels` → Hotel registration for owners (authenticated)

use crate::routes::{health::health_routes, hotels::hotel_routes, rooms::room_routes};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod health;
pub mod hotels;
pub mod rooms;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has its state applied and is ready to be nested
/// under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/rooms", room_routes())
        .nest("/hotels", hotel_routes())
        .with_state(app_state)
}
