//! Hotel routes, all authenticated.
//!
//! - `POST /hotels` register the caller's hotel
//! - `GET /hotels/owner` the caller's hotel

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use util::state::AppState;

pub mod get;
pub mod post;

use get::get_owner_hotel;
use post::register_hotel;

pub fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_hotel))
        .route("/owner", get(get_owner_hotel))
        .route_layer(from_fn(allow_authenticated))
}
