//! Room routes.
//!
//! - `POST /rooms` create a room for the caller's hotel (multipart, auth)
//! - `GET /rooms` public listing of available rooms
//! - `GET /rooms/owner` rooms of the caller's hotel (auth)
//! - `POST /rooms/toggle-availability` flip a room's availability (auth)
//! - `PUT /rooms/{room_id}` partial update (auth)
//! - `DELETE /rooms/{room_id}` remove a room (auth)

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::{config, state::AppState};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_room;
use get::{get_owner_rooms, get_rooms};
use post::{create_room, toggle_availability};
use put::update_room;

pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_room)
                .layer(DefaultBodyLimit::max(config::max_upload_bytes()))
                .route_layer(from_fn(allow_authenticated)),
        )
        .route("/", get(get_rooms))
        .route(
            "/owner",
            get(get_owner_rooms).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/toggle-availability",
            post(toggle_availability).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{room_id}",
            put(update_room).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{room_id}",
            delete(delete_room).route_layer(from_fn(allow_authenticated)),
        )
}
