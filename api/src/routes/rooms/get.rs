use crate::{
    auth::AuthUser,
    routes::common::{RoomsPayload, failure, ok, room_service},
};
use axum::{Extension, extract::State, response::Response};
use util::state::AppState;

/// GET /api/rooms
///
/// Public listing of every available room, newest first. Each room carries
/// its hotel and the hotel's owner (`id`, `username`, `image`).
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Rooms fetched successfully",
///   "rooms": [
///     {
///       "id": 4,
///       "roomType": "Suite",
///       "hotel": { "id": 1, "name": "Alpine Lodge", "owner": { "id": 2, "username": "alice", "image": null }, ... },
///       ...
///     }
///   ]
/// }
/// ```
pub async fn get_rooms(State(app_state): State<AppState>) -> Response {
    match room_service(&app_state).list_available_rooms().await {
        Ok(rooms) => ok(
            RoomsPayload {
                rooms: rooms.into_iter().map(Into::into).collect(),
            },
            "Rooms fetched successfully",
        ),
        Err(err) => failure(err),
    }
}

/// GET /api/rooms/owner
///
/// All rooms of the caller's hotel, available or not, newest first.
pub async fn get_owner_rooms(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match room_service(&app_state).list_owner_rooms(claims.sub).await {
        Ok(rooms) => ok(
            RoomsPayload {
                rooms: rooms.into_iter().map(Into::into).collect(),
            },
            "Rooms fetched successfully",
        ),
        Err(err) => failure(err),
    }
}
