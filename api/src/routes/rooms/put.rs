use crate::{
    auth::AuthUser,
    routes::{
        common::{RoomPayload, failure, invalid_body, invalid_id, ok, room_service},
        rooms::common::UpdateRoomRequest,
    },
};
use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Response,
};
use util::state::AppState;

/// PUT /api/rooms/{room_id}
///
/// Partial update. Omitted, blank or zero values keep the stored value.
///
/// ### Request Body
/// ```json
/// { "roomType": "Suite", "pricePerNight": "180", "amenities": ["wifi", "spa"] }
/// ```
pub async fn update_room(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    room_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<UpdateRoomRequest>, JsonRejection>,
) -> Response {
    let Path(room_id) = match room_id {
        Ok(path) => path,
        Err(rejection) => return invalid_id(rejection),
    };
    let Json(req) = match req {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match room_service(&app_state)
        .update_room(claims.sub, room_id, req.into())
        .await
    {
        Ok(room) => ok(RoomPayload { room: room.into() }, "Room updated successfully"),
        Err(err) => failure(err),
    }
}
