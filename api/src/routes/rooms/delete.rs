use crate::{
    auth::AuthUser,
    response::Empty,
    routes::common::{failure, invalid_id, ok, room_service},
};
use axum::{
    Extension,
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};
use util::state::AppState;

/// DELETE /api/rooms/{room_id}
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "message": "Room deleted successfully" }
/// ```
/// - `200 OK` with `success: false` and `"Room not found"`, `"Hotel not found"`,
///   `"Invalid room id"` or `"Not authorized to delete this room"`
pub async fn delete_room(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    room_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(room_id) = match room_id {
        Ok(path) => path,
        Err(rejection) => return invalid_id(rejection),
    };

    match room_service(&app_state).delete_room(claims.sub, room_id).await {
        Ok(()) => ok(Empty {}, "Room deleted successfully"),
        Err(err) => failure(err),
    }
}
