use crate::{
    auth::AuthUser,
    routes::{
        common::{RoomPayload, failure, invalid_body, invalid_form, ok, room_service},
        rooms::common::ToggleAvailabilityRequest,
    },
};
use axum::{
    Extension, Json,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
        rejection::JsonRejection,
    },
    response::Response,
};
use services::{ServiceError, room_service::CreateRoom};
use util::{media::UploadFile, state::AppState};

/// POST /api/rooms
///
/// Create a room for the caller's hotel. Images are uploaded to the media host
/// before the room is stored; if any upload fails nothing is stored.
///
/// ### Request Body (Multipart Form Data)
/// - `roomType` (string, required)
/// - `pricePerNight` (string, required): numeric text, e.g. `"100"`
/// - `amenities` (string): JSON array of labels, e.g. `["wifi","breakfast"]`
/// - `images` (file, repeated): room photos, kept in upload order
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "Room created successfully",
///   "room": { "id": 1, "hotelId": 3, "roomType": "Double Bed", "pricePerNight": 100.0, ... }
/// }
/// ```
///
/// - `200 OK` with `success: false` when the caller has no hotel, a field is
///   invalid, or an upload fails
/// ```json
/// { "success": false, "message": "No Hotel found" }
/// ```
pub async fn create_room(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return invalid_form(rejection),
    };

    let input = match read_room_form(multipart).await {
        Ok(input) => input,
        Err(err) => return failure(err),
    };

    match room_service(&app_state).create_room(claims.sub, input).await {
        Ok(room) => ok(RoomPayload { room: room.into() }, "Room created successfully"),
        Err(err) => failure(err),
    }
}

async fn read_room_form(mut multipart: Multipart) -> Result<CreateRoom, ServiceError> {
    let mut input = CreateRoom::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(error = %err, "Malformed multipart body");
                return Err(ServiceError::validation("Invalid form data"));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "roomType" | "pricePerNight" | "amenities" => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| ServiceError::validation(format!("Invalid value for {name}")))?;
                match name.as_str() {
                    "roomType" => input.room_type = value,
                    "pricePerNight" => input.price_per_night = value,
                    _ => input.amenities = value,
                }
            }
            "images" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ServiceError::validation("Failed to read uploaded image"))?;
                if bytes.is_empty() {
                    continue;
                }
                input.images.push(UploadFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => continue,
        }
    }

    Ok(input)
}

/// POST /api/rooms/toggle-availability
///
/// Flips `isAvailable` on one of the caller's rooms.
///
/// ### Request Body
/// ```json
/// { "roomId": 7 }
/// ```
///
/// ### Responses
/// - `200 OK` with `"message": "Room availability Updated"` and the updated `room`
/// - `200 OK` with `success: false` and `"Room not found"`, `"Hotel not found"`
///   or `"Not authorized to update this room"`
pub async fn toggle_availability(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    req: Result<Json<ToggleAvailabilityRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match req {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match room_service(&app_state)
        .toggle_availability(claims.sub, req.room_id)
        .await
    {
        Ok(room) => ok(RoomPayload { room: room.into() }, "Room availability Updated"),
        Err(err) => failure(err),
    }
}
