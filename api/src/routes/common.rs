//! Response DTOs and helpers shared by the room and hotel route groups.

use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{hotel::Model as HotelModel, room::Model as RoomModel, user::Model as UserModel};
use serde::Serialize;
use services::{
    ServiceError, hotel_service::HotelService,
    room_service::{RoomListing, RoomService},
};
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    pub id: i64,
    pub username: String,
    pub image: Option<String>,
}

impl From<UserModel> for OwnerResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image: user.image,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerResponse>,
    pub created_at: String,
}

impl From<HotelModel> for HotelResponse {
    fn from(hotel: HotelModel) -> Self {
        Self {
            id: hotel.id,
            owner_id: hotel.owner_id,
            name: hotel.name,
            address: hotel.address,
            city: hotel.city,
            contact: hotel.contact,
            owner: None,
            created_at: hotel.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i64,
    pub hotel_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<HotelResponse>,
    pub room_type: String,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub is_available: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RoomModel> for RoomResponse {
    fn from(room: RoomModel) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            hotel: None,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            amenities: room.amenities.into_inner(),
            images: room.images.into_inner(),
            is_available: room.is_available,
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

impl From<RoomListing> for RoomResponse {
    fn from(listing: RoomListing) -> Self {
        let hotel = listing.hotel.map(|hotel| {
            let mut hotel = HotelResponse::from(hotel);
            hotel.owner = listing.owner.map(OwnerResponse::from);
            hotel
        });

        Self {
            hotel,
            ..RoomResponse::from(listing.room)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomsPayload {
    pub rooms: Vec<RoomResponse>,
}

#[derive(Debug, Serialize)]
pub struct RoomPayload {
    pub room: RoomResponse,
}

#[derive(Debug, Serialize)]
pub struct HotelPayload {
    pub hotel: HotelResponse,
}

pub fn room_service(app_state: &AppState) -> RoomService {
    RoomService::new(app_state.db_clone(), app_state.uploader_clone())
}

pub fn hotel_service(app_state: &AppState) -> HotelService {
    HotelService::new(app_state.db_clone())
}

/// `200 OK` with `{ success: true, message, ...data }`.
pub fn ok<T: Serialize>(data: T, message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

/// Logical failures are still `200 OK`; clients branch on `success`.
pub fn failure(err: ServiceError) -> Response {
    match &err {
        ServiceError::Persistence(db_err) => {
            tracing::error!(error = %db_err, "Database failure while handling request")
        }
        _ => tracing::warn!(error = %err, "Request failed"),
    }

    (
        StatusCode::OK,
        Json(ApiResponse::<Empty>::error(err.to_string())),
    )
        .into_response()
}

/// A path segment that is not a valid id.
pub fn invalid_id(rejection: PathRejection) -> Response {
    tracing::debug!(reason = %rejection.body_text(), "Rejected path");
    failure(ServiceError::validation("Invalid room id"))
}

/// A JSON body that is missing, malformed or of the wrong shape.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    failure(ServiceError::validation(format!(
        "Invalid request body: {}",
        rejection.body_text()
    )))
}

pub fn invalid_form(rejection: MultipartRejection) -> Response {
    failure(ServiceError::validation(format!(
        "Invalid form data: {}",
        rejection.body_text()
    )))
}
