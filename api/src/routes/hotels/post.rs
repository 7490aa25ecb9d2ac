use crate::{
    auth::AuthUser,
    routes::common::{HotelPayload, failure, hotel_service, invalid_body, ok},
};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;
use services::{ServiceError, hotel_service::RegisterHotel};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterHotelRequest {
    #[validate(length(min = 1, message = "Hotel name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    #[serde(default)]
    pub address: String,
    #[validate(length(min = 1, message = "Contact is required"))]
    #[serde(default)]
    pub contact: String,
    #[validate(length(min = 1, message = "City is required"))]
    #[serde(default)]
    pub city: String,
}

impl RegisterHotelRequest {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            contact: self.contact.trim().to_string(),
            city: self.city.trim().to_string(),
        }
    }
}

/// POST /api/hotels
///
/// Registers a hotel owned by the caller. One hotel per owner.
///
/// ### Request Body
/// ```json
/// { "name": "Alpine Lodge", "address": "2 Peak St", "contact": "+41 000", "city": "Zermatt" }
/// ```
///
/// ### Responses
/// - `200 OK` with `"message": "Hotel Registered Successfully"` and the `hotel`
/// - `200 OK` with `success: false` and `"Hotel Already Registered"`,
///   `"User not found"` or the validation messages
pub async fn register_hotel(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    req: Result<Json<RegisterHotelRequest>, JsonRejection>,
) -> Response {
    let req = match req {
        Ok(Json(req)) => req.trimmed(),
        Err(rejection) => return invalid_body(rejection),
    };
    if let Err(errors) = req.validate() {
        return failure(ServiceError::validation(::common::format_validation_errors(
            &errors,
        )));
    }

    let input = RegisterHotel {
        name: req.name,
        address: req.address,
        contact: req.contact,
        city: req.city,
    };

    match hotel_service(&app_state).register_hotel(claims.sub, input).await {
        Ok(hotel) => ok(
            HotelPayload {
                hotel: hotel.into(),
            },
            "Hotel Registered Successfully",
        ),
        Err(err) => failure(err),
    }
}
