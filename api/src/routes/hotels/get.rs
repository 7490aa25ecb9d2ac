use crate::{
    auth::AuthUser,
    routes::common::{HotelPayload, failure, hotel_service, ok},
};
use axum::{Extension, extract::State, response::Response};
use util::state::AppState;

/// GET /api/hotels/owner
///
/// The hotel registered by the caller, or `success: false` with `"No Hotel found"`.
pub async fn get_owner_hotel(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> Response {
    match hotel_service(&app_state).owner_hotel(claims.sub).await {
        Ok(hotel) => ok(
            HotelPayload {
                hotel: hotel.into(),
            },
            "Hotel fetched successfully",
        ),
        Err(err) => failure(err),
    }
}
