use serde::Deserialize;
use services::room_service::{PriceInput, UpdateRoom};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAvailabilityRequest {
    pub room_id: i64,
}

/// Body of `PUT /rooms/{room_id}`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub room_type: Option<String>,
    pub price_per_night: Option<PriceInput>,
    pub amenities: Option<Vec<String>>,
}

impl From<UpdateRoomRequest> for UpdateRoom {
    fn from(req: UpdateRoomRequest) -> Self {
        UpdateRoom {
            room_type: req.room_type,
            price_per_night: req.price_per_night,
            amenities: req.amenities,
        }
    }
}
