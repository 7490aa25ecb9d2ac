//! Room management for hotel owners, plus the public availability listing.
//!
//! Every mutating operation resolves the caller's hotel first and refuses to
//! touch rooms that belong to another hotel.

use crate::error::ServiceError;
use crate::service::ToActiveModel;
use chrono::Utc;
use db::models::{
    hotel::Model as HotelModel,
    room::{self, ActiveModel as RoomActiveModel, Model as RoomModel},
    user::{self, Model as UserModel},
};
use futures::future::join_all;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use util::media::{MediaUploader, UploadFile, UploadedImage};

/// Raw fields of a room creation request, as received from the client.
#[derive(Debug, Clone, Default)]
pub struct CreateRoom {
    pub room_type: String,
    /// Numeric text, e.g. `"100"`.
    pub price_per_night: String,
    /// JSON array of amenity labels, e.g. `["wifi","breakfast"]`.
    pub amenities: String,
    pub images: Vec<UploadFile>,
}

/// A price as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

/// Partial room update. Omitted or empty fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoom {
    pub room_type: Option<String>,
    pub price_per_night: Option<PriceInput>,
    pub amenities: Option<Vec<String>>,
}

/// A room joined with its hotel and, for the public listing, the hotel owner.
#[derive(Debug, Clone)]
pub struct RoomListing {
    pub room: RoomModel,
    pub hotel: Option<HotelModel>,
    pub owner: Option<UserModel>,
}

struct NewRoom {
    hotel_id: i64,
    room_type: String,
    price_per_night: f64,
    amenities: Vec<String>,
    images: Vec<String>,
}

impl ToActiveModel<room::Entity> for NewRoom {
    async fn into_active_model(self) -> Result<RoomActiveModel, DbErr> {
        let now = Utc::now();
        Ok(RoomActiveModel {
            hotel_id: Set(self.hotel_id),
            room_type: Set(self.room_type),
            price_per_night: Set(self.price_per_night),
            amenities: Set(self.amenities.into()),
            images: Set(self.images.into()),
            is_available: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }
}

/// Validated changes applied on top of an existing room.
struct RoomChanges {
    current: RoomModel,
    room_type: Option<String>,
    price_per_night: Option<f64>,
    amenities: Option<Vec<String>>,
}

impl ToActiveModel<room::Entity> for RoomChanges {
    async fn into_active_model(self) -> Result<RoomActiveModel, DbErr> {
        let mut active: RoomActiveModel = self.current.into();

        if let Some(room_type) = self.room_type {
            active.room_type = Set(room_type);
        }
        if let Some(price) = self.price_per_night {
            active.price_per_night = Set(price);
        }
        if let Some(amenities) = self.amenities {
            active.amenities = Set(amenities.into());
        }

        active.updated_at = Set(Utc::now());
        Ok(active)
    }
}

const PRICE_MESSAGE: &str = "Price per night must be a positive number";

/// Parses a price sent as text. Must be finite and strictly positive.
pub fn parse_price(raw: &str) -> Result<f64, ServiceError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::validation(PRICE_MESSAGE))?;
    check_price(price)
}

fn check_price(price: f64) -> Result<f64, ServiceError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(ServiceError::validation(PRICE_MESSAGE))
    }
}

impl PriceInput {
    /// `None` when the value is empty or zero, meaning "keep the current price".
    pub fn resolve(&self) -> Result<Option<f64>, ServiceError> {
        match self {
            PriceInput::Number(n) if *n == 0.0 => Ok(None),
            PriceInput::Number(n) => check_price(*n).map(Some),
            PriceInput::Text(s) if s.trim().is_empty() => Ok(None),
            PriceInput::Text(s) => parse_price(s).map(Some),
        }
    }
}

/// Parses the JSON-encoded amenity list. A blank value means no amenities.
pub fn parse_amenities(raw: &str) -> Result<Vec<String>, ServiceError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = serde_json::from_str(raw)
        .map_err(|_| ServiceError::validation("Amenities must be a JSON array of strings"))?;
    Ok(clean_labels(labels))
}

/// Trims labels and drops empty ones, keeping order.
pub fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct RoomService {
    db: DatabaseConnection,
    uploader: Arc<dyn MediaUploader>,
}

impl RoomService {
    pub fn new(db: DatabaseConnection, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { db, uploader }
    }

    async fn require_hotel(&self, owner_id: i64, missing: &str) -> Result<HotelModel, ServiceError> {
        HotelModel::find_by_owner(&self.db, owner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(missing))
    }

    /// Loads a room and checks that the caller owns its hotel.
    async fn owned_room(
        &self,
        caller: i64,
        room_id: i64,
        forbidden: &str,
    ) -> Result<RoomModel, ServiceError> {
        let hotel = self.require_hotel(caller, "Hotel not found").await?;

        let room = RoomModel::find_by_id(&self.db, room_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room not found"))?;

        if room.hotel_id != hotel.id {
            tracing::warn!(caller, room_id, hotel_id = room.hotel_id, "Rejected room access by non-owner");
            return Err(ServiceError::forbidden(forbidden));
        }

        Ok(room)
    }

    /// Uploads all files concurrently. On any failure the successful uploads
    /// are removed again and the first failure is returned.
    async fn upload_all(&self, files: Vec<UploadFile>) -> Result<Vec<UploadedImage>, ServiceError> {
        let results = join_all(files.into_iter().map(|file| self.uploader.upload(file))).await;

        let mut uploaded = Vec::with_capacity(results.len());
        let mut first_error = None;
        for result in results {
            match result {
                Ok(image) => uploaded.push(image),
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        if let Some(err) = first_error {
            tracing::warn!(error = %err, uploaded = uploaded.len(), "Image upload failed");
            self.discard(&uploaded).await;
            return Err(ServiceError::Upstream(err.to_string()));
        }

        Ok(uploaded)
    }

    async fn discard(&self, images: &[UploadedImage]) {
        let results = join_all(images.iter().map(|image| self.uploader.destroy(&image.public_id))).await;

        for (image, result) in images.iter().zip(results) {
            if let Err(err) = result {
                tracing::warn!(public_id = %image.public_id, error = %err, "Failed to remove orphaned image");
            }
        }
    }

    pub async fn create_room(&self, caller: i64, input: CreateRoom) -> Result<RoomModel, ServiceError> {
        let room_type = non_blank(Some(input.room_type))
            .ok_or_else(|| ServiceError::validation("Room type is required"))?;
        let price_per_night = parse_price(&input.price_per_night)?;
        let amenities = parse_amenities(&input.amenities)?;

        let hotel = self.require_hotel(caller, "No Hotel found").await?;

        let uploaded = self.upload_all(input.images).await?;

        let draft = NewRoom {
            hotel_id: hotel.id,
            room_type,
            price_per_night,
            amenities,
            images: uploaded.iter().map(|image| image.url.clone()).collect(),
        };

        let saved = match draft.into_active_model().await {
            Ok(active) => active.insert(&self.db).await,
            Err(err) => Err(err),
        };

        match saved {
            Ok(room) => {
                tracing::info!(room_id = room.id, hotel_id = hotel.id, images = uploaded.len(), "Room created");
                Ok(room)
            }
            Err(err) => {
                self.discard(&uploaded).await;
                Err(err.into())
            }
        }
    }

    /// Public listing: available rooms with hotel and owner, newest first.
    pub async fn list_available_rooms(&self) -> Result<Vec<RoomListing>, ServiceError> {
        let rows = RoomModel::find_available_with_hotel(&self.db).await?;

        let mut owner_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, hotel)| hotel.as_ref().map(|h| h.owner_id))
            .collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let owners: HashMap<i64, UserModel> = user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(room, hotel)| {
                let owner = hotel.as_ref().and_then(|h| owners.get(&h.owner_id).cloned());
                RoomListing { room, hotel, owner }
            })
            .collect())
    }

    pub async fn list_owner_rooms(&self, caller: i64) -> Result<Vec<RoomListing>, ServiceError> {
        let hotel = self.require_hotel(caller, "No Hotel found").await?;

        let rows = RoomModel::find_by_hotel_with_hotel(&self.db, hotel.id).await?;

        Ok(rows
            .into_iter()
            .map(|(room, hotel)| RoomListing {
                room,
                hotel,
                owner: None,
            })
            .collect())
    }

    pub async fn toggle_availability(&self, caller: i64, room_id: i64) -> Result<RoomModel, ServiceError> {
        let room = self
            .owned_room(caller, room_id, "Not authorized to update this room")
            .await?;

        let flipped = !room.is_available;
        let mut active: RoomActiveModel = room.into();
        active.is_available = Set(flipped);
        active.updated_at = Set(Utc::now());

        let room = active.update(&self.db).await?;
        tracing::info!(room_id, is_available = room.is_available, "Room availability toggled");
        Ok(room)
    }

    pub async fn update_room(
        &self,
        caller: i64,
        room_id: i64,
        changes: UpdateRoom,
    ) -> Result<RoomModel, ServiceError> {
        let room_type = non_blank(changes.room_type);
        let price_per_night = match &changes.price_per_night {
            Some(price) => price.resolve()?,
            None => None,
        };
        let amenities = changes.amenities.map(clean_labels);

        let current = self
            .owned_room(caller, room_id, "Not authorized to edit this room")
            .await?;

        let active = RoomChanges {
            current,
            room_type,
            price_per_night,
            amenities,
        }
        .into_active_model()
        .await?;

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_room(&self, caller: i64, room_id: i64) -> Result<(), ServiceError> {
        let room = self
            .owned_room(caller, room_id, "Not authorized to delete this room")
            .await?;

        room::Entity::delete_by_id(room.id).exec(&self.db).await?;
        tracing::info!(room_id, "Room deleted");
        Ok(())
    }
}
