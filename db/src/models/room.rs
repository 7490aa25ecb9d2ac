use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, QueryOrder};
use serde::{Deserialize, Serialize};

use super::hotel;

/// Ordered list of labels stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl StringList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// A bookable room belonging to exactly one hotel.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub hotel_id: i64,
    /// Free-text category, e.g. "Double Bed".
    pub room_type: String,
    pub price_per_night: f64,
    #[sea_orm(column_type = "Json")]
    pub amenities: StringList,
    /// Hosted image URLs in upload order.
    #[sea_orm(column_type = "Json")]
    pub images: StringList,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id",
        on_delete = "Cascade"
    )]
    Hotel,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts an available room.
    pub async fn create(
        db: &DbConn,
        hotel_id: i64,
        room_type: &str,
        price_per_night: f64,
        amenities: Vec<String>,
        images: Vec<String>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let room = ActiveModel {
            hotel_id: Set(hotel_id),
            room_type: Set(room_type.to_owned()),
            price_per_night: Set(price_per_night),
            amenities: Set(amenities.into()),
            images: Set(images.into()),
            is_available: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        room.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Available rooms with their hotel, newest first.
    pub async fn find_available_with_hotel(
        db: &DbConn,
    ) -> Result<Vec<(Model, Option<hotel::Model>)>, DbErr> {
        Entity::find()
            .filter(Column::IsAvailable.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .find_also_related(hotel::Entity)
            .all(db)
            .await
    }

    /// Every room of one hotel with the hotel attached, newest first.
    pub async fn find_by_hotel_with_hotel(
        db: &DbConn,
        hotel_id: i64,
    ) -> Result<Vec<(Model, Option<hotel::Model>)>, DbErr> {
        Entity::find()
            .filter(Column::HotelId.eq(hotel_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .find_also_related(hotel::Entity)
            .all(db)
            .await
    }
}
