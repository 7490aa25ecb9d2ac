use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A hotel listing. Each owner registers at most one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub owner_id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,

    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        owner_id: i64,
        name: &str,
        address: &str,
        city: &str,
        contact: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let hotel = ActiveModel {
            owner_id: Set(owner_id),
            name: Set(name.to_owned()),
            address: Set(address.to_owned()),
            city: Set(city.to_owned()),
            contact: Set(contact.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        hotel.insert(db).await
    }

    /// The hotel registered by `owner_id`, if any.
    pub async fn find_by_owner(db: &DbConn, owner_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .one(db)
            .await
    }
}
