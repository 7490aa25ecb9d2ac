use crate::error::ServiceError;
use db::models::{hotel::Model as HotelModel, user::Model as UserModel};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

#[derive(Debug, Clone)]
pub struct RegisterHotel {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub city: String,
}

/// Hotel registration. An identity may own at most one hotel.
#[derive(Clone)]
pub struct HotelService {
    db: DatabaseConnection,
}

impl HotelService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn register_hotel(
        &self,
        caller: i64,
        input: RegisterHotel,
    ) -> Result<HotelModel, ServiceError> {
        if UserModel::find_by_id(&self.db, caller).await?.is_none() {
            return Err(ServiceError::not_found("User not found"));
        }

        if HotelModel::find_by_owner(&self.db, caller).await?.is_some() {
            return Err(ServiceError::Conflict("Hotel Already Registered".into()));
        }

        let hotel = HotelModel::create(
            &self.db,
            caller,
            input.name.trim(),
            input.address.trim(),
            input.city.trim(),
            input.contact.trim(),
        )
        .await
        .map_err(registration_error)?;

        tracing::info!(hotel_id = hotel.id, owner_id = caller, "Hotel registered");
        Ok(hotel)
    }

    pub async fn owner_hotel(&self, caller: i64) -> Result<HotelModel, ServiceError> {
        HotelModel::find_by_owner(&self.db, caller)
            .await?
            .ok_or_else(|| ServiceError::not_found("No Hotel found"))
    }
}

/// A concurrent registration for the same owner loses on the unique index.
fn registration_error(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Conflict("Hotel Already Registered".into())
        }
        _ => err.into(),
    }
}
