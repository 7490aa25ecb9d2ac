use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::{hotel::Model as HotelModel, user};
use fake::{
    Fake,
    faker::address::en::{CityName, StreetName},
    faker::phone_number::en::PhoneNumber,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct HotelSeeder;

const NAMES: [&str; 6] = [
    "Harbour View",
    "Mountain Rest",
    "Old Mill Inn",
    "Garden Lodge",
    "Riverside Suites",
    "Desert Star",
];

#[async_trait]
impl Seeder for HotelSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let users = user::Entity::find().all(db).await?;

        // Every user except the demo guest owns a hotel.
        for owner in users.iter().filter(|u| u.username != "demo_guest") {
            let name = NAMES[fastrand::usize(..NAMES.len())];
            let street: String = StreetName().fake();
            let city: String = CityName().fake();
            let phone: String = PhoneNumber().fake();

            HotelModel::create(
                db,
                owner.id,
                &format!("{name} {}", owner.id),
                &format!("{} {street}", fastrand::u16(1..300)),
                &city,
                &phone,
            )
            .await?;
        }

        Ok(())
    }
}
