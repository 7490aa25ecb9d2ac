use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::{hotel, room::Model as RoomModel};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct RoomSeeder;

const ROOM_TYPES: [&str; 4] = ["Single Bed", "Double Bed", "Luxury Room", "Family Suite"];
const AMENITIES: [&str; 5] = [
    "Free WiFi",
    "Free Breakfast",
    "Room Service",
    "Mountain View",
    "Pool Access",
];

fn pick_amenities() -> Vec<String> {
    AMENITIES
        .iter()
        .filter(|_| fastrand::bool())
        .map(|a| a.to_string())
        .collect()
}

#[async_trait]
impl Seeder for RoomSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let hotels = hotel::Entity::find().all(db).await?;

        for hotel in hotels {
            for n in 0..fastrand::usize(1..=4) {
                let room_type = ROOM_TYPES[fastrand::usize(..ROOM_TYPES.len())];
                let price = (fastrand::u32(60..400) as f64).round();
                let image = format!(
                    "https://res.cloudinary.com/demo/image/upload/rooms/{}-{n}.jpg",
                    hotel.id
                );

                RoomModel::create(db, hotel.id, room_type, price, pick_amenities(), vec![image])
                    .await?;
            }
        }

        Ok(())
    }
}
