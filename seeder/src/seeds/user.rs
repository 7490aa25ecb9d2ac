use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::internet::en::Username};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed demo owner
        Model::create(
            db,
            "demo_owner",
            "owner@example.com",
            Some("https://res.cloudinary.com/demo/image/upload/avatar.png"),
        )
        .await?;

        // Fixed guest without a hotel
        Model::create(db, "demo_guest", "guest@example.com", None).await?;

        for i in 0..8 {
            let name: String = Username().fake();
            let username = format!("{name}{i}");
            let email: String = SafeEmail().fake();
            Model::create(db, &username, &format!("{i}.{email}"), None).await?;
        }

        Ok(())
    }
}
