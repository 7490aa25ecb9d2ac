use crate::seed::{Seeder, run_seeder};
use crate::seeds::{hotel::HotelSeeder, room::RoomSeeder, user::UserSeeder};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use util::config;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    common::logger::init_logger(&config::log_level(), "logs/seeder.log");

    let db = db::connect().await;
    if let Err(err) = Migrator::up(&db, None).await {
        log::error!("Failed to apply migrations: {err}");
        std::process::exit(1);
    }

    let seeders: [(Box<dyn Seeder + Send + Sync>, &str); 3] = [
        (Box::new(UserSeeder), "User"),
        (Box::new(HotelSeeder), "Hotel"),
        (Box::new(RoomSeeder), "Room"),
    ];

    for (seeder, name) in seeders {
        run_seeder(&*seeder, name, &db).await;
    }
}
