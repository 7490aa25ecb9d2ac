pub mod hotel;
pub mod room;
pub mod user;

pub use hotel::Entity as Hotel;
pub use room::Entity as Room;
pub use user::Entity as User;
