pub mod hotel;
pub mod room;
pub mod user;
