pub mod error;
pub mod hotel_service;
pub mod room_service;
pub mod service;

pub use error::ServiceError;
