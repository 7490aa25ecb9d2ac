pub mod config;
pub mod media;
pub mod state;
pub mod test_helpers;
