pub mod requests;

pub use app::{TestApp, make_test_app, make_test_app_with};
