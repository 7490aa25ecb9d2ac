//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds shared resources such as the database connection and the
//! media uploader. It is cheap to clone and is passed into route handlers via
//! Axum's `State<T>` extractor.

use crate::media::MediaUploader;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The media uploader used to host room images.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    uploader: Arc<dyn MediaUploader>,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and uploader.
    pub fn new(db: DatabaseConnection, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { db, uploader }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn uploader(&self) -> &Arc<dyn MediaUploader> {
        &self.uploader
    }
}

impl AppState {
    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn uploader_clone(&self) -> Arc<dyn MediaUploader> {
        Arc::clone(&self.uploader)
    }
}
