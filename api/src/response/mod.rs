use serde::Serialize;

/// JSON envelope shared by every endpoint.
///
/// The payload is flattened next to `success` and `message`, so a room
/// listing reads `{ "success": true, "message": "...", "rooms": [...] }` and a
/// failure reads `{ "success": false, "message": "Room not found" }`.
/// `T` has to serialize as a struct or map; [`Empty`] carries nothing.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Serialize, Default)]
pub struct Empty {}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Failure envelope; the payload is `T::default()` and normally [`Empty`].
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            message: message.into(),
            data: T::default(),
        }
    }
}
