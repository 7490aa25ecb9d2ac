use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects requests without a valid bearer token.
///
/// On success the caller is stored as a request extension, so handlers behind
/// the guard take `Extension<AuthUser>`. On failure the client gets `401` and
/// `{ "success": false, "message": "Authentication required" }`.
pub async fn allow_authenticated(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    match AuthUser::from_request_parts(&mut parts, &()).await {
        Ok(user) => {
            let mut req = Request::from_parts(parts, body);
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err((_, reason)) => {
            tracing::debug!(reason, path = %parts.uri.path(), "Rejected unauthenticated request");
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<Empty>::error("Authentication required")),
            )
                .into_response()
        }
    }
}
