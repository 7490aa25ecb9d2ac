#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{empty_request, read_json},
    };
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let app = make_test_app().await;

        let response = app
            .router
            .oneshot(empty_request("GET", "/api/health", None))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }
}
