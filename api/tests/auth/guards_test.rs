#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{empty_request, json_request, multipart_request, read_json},
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn protected_routes_reject_missing_token() {
        let app = make_test_app().await;

        let requests = vec![
            multipart_request(
                "/api/rooms",
                None,
                &[("roomType", "Suite"), ("pricePerNight", "100")],
                &[],
            ),
            empty_request("GET", "/api/rooms/owner", None),
            json_request("POST", "/api/rooms/toggle-availability", None, json!({ "roomId": 1 })),
            json_request("PUT", "/api/rooms/1", None, json!({ "roomType": "Suite" })),
            empty_request("DELETE", "/api/rooms/1", None),
            json_request("POST", "/api/hotels", None, json!({ "name": "x" })),
            empty_request("GET", "/api/hotels/owner", None),
        ];

        for req in requests {
            let uri = req.uri().to_string();
            let response = app.router.clone().oneshot(req).await.unwrap();
            let (status, json) = read_json(response).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(json["success"], false, "{uri}");
            assert_eq!(json["message"], "Authentication required", "{uri}");
        }
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let app = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/rooms/owner")
            .header(header::AUTHORIZATION, "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();

        let response = app.router.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn public_listing_needs_no_token() {
        let app = make_test_app().await;

        let response = app
            .router
            .oneshot(empty_request("GET", "/api/rooms", None))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["rooms"], json!([]));
    }
}
