#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{json_request, read_json},
    };
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn hotel_body() -> Value {
        json!({
            "name": "Karoo Stay",
            "address": "4 Dune Ave",
            "contact": "+27 21 000 0000",
            "city": "Graaff-Reinet"
        })
    }

    #[tokio::test]
    async fn user_registers_one_hotel() {
        let app = make_test_app().await;
        let user = app.user("erin").await;

        let response = app
            .router
            .clone()
            .oneshot(json_request("POST", "/api/hotels", Some(user.id), hotel_body()))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Hotel Registered Successfully");
        assert_eq!(json["hotel"]["ownerId"], user.id);
        assert_eq!(json["hotel"]["city"], "Graaff-Reinet");

        let response = app
            .router
            .oneshot(json_request("POST", "/api/hotels", Some(user.id), hotel_body()))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Hotel Already Registered");
    }

    #[tokio::test]
    async fn missing_fields_are_reported() {
        let app = make_test_app().await;
        let user = app.user("erin").await;

        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/hotels",
                Some(user.id),
                json!({ "name": "Karoo Stay", "address": " ", "contact": "555" }),
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Address is required; City is required");
    }

    #[tokio::test]
    async fn unknown_identity_is_rejected() {
        let app = make_test_app().await;

        let response = app
            .router
            .oneshot(json_request("POST", "/api/hotels", Some(777), hotel_body()))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn non_object_body_is_reported_in_envelope() {
        let app = make_test_app().await;
        let user = app.user("alice").await;

        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/hotels",
                Some(user.id),
                json!("Grand Hotel"),
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }
}
