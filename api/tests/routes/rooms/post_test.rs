#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app, make_test_app_with,
        requests::{empty_request, multipart_request, read_json},
    };
    use axum::http::StatusCode;
    use db::models::room;
    use sea_orm::EntityTrait;
    use tower::ServiceExt;
    use util::test_helpers::StubUploader;

    const AMENITIES: &str = r#"["wifi","breakfast"]"#;

    #[tokio::test]
    async fn owner_creates_room_and_sees_it_in_owner_listing() {
        let app = make_test_app().await;
        let (owner, hotel) = app.owner("alice").await;

        let response = app
            .router
            .clone()
            .oneshot(multipart_request(
                "/api/rooms",
                Some(owner.id),
                &[
                    ("roomType", "Double Bed"),
                    ("pricePerNight", "100"),
                    ("amenities", AMENITIES),
                ],
                &["front.png", "bath.png"],
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Room created successfully");

        let response = app
            .router
            .clone()
            .oneshot(empty_request("GET", "/api/rooms/owner", Some(owner.id)))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        let rooms = json["rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 1);
        let room = &rooms[0];
        assert_eq!(room["roomType"], "Double Bed");
        assert!(room["pricePerNight"].is_number());
        assert_eq!(room["pricePerNight"].as_f64(), Some(100.0));
        assert_eq!(room["amenities"], serde_json::json!(["wifi", "breakfast"]));
        assert_eq!(
            room["images"],
            serde_json::json!(["https://media.test/front.png", "https://media.test/bath.png"])
        );
        assert_eq!(room["isAvailable"], true);
        assert_eq!(room["hotelId"], hotel.id);
        assert_eq!(room["hotel"]["name"], "alice hotel");
    }

    #[tokio::test]
    async fn failed_upload_stores_no_room() {
        let app = make_test_app_with(StubUploader::failing_on(["two.png"])).await;
        let (owner, _) = app.owner("alice").await;

        let response = app
            .router
            .clone()
            .oneshot(multipart_request(
                "/api/rooms",
                Some(owner.id),
                &[
                    ("roomType", "Suite"),
                    ("pricePerNight", "250"),
                    ("amenities", AMENITIES),
                ],
                &["one.png", "two.png", "three.png"],
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Upload failed for two.png");

        let stored = room::Entity::find().all(app.state.db()).await.unwrap();
        assert!(stored.is_empty());

        let mut destroyed = app.uploader.destroyed();
        destroyed.sort();
        assert_eq!(destroyed, vec!["stub/one.png", "stub/three.png"]);
    }

    #[tokio::test]
    async fn caller_without_hotel_gets_no_hotel_found() {
        let app = make_test_app().await;
        let user = app.user("bob").await;

        let response = app
            .router
            .oneshot(multipart_request(
                "/api/rooms",
                Some(user.id),
                &[("roomType", "Suite"), ("pricePerNight", "90")],
                &["a.png"],
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "No Hotel found");
        assert!(app.uploader.uploaded().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_price_is_rejected() {
        let app = make_test_app().await;
        let (owner, _) = app.owner("alice").await;

        let response = app
            .router
            .oneshot(multipart_request(
                "/api/rooms",
                Some(owner.id),
                &[("roomType", "Suite"), ("pricePerNight", "a lot")],
                &[],
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Price per night must be a positive number");
    }
}
