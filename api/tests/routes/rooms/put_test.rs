#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{json_request, read_json},
    };
    use axum::http::StatusCode;
    use db::models::room::Model as RoomModel;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn owner_updates_supplied_fields() {
        let app = make_test_app().await;
        let (owner, hotel) = app.owner("alice").await;
        let room = RoomModel::create(app.state.db(), hotel.id, "Single", 80.0, vec!["wifi".into()], vec![])
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_request(
                "PUT",
                &format!("/api/rooms/{}", room.id),
                Some(owner.id),
                json!({ "roomType": "Twin", "pricePerNight": "95.5" }),
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Room updated successfully");
        assert_eq!(json["room"]["roomType"], "Twin");
        assert_eq!(json["room"]["pricePerNight"].as_f64(), Some(95.5));
        assert_eq!(json["room"]["amenities"], json!(["wifi"]));
    }

    #[tokio::test]
    async fn other_owner_cannot_edit() {
        let app = make_test_app().await;
        let (_, hotel_a) = app.owner("alice").await;
        let (owner_b, _) = app.owner("bob").await;
        let room = RoomModel::create(app.state.db(), hotel_a.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_request(
                "PUT",
                &format!("/api/rooms/{}", room.id),
                Some(owner_b.id),
                json!({ "roomType": "Hijacked", "pricePerNight": 1 }),
            ))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Not authorized to edit this room");

        let stored = RoomModel::find_by_id(app.state.db(), room.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.room_type, "Single");
        assert_eq!(stored.price_per_night, 80.0);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let app = make_test_app().await;
        let (owner, _) = app.owner("alice").await;

        let response = app
            .router
            .oneshot(json_request(
                "PUT",
                "/api/rooms/4040",
                Some(owner.id),
                json!({ "roomType": "Suite" }),
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Room not found");
    }

    #[tokio::test]
    async fn wrongly_typed_amenities_leave_room_untouched() {
        let app = make_test_app().await;
        let (owner, hotel) = app.owner("alice").await;
        let room = RoomModel::create(
            app.state.db(),
            hotel.id,
            "Single",
            80.0,
            vec!["tv".into()],
            vec![],
        )
        .await
        .unwrap();

        let response = app
            .router
            .oneshot(json_request(
                "PUT",
                &format!("/api/rooms/{}", room.id),
                Some(owner.id),
                json!({ "amenities": "wifi" }),
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

        let stored = RoomModel::find_by_id(app.state.db(), room.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.amenities.as_slice(), ["tv"]);
    }
}
