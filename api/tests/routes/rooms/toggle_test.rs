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
    async fn toggle_twice_restores_flag() {
        let app = make_test_app().await;
        let (owner, hotel) = app.owner("alice").await;
        let room = RoomModel::create(app.state.db(), hotel.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();

        let mut seen = Vec::new();
        for _ in 0..2 {
            let response = app
                .router
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/rooms/toggle-availability",
                    Some(owner.id),
                    json!({ "roomId": room.id }),
                ))
                .await
                .unwrap();
            let (status, json) = read_json(response).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["message"], "Room availability Updated");
            seen.push(json["room"]["isAvailable"].as_bool().unwrap());
        }

        assert_eq!(seen, vec![false, true]);
    }

    #[tokio::test]
    async fn other_owner_cannot_toggle() {
        let app = make_test_app().await;
        let (_, hotel_a) = app.owner("alice").await;
        let (owner_b, _) = app.owner("bob").await;
        let room = RoomModel::create(app.state.db(), hotel_a.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_request(
                "POST",
                "/api/rooms/toggle-availability",
                Some(owner_b.id),
                json!({ "roomId": room.id }),
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Not authorized to update this room");

        let stored = RoomModel::find_by_id(app.state.db(), room.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_available);
    }

    #[tokio::test]
    async fn malformed_room_id_is_reported_in_envelope() {
        let app = make_test_app().await;
        let (owner, _) = app.owner("alice").await;

        for body in [json!({}), json!({ "roomId": "x" })] {
            let response = app
                .router
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/rooms/toggle-availability",
                    Some(owner.id),
                    body,
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
}
