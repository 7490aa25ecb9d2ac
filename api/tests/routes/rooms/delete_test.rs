#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{empty_request, read_json},
    };
    use axum::http::StatusCode;
    use db::models::room::Model as RoomModel;
    use tower::ServiceExt;

    #[tokio::test]
    async fn owner_deletes_room_once() {
        let app = make_test_app().await;
        let (owner, hotel) = app.owner("alice").await;
        let room = RoomModel::create(app.state.db(), hotel.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();
        let uri = format!("/api/rooms/{}", room.id);

        let response = app
            .router
            .clone()
            .oneshot(empty_request("DELETE", &uri, Some(owner.id)))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Room deleted successfully");
        assert!(RoomModel::find_by_id(app.state.db(), room.id).await.unwrap().is_none());

        let response = app
            .router
            .oneshot(empty_request("DELETE", &uri, Some(owner.id)))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Room not found");
    }

    #[tokio::test]
    async fn other_owner_cannot_delete() {
        let app = make_test_app().await;
        let (_, hotel_a) = app.owner("alice").await;
        let (owner_b, _) = app.owner("bob").await;
        let room = RoomModel::create(app.state.db(), hotel_a.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/rooms/{}", room.id),
                Some(owner_b.id),
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Not authorized to delete this room");
        assert!(RoomModel::find_by_id(app.state.db(), room.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn caller_without_hotel_gets_hotel_not_found() {
        let app = make_test_app().await;
        let (_, hotel) = app.owner("alice").await;
        let stranger = app.user("mallory").await;
        let room = RoomModel::create(app.state.db(), hotel.id, "Single", 80.0, vec![], vec![])
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/rooms/{}", room.id),
                Some(stranger.id),
            ))
            .await
            .unwrap();
        let (_, json) = read_json(response).await;

        assert_eq!(json["message"], "Hotel not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_reported_in_envelope() {
        let app = make_test_app().await;
        let (owner, _) = app.owner("alice").await;

        let response = app
            .router
            .oneshot(empty_request("DELETE", "/api/rooms/abc", Some(owner.id)))
            .await
            .unwrap();
        let (status, json) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid room id");
    }
}
