pub mod m202506010001_create_users;
pub mod m202506010002_create_hotels;
pub mod m202506010003_create_rooms;
