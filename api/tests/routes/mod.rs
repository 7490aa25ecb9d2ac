mod health_test;
mod hotels;
mod rooms;
