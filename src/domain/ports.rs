use crate::domain::model::{Booking, Hotel, NewBooking, Room, RoomSearch, RoomWithHotel};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list_hotels(&self, has_pool: Option<bool>) -> Result<Vec<Hotel>>;
    async fn get_hotel(&self, id: i64) -> Result<Option<Hotel>>;
    async fn rooms_for_hotel(&self, hotel_id: i64) -> Result<Vec<Room>>;
    async fn search_rooms(&self, search: &RoomSearch) -> Result<Vec<RoomWithHotel>>;
    async fn get_room(&self, id: i64) -> Result<Option<RoomWithHotel>>;
    async fn create_booking(&self, booking: &NewBooking) -> Result<i64>;
    async fn get_booking(&self, id: i64) -> Result<Option<Booking>>;
}

pub trait AppConfig: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn database_url(&self) -> &str;
    fn seed_demo_data(&self) -> bool;
}
