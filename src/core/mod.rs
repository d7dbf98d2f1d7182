pub mod field;
pub mod guard;

pub use crate::domain::model::{
    Booking, Hotel, NewBooking, Room, RoomSearch, RoomWithHotel, StayQuote, StayRange,
};
pub use crate::domain::ports::{AppConfig, BookingStore};
pub use crate::utils::error::Result;
pub use field::{DateField, Form};
pub use guard::DateRangeGuard;
