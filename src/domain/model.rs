use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::error::{BookingError, Result};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub star_rating: i64,
    pub has_pool: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    pub description: String,
    pub room_type: String,
    pub price_per_night_cents: i64,
    pub max_guests: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct RoomWithHotel {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    pub description: String,
    pub room_type: String,
    pub price_per_night_cents: i64,
    pub max_guests: i64,
    pub image_url: Option<String>,
    pub hotel_name: String,
    pub hotel_city: String,
    pub hotel_has_pool: bool,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i64,
    pub total_cents: i64,
    pub created_at: NaiveDateTime,
}

/// Booking to be persisted; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub stay: StayRange,
    pub guests: i64,
    pub total_cents: i64,
}

/// A validated stay: check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_out <= check_in {
            return Err(BookingError::ValidationError {
                message: format!(
                    "check-out ({}) must be after check-in ({})",
                    check_out, check_in
                ),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parses two `YYYY-MM-DD` strings, then validates the ordering.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self> {
        let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d")?;
        let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d")?;
        Self::new(check_in, check_out)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn quote(&self, price_per_night_cents: i64) -> StayQuote {
        StayQuote {
            nights: self.nights(),
            total_cents: self.nights() * price_per_night_cents,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StayQuote {
    pub nights: i64,
    pub total_cents: i64,
}

/// Search criteria for the room catalog. All filters are optional.
#[derive(Debug, Clone, Default)]
pub struct RoomSearch {
    pub city: Option<String>,
    pub guests: Option<i64>,
    pub has_pool: Option<bool>,
}

impl Hotel {
    pub fn stars_display(&self) -> String {
        "★".repeat(self.star_rating as usize)
    }
}

impl Room {
    pub fn price_display(&self) -> String {
        format_cents(self.price_per_night_cents)
    }
}

impl RoomWithHotel {
    pub fn price_display(&self) -> String {
        format_cents(self.price_per_night_cents)
    }
}

impl Booking {
    pub fn total_display(&self) -> String {
        format_cents(self.total_cents)
    }
}

fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
