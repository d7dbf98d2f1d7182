use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::forms::{booking_form_state, BookingFormState};
use crate::core::{BookingStore, NewBooking, RoomSearch, StayQuote, StayRange};
use crate::domain::model::{Booking, Hotel, Room, RoomWithHotel};
use crate::utils::error::BookingError;

pub type SharedStore = Arc<dyn BookingStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn internal(e: BookingError) -> StatusCode {
    tracing::warn!("Store operation failed: {:?}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

// "1"/"true"/"yes" and "0"/"false"/"no"; anything else means no filter.
fn parse_pool_flag(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|s| match s {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    })
}

pub async fn health() -> Json<ApiResponse<String>> {
    ApiResponse::ok("OK".to_string())
}

#[derive(Deserialize)]
pub struct HotelsQuery {
    pub has_pool: Option<String>,
}

pub async fn list_hotels(
    State(state): State<AppState>,
    Query(q): Query<HotelsQuery>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, StatusCode> {
    let has_pool = parse_pool_flag(q.has_pool.as_deref());
    let hotels = state
        .store
        .list_hotels(has_pool)
        .await
        .map_err(internal)?;
    Ok(ApiResponse::ok(hotels))
}

#[derive(Serialize)]
pub struct HotelDetail {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

pub async fn hotel_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<HotelDetail>>, StatusCode> {
    let hotel = state
        .store
        .get_hotel(id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    let rooms = state
        .store
        .rooms_for_hotel(id)
        .await
        .map_err(internal)?;
    Ok(ApiResponse::ok(HotelDetail { hotel, rooms }))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub city: Option<String>,
    pub guests: Option<String>,
    pub has_pool: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<RoomWithHotel>>>, StatusCode> {
    let search = RoomSearch {
        city: q.city,
        guests: q.guests.as_ref().and_then(|s| s.parse::<i64>().ok()),
        // The search form only offers a "with pool" checkbox, so only the
        // truthy spellings select anything.
        has_pool: match q.has_pool.as_deref() {
            Some("1") | Some("true") | Some("yes") => Some(true),
            _ => None,
        },
    };
    let rooms = state
        .store
        .search_rooms(&search)
        .await
        .map_err(internal)?;
    Ok(ApiResponse::ok(rooms))
}

#[derive(Deserialize)]
pub struct RoomDetailQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Serialize)]
pub struct RoomDetail {
    pub room: RoomWithHotel,
    pub form: BookingFormState,
    pub quote: Option<StayQuote>,
}

pub async fn room_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(q): Query<RoomDetailQuery>,
) -> Result<Json<ApiResponse<RoomDetail>>, StatusCode> {
    let room = state
        .store
        .get_room(id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let form = booking_form_state(
        q.check_in.as_deref().unwrap_or(""),
        q.check_out.as_deref().unwrap_or(""),
    );
    let quote = StayRange::parse(&form.check_in.value, &form.check_out.value)
        .ok()
        .map(|stay| stay.quote(room.price_per_night_cents));

    Ok(ApiResponse::ok(RoomDetail { room, form, quote }))
}

#[derive(Deserialize)]
pub struct BookingRequest {
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<i64>,
}

#[derive(Serialize)]
pub struct BookingCreated {
    pub booking_id: i64,
    pub nights: i64,
    pub total_cents: i64,
}

pub async fn book_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<ApiResponse<BookingCreated>>, StatusCode> {
    let stay = StayRange::parse(&request.check_in, &request.check_out).map_err(|e| {
        tracing::debug!("Rejected booking dates: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    let guests = request.guests.unwrap_or(1).max(1);

    let room = state
        .store
        .get_room(room_id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let quote = stay.quote(room.price_per_night_cents);
    let booking_id = state
        .store
        .create_booking(&NewBooking {
            room_id,
            guest_name: request.guest_name,
            guest_email: request.guest_email,
            stay,
            guests,
            total_cents: quote.total_cents,
        })
        .await
        .map_err(internal)?;

    tracing::info!(
        "📒 Booked room {} for {} nights (booking {})",
        room_id,
        quote.nights,
        booking_id
    );

    Ok(ApiResponse::ok(BookingCreated {
        booking_id,
        nights: quote.nights,
        total_cents: quote.total_cents,
    }))
}

#[derive(Serialize)]
pub struct BookingDetail {
    pub booking: Booking,
    pub room: RoomWithHotel,
}

pub async fn booking_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<BookingDetail>>, StatusCode> {
    let booking = state
        .store
        .get_booking(id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    let room = state
        .store
        .get_room(booking.room_id)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(ApiResponse::ok(BookingDetail { booking, room }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MemoryStore {
        rooms: Vec<RoomWithHotel>,
        bookings: Mutex<Vec<Booking>>,
    }

    impl MemoryStore {
        fn with_one_room() -> Self {
            Self {
                rooms: vec![RoomWithHotel {
                    id: 1,
                    hotel_id: 1,
                    name: "Deluxe King".to_string(),
                    description: String::new(),
                    room_type: "deluxe".to_string(),
                    price_per_night_cents: 29900,
                    max_guests: 2,
                    image_url: None,
                    hotel_name: "Grand Plaza Hotel".to_string(),
                    hotel_city: "New York".to_string(),
                    hotel_has_pool: true,
                }],
                bookings: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BookingStore for MemoryStore {
        async fn list_hotels(&self, _has_pool: Option<bool>) -> Result<Vec<Hotel>> {
            Ok(Vec::new())
        }

        async fn get_hotel(&self, _id: i64) -> Result<Option<Hotel>> {
            Ok(None)
        }

        async fn rooms_for_hotel(&self, _hotel_id: i64) -> Result<Vec<Room>> {
            Ok(Vec::new())
        }

        async fn search_rooms(&self, _search: &RoomSearch) -> Result<Vec<RoomWithHotel>> {
            Ok(self.rooms.clone())
        }

        async fn get_room(&self, id: i64) -> Result<Option<RoomWithHotel>> {
            Ok(self.rooms.iter().find(|r| r.id == id).cloned())
        }

        async fn create_booking(&self, booking: &NewBooking) -> Result<i64> {
            let mut bookings = self.bookings.lock().unwrap();
            let id = bookings.len() as i64 + 1;
            bookings.push(Booking {
                id,
                room_id: booking.room_id,
                guest_name: booking.guest_name.clone(),
                guest_email: booking.guest_email.clone(),
                check_in: booking.stay.check_in(),
                check_out: booking.stay.check_out(),
                guests: booking.guests,
                total_cents: booking.total_cents,
                created_at: chrono::Utc::now().naive_utc(),
            });
            Ok(id)
        }

        async fn get_booking(&self, id: i64) -> Result<Option<Booking>> {
            Ok(self.bookings.lock().unwrap().iter().find(|b| b.id == id).cloned())
        }
    }

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemoryStore::with_one_room()),
        }
    }

    #[tokio::test]
    async fn test_room_detail_clamps_form_and_quotes() {
        let response = room_detail(
            State(test_state()),
            Path(1),
            Query(RoomDetailQuery {
                check_in: Some("2024-06-12".to_string()),
                check_out: Some("2024-06-05".to_string()),
            }),
        )
        .await
        .unwrap();

        let detail = response.0.data.unwrap();
        assert_eq!(detail.form.check_out.value, "2024-06-12");
        assert_eq!(detail.form.check_out.min, "2024-06-12");
        // The clamp leaves a zero-night range, so there is nothing to quote.
        assert!(detail.quote.is_none());
    }

    #[tokio::test]
    async fn test_room_detail_quotes_valid_range() {
        let response = room_detail(
            State(test_state()),
            Path(1),
            Query(RoomDetailQuery {
                check_in: Some("2024-06-10".to_string()),
                check_out: Some("2024-06-12".to_string()),
            }),
        )
        .await
        .unwrap();

        let detail = response.0.data.unwrap();
        let quote = detail.quote.unwrap();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total_cents, 59800);
    }

    #[tokio::test]
    async fn test_room_detail_unknown_room_is_404() {
        let result = room_detail(
            State(test_state()),
            Path(42),
            Query(RoomDetailQuery {
                check_in: None,
                check_out: None,
            }),
        )
        .await;
        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_book_room_rejects_inverted_range() {
        let result = book_room(
            State(test_state()),
            Path(1),
            Json(BookingRequest {
                guest_name: "Ada".to_string(),
                guest_email: "ada@example.com".to_string(),
                check_in: "2024-06-12".to_string(),
                check_out: "2024-06-10".to_string(),
                guests: Some(2),
            }),
        )
        .await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_book_room_floors_guests_at_one() {
        let state = test_state();
        let response = book_room(
            State(state.clone()),
            Path(1),
            Json(BookingRequest {
                guest_name: "Ada".to_string(),
                guest_email: "ada@example.com".to_string(),
                check_in: "2024-06-10".to_string(),
                check_out: "2024-06-12".to_string(),
                guests: Some(-3),
            }),
        )
        .await
        .unwrap();

        let created = response.0.data.unwrap();
        let stored = state
            .store
            .get_booking(created.booking_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.guests, 1);
        assert_eq!(created.total_cents, 59800);
    }

    #[test]
    fn test_parse_pool_flag_spellings() {
        assert_eq!(parse_pool_flag(Some("1")), Some(true));
        assert_eq!(parse_pool_flag(Some("yes")), Some(true));
        assert_eq!(parse_pool_flag(Some("0")), Some(false));
        assert_eq!(parse_pool_flag(Some("maybe")), None);
        assert_eq!(parse_pool_flag(None), None);
    }
}
