use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::core::{
    Booking, BookingStore, Hotel, NewBooking, Room, RoomSearch, RoomWithHotel, Result,
};

/// SQLite-backed catalog and booking store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database behind a `sqlite:` URL,
    /// brings the schema up to date and optionally seeds demo data into an
    /// empty catalog.
    pub async fn open(url: &str, seed_demo_data: bool) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hotels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                address TEXT NOT NULL,
                city TEXT NOT NULL,
                country TEXT NOT NULL,
                star_rating INTEGER NOT NULL,
                has_pool INTEGER NOT NULL DEFAULT 0,
                image_url TEXT
            )
            "#,
        )
        .execute(&pool)
        .await?;

        // Databases created before the pool filter shipped lack the column;
        // the ALTER fails harmlessly everywhere else.
        let _ = sqlx::query("ALTER TABLE hotels ADD COLUMN has_pool INTEGER NOT NULL DEFAULT 0")
            .execute(&pool)
            .await;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hotel_id INTEGER NOT NULL REFERENCES hotels(id),
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                room_type TEXT NOT NULL,
                price_per_night_cents INTEGER NOT NULL,
                max_guests INTEGER NOT NULL,
                image_url TEXT
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                room_id INTEGER NOT NULL REFERENCES rooms(id),
                guest_name TEXT NOT NULL,
                guest_email TEXT NOT NULL,
                check_in DATE NOT NULL,
                check_out DATE NOT NULL,
                guests INTEGER NOT NULL,
                total_cents INTEGER NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&pool)
        .await?;

        if seed_demo_data {
            let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotels")
                .fetch_one(&pool)
                .await?;
            if count.0 == 0 {
                tracing::info!("Empty catalog, seeding demo hotels and rooms");
                seed_catalog(&pool).await?;
            }
        }

        Ok(Self { pool })
    }
}

async fn seed_catalog(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO hotels (name, description, address, city, country, star_rating, has_pool, image_url) VALUES
        ('Grand Plaza Hotel', 'Luxury downtown hotel with skyline views and a rooftop pool.', '100 Main Street', 'New York', 'USA', 5, 1, NULL),
        ('Seaside Resort', 'Beachfront resort with a private beach, spa and pool.', '50 Ocean Drive', 'Miami', 'USA', 5, 1, NULL),
        ('Mountain Lodge', 'Cozy lodge near the slopes, ideal for ski trips.', '200 Pine Road', 'Aspen', 'USA', 4, 0, NULL)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO rooms (hotel_id, name, description, room_type, price_per_night_cents, max_guests, image_url) VALUES
        (1, 'Deluxe King', 'Spacious room with a king bed and city view.', 'deluxe', 29900, 2, NULL),
        (1, 'Executive Suite', 'Suite with a living area and skyline view.', 'suite', 49900, 4, NULL),
        (1, 'Standard Double', 'Comfortable double room with all amenities.', 'standard', 18900, 2, NULL),
        (2, 'Ocean View Room', 'Wake up to the sound of the waves.', 'deluxe', 34900, 2, NULL),
        (2, 'Beach Bungalow', 'Private bungalow steps from the beach.', 'bungalow', 59900, 4, NULL),
        (2, 'Garden Room', 'Quiet room overlooking the garden.', 'standard', 22900, 2, NULL),
        (3, 'Mountain View', 'Room with panoramic mountain views.', 'deluxe', 27900, 2, NULL),
        (3, 'Family Suite', 'Two bedrooms, ideal for families.', 'suite', 42900, 6, NULL)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

const ROOM_WITH_HOTEL_SELECT: &str = r#"
    SELECT r.id, r.hotel_id, r.name, r.description, r.room_type, r.price_per_night_cents, r.max_guests, r.image_url,
           h.name AS hotel_name, h.city AS hotel_city, h.has_pool AS hotel_has_pool
    FROM rooms r
    JOIN hotels h ON r.hotel_id = h.id
"#;

#[async_trait]
impl BookingStore for SqliteStore {
    async fn list_hotels(&self, has_pool: Option<bool>) -> Result<Vec<Hotel>> {
        let sql = match has_pool {
            Some(true) => "SELECT id, name, description, address, city, country, star_rating, has_pool, image_url FROM hotels WHERE has_pool = 1 ORDER BY name",
            Some(false) => "SELECT id, name, description, address, city, country, star_rating, has_pool, image_url FROM hotels WHERE has_pool = 0 ORDER BY name",
            None => "SELECT id, name, description, address, city, country, star_rating, has_pool, image_url FROM hotels ORDER BY name",
        };
        Ok(sqlx::query_as::<_, Hotel>(sql).fetch_all(&self.pool).await?)
    }

    async fn get_hotel(&self, id: i64) -> Result<Option<Hotel>> {
        Ok(sqlx::query_as::<_, Hotel>(
            "SELECT id, name, description, address, city, country, star_rating, has_pool, image_url FROM hotels WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn rooms_for_hotel(&self, hotel_id: i64) -> Result<Vec<Room>> {
        Ok(sqlx::query_as::<_, Room>(
            "SELECT id, hotel_id, name, description, room_type, price_per_night_cents, max_guests, image_url FROM rooms WHERE hotel_id = ? ORDER BY price_per_night_cents",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn search_rooms(&self, search: &RoomSearch) -> Result<Vec<RoomWithHotel>> {
        let sql = format!("{} ORDER BY r.price_per_night_cents", ROOM_WITH_HOTEL_SELECT);
        let rows = sqlx::query_as::<_, RoomWithHotel>(&sql)
            .fetch_all(&self.pool)
            .await?;

        // The catalog is small; filtering in process keeps the query free
        // of dynamic SQL.
        let filtered = rows
            .into_iter()
            .filter(|room| {
                let city_ok = search
                    .city
                    .as_deref()
                    .map(|c| c.is_empty() || room.hotel_city.eq_ignore_ascii_case(c))
                    .unwrap_or(true);
                let guests_ok = search.guests.map(|g| g <= room.max_guests).unwrap_or(true);
                let pool_ok = search
                    .has_pool
                    .map(|p| room.hotel_has_pool == p)
                    .unwrap_or(true);
                city_ok && guests_ok && pool_ok
            })
            .collect();

        Ok(filtered)
    }

    async fn get_room(&self, id: i64) -> Result<Option<RoomWithHotel>> {
        let sql = format!("{} WHERE r.id = ?", ROOM_WITH_HOTEL_SELECT);
        Ok(sqlx::query_as::<_, RoomWithHotel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings (room_id, guest_name, guest_email, check_in, check_out, guests, total_cents)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.room_id)
        .bind(&booking.guest_name)
        .bind(&booking.guest_email)
        .bind(booking.stay.check_in())
        .bind(booking.stay.check_out())
        .bind(booking.guests)
        .bind(booking.total_cents)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_booking(&self, id: i64) -> Result<Option<Booking>> {
        Ok(sqlx::query_as::<_, Booking>(
            "SELECT id, room_id, guest_name, guest_email, check_in, check_out, guests, total_cents, created_at FROM bookings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
