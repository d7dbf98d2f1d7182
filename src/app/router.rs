use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::handlers::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/hotels", get(handlers::list_hotels))
        .route("/api/hotels/:id", get(handlers::hotel_detail))
        .route("/api/search", get(handlers::search))
        .route("/api/rooms/:id", get(handlers::room_detail))
        .route("/api/rooms/:id/book", post(handlers::book_room))
        .route("/api/bookings/:id", get(handlers::booking_detail))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
