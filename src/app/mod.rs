pub mod forms;
pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::create_router;
