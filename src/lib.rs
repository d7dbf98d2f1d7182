pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::sqlite::SqliteStore;
pub use app::{create_router, AppState};
pub use config::{file::FileConfig, CliConfig};
pub use core::{DateField, DateRangeGuard, Form};
pub use utils::error::{BookingError, Result};
