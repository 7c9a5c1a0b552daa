pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod flight_repo;
pub mod seed;

pub use booking_repo::SqliteBookingRepository;
pub use database::DbClient;
pub use flight_repo::SqliteFlightRepository;
