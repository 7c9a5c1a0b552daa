use std::sync::Arc;
use wayfare_core::repository::{BookingRepository, FlightRepository};
use wayfare_store::{DbClient, SqliteBookingRepository, SqliteFlightRepository};

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(db: &DbClient) -> Self {
        Self {
            flight_repo: Arc::new(SqliteFlightRepository::new(db.pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepository::new(db.pool.clone())),
        }
    }
}
