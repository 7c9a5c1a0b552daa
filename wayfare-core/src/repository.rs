use async_trait::async_trait;

use crate::models::{Booking, Flight, NewBooking};
use crate::search::FlightQuery;
use crate::CoreResult;

/// Repository trait for flight data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Exact match on origin, destination and date, in storage order.
    async fn search_flights(&self, query: &FlightQuery) -> CoreResult<Vec<Flight>>;

    async fn get_flight(&self, id: i64) -> CoreResult<Option<Flight>>;
}

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts one booking row. Nothing checks for duplicates or capacity.
    async fn create_booking(&self, booking: &NewBooking) -> CoreResult<Booking>;
}
