use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: i64,
    pub from_city: String,
    pub to_city: String,
    pub date: NaiveDate,
    pub price: f64,
}

impl Flight {
    /// Price as shown to visitors, e.g. `$300.00`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Flight row before it has been assigned an id. Only seeding creates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFlight {
    pub from_city: String,
    pub to_city: String,
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub flight_id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub flight_id: i64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_has_two_decimals() {
        let flight = Flight {
            id: 1,
            from_city: "Chicago".to_string(),
            to_city: "Miami".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            price: 250.0,
        };
        assert_eq!(flight.price_label(), "$250.00");
    }

    #[test]
    fn test_flight_serializes_date_as_iso() {
        let flight = Flight {
            id: 7,
            from_city: "New York".to_string(),
            to_city: "Los Angeles".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            price: 300.0,
        };
        let json = serde_json::to_value(&flight).expect("Failed to serialize");
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["from_city"], "New York");
    }
}
