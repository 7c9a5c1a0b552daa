use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed date format accepted from the search form and used in links.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated search: all three fields are matched exactly against stored flights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub from_city: String,
    pub to_city: String,
    pub date: NaiveDate, // Just date, matched against the stored YYYY-MM-DD text
}

impl FlightQuery {
    /// Query string for `/flights`, percent-encoded.
    pub fn to_query_string(&self) -> String {
        format!(
            "from_city={}&to_city={}&date={}",
            urlencoding::encode(&self.from_city),
            urlencoding::encode(&self.to_city),
            self.date.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserialization() {
        let json = r#"
            {
                "from_city": "New York",
                "to_city": "Los Angeles",
                "date": "2025-03-10"
            }
        "#;
        let query: FlightQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.from_city, "New York");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let query = FlightQuery {
            from_city: "New York".to_string(),
            to_city: "São Paulo".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        };
        assert_eq!(
            query.to_query_string(),
            "from_city=New%20York&to_city=S%C3%A3o%20Paulo&date=2025-03-10"
        );
    }
}
