use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;
use wayfare_core::models::Flight;
use wayfare_core::repository::FlightRepository;
use wayfare_core::search::FlightQuery;
use wayfare_core::CoreResult;

use crate::database::storage_error;

pub struct SqliteFlightRepository {
    pool: SqlitePool,
}

impl SqliteFlightRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct FlightRow {
    id: i64,
    from_city: String,
    to_city: String,
    date: NaiveDate,
    price: f64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            id: row.id,
            from_city: row.from_city,
            to_city: row.to_city,
            date: row.date,
            price: row.price,
        }
    }
}

#[async_trait]
impl FlightRepository for SqliteFlightRepository {
    async fn search_flights(&self, query: &FlightQuery) -> CoreResult<Vec<Flight>> {
        // No ORDER BY: results come back in storage order.
        let rows = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT id, from_city, to_city, date, price
            FROM flight
            WHERE from_city = ? AND to_city = ? AND date = ?
            "#,
        )
        .bind(&query.from_city)
        .bind(&query.to_city)
        .bind(query.date)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        debug!(
            "Search {} -> {} on {} matched {} flights",
            query.from_city,
            query.to_city,
            query.date,
            rows.len()
        );

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn get_flight(&self, id: i64) -> CoreResult<Option<Flight>> {
        let row = sqlx::query_as::<_, FlightRow>(
            "SELECT id, from_city, to_city, date, price FROM flight WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Flight::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{default_flights, seed_if_empty};
    use crate::DbClient;

    async fn seeded_repo() -> SqliteFlightRepository {
        let db = DbClient::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        seed_if_empty(&db.pool, &default_flights()).await.unwrap();
        SqliteFlightRepository::new(db.pool)
    }

    fn query(from: &str, to: &str, date: (i32, u32, u32)) -> FlightQuery {
        FlightQuery {
            from_city: from.to_string(),
            to_city: to.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_search_matches_exactly_one_seeded_flight() {
        let repo = seeded_repo().await;

        let flights = repo
            .search_flights(&query("New York", "Los Angeles", (2025, 3, 10)))
            .await
            .unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].from_city, "New York");
        assert_eq!(flights[0].to_city, "Los Angeles");
        assert_eq!(flights[0].date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(flights[0].price, 300.0);
    }

    #[tokio::test]
    async fn test_search_without_match_is_empty() {
        let repo = seeded_repo().await;

        let flights = repo
            .search_flights(&query("Paris", "Tokyo", (2025, 1, 1)))
            .await
            .unwrap();
        assert!(flights.is_empty());

        // Right route, wrong day.
        let flights = repo
            .search_flights(&query("Chicago", "Miami", (2025, 3, 16)))
            .await
            .unwrap();
        assert!(flights.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_sensitive_and_not_partial() {
        let repo = seeded_repo().await;

        for (from, to) in [("new york", "Los Angeles"), ("New", "Los Angeles"), ("Los Angeles", "New York")] {
            let flights = repo
                .search_flights(&query(from, to, (2025, 3, 10)))
                .await
                .unwrap();
            assert!(flights.is_empty(), "{from} -> {to} should not match");
        }
    }

    #[tokio::test]
    async fn test_search_returns_all_duplicates_in_storage_order() {
        let db = DbClient::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        let mut flights = default_flights();
        let mut cheaper = flights[0].clone();
        cheaper.price = 120.0;
        flights.push(cheaper);
        seed_if_empty(&db.pool, &flights).await.unwrap();
        let repo = SqliteFlightRepository::new(db.pool);

        let found = repo
            .search_flights(&query("New York", "Los Angeles", (2025, 3, 10)))
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].price, 300.0);
        assert_eq!(found[1].price, 120.0);
    }

    #[tokio::test]
    async fn test_get_flight_by_id() {
        let repo = seeded_repo().await;

        let flight = repo.get_flight(2).await.unwrap().expect("flight 2 exists");
        assert_eq!(flight.from_city, "Chicago");
        assert_eq!(flight.price_label(), "$250.00");

        assert!(repo.get_flight(999).await.unwrap().is_none());
    }
}
