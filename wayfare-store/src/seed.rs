use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::info;
use wayfare_core::models::NewFlight;

const DEFAULT_FLIGHTS: [(&str, &str, (i32, u32, u32), f64); 2] = [
    ("New York", "Los Angeles", (2025, 3, 10), 300.00),
    ("Chicago", "Miami", (2025, 3, 15), 250.00),
];

/// The flights inserted into an empty `flight` table at startup.
pub fn default_flights() -> Vec<NewFlight> {
    DEFAULT_FLIGHTS
        .iter()
        .filter_map(|&(from_city, to_city, (y, m, d), price)| {
            Some(NewFlight {
                from_city: from_city.to_string(),
                to_city: to_city.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                price,
            })
        })
        .collect()
}

/// Inserts `flights` only when the table has no rows. Returns how many were inserted.
pub async fn seed_if_empty(pool: &SqlitePool, flights: &[NewFlight]) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flight")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        info!("Flight table already holds {} rows, skipping seed.", existing);
        return Ok(0);
    }

    for flight in flights {
        sqlx::query("INSERT INTO flight (from_city, to_city, date, price) VALUES (?, ?, ?, ?)")
            .bind(&flight.from_city)
            .bind(&flight.to_city)
            .bind(flight.date)
            .bind(flight.price)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!("Seeded {} flights.", flights.len());
    Ok(flights.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbClient;

    #[test]
    fn test_default_flights_are_complete() {
        let flights = default_flights();
        assert_eq!(flights.len(), DEFAULT_FLIGHTS.len());
        assert_eq!(flights[1].date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(flights[1].price, 250.0);
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = DbClient::in_memory().await.unwrap();
        db.migrate().await.unwrap();

        let inserted = seed_if_empty(&db.pool, &default_flights()).await.unwrap();
        assert_eq!(inserted, 2);

        let inserted = seed_if_empty(&db.pool, &default_flights()).await.unwrap();
        assert_eq!(inserted, 0);

        let rows: Vec<(String, String, String, f64)> =
            sqlx::query_as("SELECT from_city, to_city, date, price FROM flight ORDER BY id")
                .fetch_all(&db.pool)
                .await
                .unwrap();
        assert_eq!(
            rows,
            vec![
                ("New York".to_string(), "Los Angeles".to_string(), "2025-03-10".to_string(), 300.0),
                ("Chicago".to_string(), "Miami".to_string(), "2025-03-15".to_string(), 250.0),
            ]
        );
    }
}
