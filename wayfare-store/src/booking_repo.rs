use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info};
use wayfare_core::models::{Booking, NewBooking};
use wayfare_core::repository::BookingRepository;
use wayfare_core::CoreResult;

use crate::database::storage_error;

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        booking: &NewBooking,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO booking (flight_id, name, email) VALUES (?, ?, ?)")
            .bind(booking.flight_id)
            .bind(&booking.name)
            .bind(&booking.email)
            .execute(&mut **tx)
            .await?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn create_booking(&self, booking: &NewBooking) -> CoreResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let id = match Self::insert(&mut tx, booking).await {
            Ok(id) => id,
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                return Err(storage_error(e));
            }
        };

        tx.commit().await.map_err(storage_error)?;

        info!("Booking {} created for flight {}", id, booking.flight_id);

        Ok(Booking {
            id,
            flight_id: booking.flight_id,
            name: booking.name.clone(),
            email: booking.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbClient;
    use wayfare_core::CoreError;

    async fn migrated() -> DbClient {
        let db = DbClient::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn alice(flight_id: i64) -> NewBooking {
        NewBooking {
            flight_id,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_booking_inserts_one_row() {
        let db = migrated().await;
        let repo = SqliteBookingRepository::new(db.pool.clone());

        let booking = repo.create_booking(&alice(1)).await.unwrap();
        assert_eq!(booking.flight_id, 1);
        assert_eq!(booking.name, "Alice");

        let rows: Vec<(i64, i64, String, String)> =
            sqlx::query_as("SELECT id, flight_id, name, email FROM booking")
                .fetch_all(&db.pool)
                .await
                .unwrap();
        assert_eq!(
            rows,
            vec![(booking.id, 1, "Alice".to_string(), "alice@example.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_same_passenger_can_book_twice() {
        let db = migrated().await;
        let repo = SqliteBookingRepository::new(db.pool.clone());

        let first = repo.create_booking(&alice(1)).await.unwrap();
        let second = repo.create_booking(&alice(1)).await.unwrap();
        assert_ne!(first.id, second.id);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM booking")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_storage_error() {
        // No migration: the booking table is missing.
        let db = DbClient::in_memory().await.unwrap();
        let repo = SqliteBookingRepository::new(db.pool.clone());

        let err = repo.create_booking(&alice(1)).await.unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }
}
