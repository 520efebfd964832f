use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{data::area::AreaRepository, error::Error};

pub struct AreaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaService<'a> {
    /// Creates a new instance of [`AreaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve a (city, state) pair to an area ID, creating the area when missing
    ///
    /// The match is exact and case-sensitive. A missing area is inserted in its own
    /// transaction. Should a concurrent request insert the same pair first, the unique
    /// index rejects our insert and the existing area is read back instead.
    ///
    /// # Arguments
    /// - `city` (`&str`): City name exactly as submitted
    /// - `state` (`&str`): Two letter state code
    ///
    /// # Returns
    /// - `Some(i32)`: ID of the existing or newly created area
    /// - `None`: The area could not be created, the transaction was rolled back
    /// - [`Error`]: An error if looking up the area failed
    pub async fn resolve(&self, city: &str, state: &str) -> Result<Option<i32>, Error> {
        let area_repository = AreaRepository::new(self.db);

        if let Some(area) = area_repository.find_by_city_and_state(city, state).await? {
            return Ok(Some(area.id));
        }

        let txn = self.db.begin().await?;

        let insert_result = AreaRepository::new(&txn).create(city, state).await;

        match insert_result {
            Ok(area) => match txn.commit().await {
                Ok(()) => {
                    tracing::debug!(area_id = area.id, city, state, "Created area");

                    Ok(Some(area.id))
                }
                Err(e) => {
                    tracing::warn!(city, state, "Failed to commit new area: {}", e);

                    Ok(None)
                }
            },
            Err(e) => {
                // Release the connection before reading the winning row back
                drop(txn);

                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    let existing = area_repository.find_by_city_and_state(city, state).await?;

                    return Ok(existing.map(|area| area.id));
                }

                tracing::warn!(city, state, "Failed to create area: {}", e);

                Ok(None)
            }
        }
    }
}
