use sqlx::MySqlPool;

use crate::models::Location;
use crate::utils::errors::AppError;

pub struct LocationRepository {
    pool: MySqlPool,
}

impl LocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT ID AS id, Longitude AS longitude, Latitude AS latitude FROM Location",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn create(&self, longitude: f64, latitude: f64) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO Location (Longitude, Latitude) VALUES (?, ?)")
            .bind(longitude)
            .bind(latitude)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id() as i32)
    }
}
