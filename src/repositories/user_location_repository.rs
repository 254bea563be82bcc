use sqlx::MySqlPool;

use crate::models::UserLocationRow;
use crate::utils::errors::AppError;

pub struct UserLocationRepository {
    pool: MySqlPool,
}

impl UserLocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<UserLocationRow>, AppError> {
        let rows = sqlx::query_as::<_, UserLocationRow>(
            "SELECT ul.LocationID AS location_id, ul.Name AS name, \
                    l.Latitude AS latitude, l.Longitude AS longitude \
             FROM userslocations ul \
             JOIN Location l ON ul.LocationID = l.ID \
             WHERE ul.UserID = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn add(&self, user_id: i32, location_id: i32, name: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO userslocations (UserID, LocationID, Name) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(location_id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: i32, location_id: i32) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM userslocations WHERE UserID = ? AND LocationID = ?")
                .bind(user_id)
                .bind(location_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
