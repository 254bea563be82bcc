use sqlx::MySqlPool;

use crate::models::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: MySqlPool,
}

impl VehicleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT VehicleID AS vehicle_id, UserID AS user_id, Name AS name, \
                    Height AS height, WeightT AS weight_t, Width AS width \
             FROM Vehicle WHERE UserID = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, vehicle_id: i32, user_id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT VehicleID AS vehicle_id, UserID AS user_id, Name AS name, \
                    Height AS height, WeightT AS weight_t, Width AS width \
             FROM Vehicle WHERE VehicleID = ? AND UserID = ?",
        )
        .bind(vehicle_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        height: Option<f64>,
        weight_t: Option<f64>,
        width: Option<f64>,
    ) -> Result<i32, AppError> {
        let result = sqlx::query(
            "INSERT INTO Vehicle (UserID, Name, Height, WeightT, Width) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(name)
        .bind(height)
        .bind(weight_t)
        .bind(width)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    /// Actualizar un vehículo. La condición `AND UserID = ?` hace que
    /// intentar tocar el vehículo de otro usuario sea un no-match.
    pub async fn update(
        &self,
        vehicle_id: i32,
        user_id: i32,
        name: &str,
        height: Option<f64>,
        weight_t: Option<f64>,
        width: Option<f64>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE Vehicle \
             SET Name = ?, Height = ?, WeightT = ?, Width = ? \
             WHERE VehicleID = ? AND UserID = ?",
        )
        .bind(name)
        .bind(height)
        .bind(weight_t)
        .bind(width)
        .bind(vehicle_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, vehicle_id: i32, user_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM Vehicle WHERE VehicleID = ? AND UserID = ?")
            .bind(vehicle_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
