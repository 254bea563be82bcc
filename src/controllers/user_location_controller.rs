//! Controller de ubicaciones favoritas

use sqlx::MySqlPool;
use validator::Validate;

use crate::dto::user_location_dto::{AddUserLocationRequest, UserLocationResponse};
use crate::repositories::UserLocationRepository;
use crate::utils::errors::AppError;

pub struct UserLocationController {
    repository: UserLocationRepository,
}

impl UserLocationController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: UserLocationRepository::new(pool),
        }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<UserLocationResponse>, AppError> {
        let rows = self.repository.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(UserLocationResponse::from).collect())
    }

    pub async fn add(&self, user_id: i32, request: AddUserLocationRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .add(user_id, request.location_id, &request.name)
            .await
    }

    pub async fn delete(&self, user_id: i32, location_id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(user_id, location_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Ubicación favorita no encontrada".to_string()));
        }

        Ok(())
    }
}
