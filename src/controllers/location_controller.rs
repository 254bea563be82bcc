//! Controller de locations

use sqlx::MySqlPool;
use validator::Validate;

use crate::dto::location_dto::{CreateLocationRequest, CreateLocationResponse, LocationResponse};
use crate::repositories::LocationRepository;
use crate::utils::errors::AppError;

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<LocationResponse>, AppError> {
        let locations = self.repository.find_all().await?;
        Ok(locations.into_iter().map(LocationResponse::from).collect())
    }

    pub async fn create(
        &self,
        request: CreateLocationRequest,
    ) -> Result<CreateLocationResponse, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let location_id = self
            .repository
            .create(request.longitude, request.latitude)
            .await?;

        Ok(CreateLocationResponse { location_id })
    }
}
