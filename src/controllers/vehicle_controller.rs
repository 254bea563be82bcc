//! Controller de vehículos
//!
//! CRUD de vehículos del usuario autenticado. Tocar el vehículo de
//! otro usuario es un no-match en la query y se reporta como 404.

use sqlx::MySqlPool;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn create(
        &self,
        user_id: i32,
        request: CreateVehicleRequest,
    ) -> Result<CreateVehicleResponse, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let vehicle_id = self
            .repository
            .create(
                user_id,
                &request.name,
                request.height,
                request.weight_t,
                request.width,
            )
            .await?;

        Ok(CreateVehicleResponse { vehicle_id })
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        user_id: i32,
        request: UpdateVehicleRequest,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::Validation)?;

        // Campos parciales: los no enviados conservan su valor actual
        let current = self
            .repository
            .find_by_id(vehicle_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let updated = self
            .repository
            .update(
                vehicle_id,
                user_id,
                request.name.as_deref().unwrap_or(&current.name),
                request.height.or(current.height),
                request.weight_t.or(current.weight_t),
                request.width.or(current.width),
            )
            .await?;

        if !updated {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, vehicle_id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(vehicle_id, user_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
