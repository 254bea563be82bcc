//! Controller de rutas
//!
//! Listado, creación, borrado y el guardado orquestado de la ruta
//! actual (waypoints → locations → route, en una transacción).

use sqlx::MySqlPool;
use validator::Validate;

use crate::dto::route_dto::{
    CreateRouteRequest, CreateRouteResponse, RouteRowResponse, SaveRouteRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::{RouteRepository, RouteSaveTransaction};
use crate::services::{RouteSaveService, SaveOutcome};
use crate::utils::errors::AppError;

pub struct RouteController {
    pool: MySqlPool,
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<RouteRowResponse>, AppError> {
        let rows = self.repository.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(RouteRowResponse::from).collect())
    }

    /// POST /routes clásico: el cliente ya tiene los locationId
    pub async fn create(
        &self,
        user_id: i32,
        request: CreateRouteRequest,
    ) -> Result<CreateRouteResponse, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let route_id = self
            .repository
            .create_with_stops(user_id, &request.name, &request.stops)
            .await?;

        Ok(CreateRouteResponse { route_id })
    }

    /// Guardado orquestado de la ruta actual. Sin usuario no se abre
    /// siquiera la transacción.
    pub async fn save(
        &self,
        user: Option<AuthenticatedUser>,
        request: SaveRouteRequest,
    ) -> Result<SaveOutcome, AppError> {
        if user.is_none() {
            return Ok(SaveOutcome::NotAuthenticated);
        }

        let name = if request.auto_name { None } else { request.name };

        let mut tx = RouteSaveTransaction::begin(&self.pool).await?;
        let service = RouteSaveService::new();

        match service.save_route(&mut tx, user, &request.waypoints, name).await {
            Ok(outcome) => {
                tx.commit().await?;
                Ok(outcome)
            }
            // El drop de la transacción deshace las Locations ya creadas
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, user_id: i32, route_id: i32) -> Result<(), AppError> {
        let deleted = self.repository.delete(user_id, route_id).await?;

        if !deleted {
            // No-match: tanto ruta inexistente como ruta de otro usuario
            return Err(AppError::NotFound("Ruta no encontrada".to_string()));
        }

        Ok(())
    }
}
