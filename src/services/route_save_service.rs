//! Orquestador de guardado de rutas
//!
//! Persiste la lista de waypoints actual como una ruta con nombre:
//! una Location por waypoint, en orden, y después una única Route que
//! referencia las paradas generadas (`stop_num` = índice + 1).
//!
//! El primer fallo al crear una Location aborta la operación entera
//! reportando el índice que falló, y la creación de la Route nunca
//! llega a emitirse. La implementación SQL del seam ejecuta ambos
//! pasos dentro de una misma transacción, así que un abort no deja
//! Locations huérfanas.

use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;
use tracing::info;

use crate::dto::route_dto::StopInput;
use crate::dto::routing_dto::Waypoint;
use crate::middleware::auth::AuthenticatedUser;
use crate::utils::errors::{bad_request_error, AppError};

/// Seam de persistencia del orquestador. La implementación real es
/// una transacción SQL (`RouteSaveTransaction`); los tests cuentan
/// llamadas con un mock.
#[async_trait]
pub trait RoutePersistence: Send {
    async fn create_location(&mut self, longitude: f64, latitude: f64) -> Result<i32, AppError>;

    async fn create_route(
        &mut self,
        user_id: i32,
        name: &str,
        stops: &[StopInput],
    ) -> Result<i32, AppError>;
}

/// Resultado del guardado. `NotAuthenticated` es un corto-circuito
/// deliberado, no un error: sin sesión no se contacta con el store.
#[derive(Debug, PartialEq)]
pub enum SaveOutcome {
    Saved { route_id: i32 },
    NotAuthenticated,
}

/// Fallos del guardado multi-paso
#[derive(Error, Debug)]
pub enum SaveRouteError {
    #[error("la ruta no tiene paradas que guardar")]
    EmptyRoute,

    #[error("no se pudo guardar la parada {index}: {source}")]
    Location {
        index: usize,
        #[source]
        source: AppError,
    },

    #[error("no se pudo guardar la ruta: {source}")]
    Route {
        #[source]
        source: AppError,
    },
}

impl From<SaveRouteError> for AppError {
    fn from(err: SaveRouteError) -> Self {
        match err {
            SaveRouteError::EmptyRoute => {
                bad_request_error("La ruta no tiene paradas que guardar")
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

pub struct RouteSaveService;

impl RouteSaveService {
    pub fn new() -> Self {
        Self
    }

    /// Guardar la ruta actual. Con `name` en None el nombre se
    /// autogenera con la fecha/hora local; el texto del caller no se
    /// valida aquí ni por unicidad ni por longitud.
    pub async fn save_route(
        &self,
        store: &mut dyn RoutePersistence,
        user: Option<AuthenticatedUser>,
        waypoints: &[Waypoint],
        name: Option<String>,
    ) -> Result<SaveOutcome, SaveRouteError> {
        // Sin token no hay guardado; salida sin tocar el store
        let Some(user) = user else {
            return Ok(SaveOutcome::NotAuthenticated);
        };

        if waypoints.is_empty() {
            return Err(SaveRouteError::EmptyRoute);
        }

        let route_name = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        // Paso 1: una Location por waypoint, en orden. El orden
        // importa para reportar el índice que falla.
        let mut stops = Vec::with_capacity(waypoints.len());
        for (index, waypoint) in waypoints.iter().enumerate() {
            let location_id = store
                .create_location(waypoint.longitude, waypoint.latitude)
                .await
                .map_err(|source| SaveRouteError::Location { index, source })?;

            stops.push(StopInput {
                stop_num: (index + 1) as i32,
                location_id,
            });
        }

        // Paso 2: una única Route con todas las paradas
        let route_id = store
            .create_route(user.user_id, &route_name, &stops)
            .await
            .map_err(|source| SaveRouteError::Route { source })?;

        info!("💾 Ruta '{}' guardada con id {} ({} paradas)", route_name, route_id, stops.len());

        Ok(SaveOutcome::Saved { route_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store de prueba que cuenta llamadas y puede fallar en un
    /// índice concreto
    #[derive(Default)]
    struct MockStore {
        location_calls: usize,
        route_calls: usize,
        fail_location_at: Option<usize>,
        fail_route: bool,
        recorded_stops: Vec<StopInput>,
        recorded_name: Option<String>,
    }

    #[async_trait]
    impl RoutePersistence for MockStore {
        async fn create_location(&mut self, _longitude: f64, _latitude: f64) -> Result<i32, AppError> {
            let index = self.location_calls;
            self.location_calls += 1;

            if self.fail_location_at == Some(index) {
                return Err(AppError::Internal("insert failed".to_string()));
            }

            Ok((index + 1) as i32 * 100)
        }

        async fn create_route(
            &mut self,
            _user_id: i32,
            name: &str,
            stops: &[StopInput],
        ) -> Result<i32, AppError> {
            self.route_calls += 1;

            if self.fail_route {
                return Err(AppError::Internal("insert failed".to_string()));
            }

            self.recorded_name = Some(name.to_string());
            self.recorded_stops = stops.to_vec();
            Ok(7)
        }
    }

    fn user() -> Option<AuthenticatedUser> {
        Some(AuthenticatedUser { user_id: 1 })
    }

    fn waypoints(n: usize) -> Vec<Waypoint> {
        (0..n)
            .map(|i| Waypoint {
                latitude: 49.0 + i as f64 * 0.01,
                longitude: -123.0 + i as f64 * 0.01,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_n_location_calls_then_one_route_call() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        let outcome = service
            .save_route(&mut store, user(), &waypoints(4), Some("casa".to_string()))
            .await
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Saved { route_id: 7 });
        assert_eq!(store.location_calls, 4);
        assert_eq!(store.route_calls, 1);
        assert_eq!(store.recorded_name.as_deref(), Some("casa"));
    }

    #[tokio::test]
    async fn test_stop_nums_are_dense_one_based_in_waypoint_order() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        service
            .save_route(&mut store, user(), &waypoints(3), Some("ruta".to_string()))
            .await
            .unwrap();

        let nums: Vec<i32> = store.recorded_stops.iter().map(|s| s.stop_num).collect();
        assert_eq!(nums, vec![1, 2, 3]);

        let ids: Vec<i32> = store.recorded_stops.iter().map(|s| s.location_id).collect();
        assert_eq!(ids, vec![100, 200, 300]);
    }

    #[tokio::test]
    async fn test_location_failure_aborts_before_route_create() {
        let mut store = MockStore {
            fail_location_at: Some(2),
            ..Default::default()
        };
        let service = RouteSaveService::new();

        let err = service
            .save_route(&mut store, user(), &waypoints(5), Some("ruta".to_string()))
            .await
            .unwrap_err();

        // Abortó en el waypoint 2: tres intentos de location, cero rutas
        assert!(matches!(err, SaveRouteError::Location { index: 2, .. }));
        assert_eq!(store.location_calls, 3);
        assert_eq!(store.route_calls, 0);
    }

    #[tokio::test]
    async fn test_route_failure_is_reported() {
        let mut store = MockStore {
            fail_route: true,
            ..Default::default()
        };
        let service = RouteSaveService::new();

        let err = service
            .save_route(&mut store, user(), &waypoints(2), Some("ruta".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, SaveRouteError::Route { .. }));
        assert_eq!(store.location_calls, 2);
        assert_eq!(store.route_calls, 1);
    }

    #[tokio::test]
    async fn test_without_session_no_store_calls() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        let outcome = service
            .save_route(&mut store, None, &waypoints(3), None)
            .await
            .unwrap();

        assert_eq!(outcome, SaveOutcome::NotAuthenticated);
        assert_eq!(store.location_calls, 0);
        assert_eq!(store.route_calls, 0);
    }

    #[tokio::test]
    async fn test_empty_waypoints_rejected() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        let err = service
            .save_route(&mut store, user(), &[], Some("ruta".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, SaveRouteError::EmptyRoute));
        assert_eq!(store.location_calls, 0);
    }

    #[tokio::test]
    async fn test_auto_generated_name_is_timestamp() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        service
            .save_route(&mut store, user(), &waypoints(1), None)
            .await
            .unwrap();

        let name = store.recorded_name.unwrap();
        // Formato fecha/hora local: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(name.len(), 19);
        assert_eq!(&name[4..5], "-");
        assert_eq!(&name[10..11], " ");
    }

    #[tokio::test]
    async fn test_blank_name_falls_back_to_timestamp() {
        let mut store = MockStore::default();
        let service = RouteSaveService::new();

        service
            .save_route(&mut store, user(), &waypoints(1), Some("   ".to_string()))
            .await
            .unwrap();

        assert_ne!(store.recorded_name.as_deref(), Some("   "));
    }
}
