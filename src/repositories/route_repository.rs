//! Acceso a datos de rutas
//!
//! La creación de una ruta con sus paradas y el borrado de una ruta
//! son transaccionales: o persiste todo o no persiste nada.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::dto::route_dto::StopInput;
use crate::models::RouteWithStopRow;
use crate::services::route_save_service::RoutePersistence;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: MySqlPool,
}

impl RouteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Rutas de un usuario unidas con sus paradas y coordenadas,
    /// ordenadas por ruta y número de parada
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<RouteWithStopRow>, AppError> {
        let rows = sqlx::query_as::<_, RouteWithStopRow>(
            "SELECT \
                r.RouteID AS route_id, r.Name AS route_name, \
                rs.StopNum AS stop_num, rs.LocationID AS location_id, \
                l.Longitude AS longitude, l.Latitude AS latitude \
             FROM Route r \
             LEFT JOIN RouteStops rs ON r.RouteID = rs.RouteID \
             LEFT JOIN Location l ON rs.LocationID = l.ID \
             WHERE r.UserID = ? \
             ORDER BY r.RouteID, rs.StopNum",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Crear la ruta y todas sus paradas en una sola transacción
    pub async fn create_with_stops(
        &self,
        user_id: i32,
        name: &str,
        stops: &[StopInput],
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        let route_id = insert_route(&mut tx, user_id, name).await?;
        for stop in stops {
            insert_stop(&mut tx, route_id, stop.stop_num, stop.location_id).await?;
        }

        tx.commit().await?;
        Ok(route_id)
    }

    /// Borrar una ruta del usuario junto con sus paradas, de forma
    /// atómica. Devuelve false si la ruta no existe o pertenece a
    /// otro usuario (no-match, sin confirmar existencia).
    pub async fn delete(&self, user_id: i32, route_id: i32) -> Result<bool, AppError> {
        let mut tx = RouteDeleteTransaction {
            tx: self.pool.begin().await?,
        };

        let deleted = delete_owned_route(&mut tx, user_id, route_id).await?;

        if deleted {
            tx.tx.commit().await?;
        }
        // Sin match el drop de la transacción hace rollback

        Ok(deleted)
    }
}

/// Seam del borrado de rutas: la comprobación de propiedad decide si
/// llega a emitirse algún DELETE.
#[async_trait]
pub trait RouteRemoval: Send {
    async fn is_owned(&mut self, user_id: i32, route_id: i32) -> Result<bool, AppError>;

    async fn delete_stops(&mut self, route_id: i32) -> Result<(), AppError>;

    async fn delete_route(&mut self, route_id: i32) -> Result<(), AppError>;
}

/// Secuencia del borrado. Con una ruta inexistente o de otro usuario
/// no se emite ningún DELETE: la ruta y sus paradas quedan intactas
/// y el resultado es un no-match.
pub async fn delete_owned_route(
    store: &mut dyn RouteRemoval,
    user_id: i32,
    route_id: i32,
) -> Result<bool, AppError> {
    if !store.is_owned(user_id, route_id).await? {
        return Ok(false);
    }

    store.delete_stops(route_id).await?;
    store.delete_route(route_id).await?;
    Ok(true)
}

struct RouteDeleteTransaction {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl RouteRemoval for RouteDeleteTransaction {
    async fn is_owned(&mut self, user_id: i32, route_id: i32) -> Result<bool, AppError> {
        let owned: Option<(i32,)> =
            sqlx::query_as("SELECT RouteID FROM Route WHERE RouteID = ? AND UserID = ?")
                .bind(route_id)
                .bind(user_id)
                .fetch_optional(&mut *self.tx)
                .await?;

        Ok(owned.is_some())
    }

    async fn delete_stops(&mut self, route_id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM RouteStops WHERE RouteID = ?")
            .bind(route_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }

    async fn delete_route(&mut self, route_id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM Route WHERE RouteID = ?")
            .bind(route_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }
}

async fn insert_route(
    tx: &mut Transaction<'static, MySql>,
    user_id: i32,
    name: &str,
) -> Result<i32, AppError> {
    let result = sqlx::query("INSERT INTO Route (UserID, Name) VALUES (?, ?)")
        .bind(user_id)
        .bind(name)
        .execute(&mut **tx)
        .await?;

    Ok(result.last_insert_id() as i32)
}

async fn insert_stop(
    tx: &mut Transaction<'static, MySql>,
    route_id: i32,
    stop_num: i32,
    location_id: i32,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO RouteStops (RouteID, StopNum, LocationID) VALUES (?, ?, ?)")
        .bind(route_id)
        .bind(stop_num)
        .bind(location_id)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Implementación SQL del seam del orquestador de guardado: todas las
/// escrituras van sobre la misma transacción, que el handler confirma
/// al final o descarta en caso de fallo.
pub struct RouteSaveTransaction {
    tx: Transaction<'static, MySql>,
}

impl RouteSaveTransaction {
    pub async fn begin(pool: &MySqlPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl RoutePersistence for RouteSaveTransaction {
    async fn create_location(&mut self, longitude: f64, latitude: f64) -> Result<i32, AppError> {
        let result = sqlx::query("INSERT INTO Location (Longitude, Latitude) VALUES (?, ?)")
            .bind(longitude)
            .bind(latitude)
            .execute(&mut *self.tx)
            .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn create_route(
        &mut self,
        user_id: i32,
        name: &str,
        stops: &[StopInput],
    ) -> Result<i32, AppError> {
        let route_id = insert_route(&mut self.tx, user_id, name).await?;
        for stop in stops {
            insert_stop(&mut self.tx, route_id, stop.stop_num, stop.location_id).await?;
        }
        Ok(route_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store de prueba que registra qué DELETEs se llegan a emitir
    struct MockRemoval {
        owned: bool,
        stop_deletes: usize,
        route_deletes: usize,
    }

    impl MockRemoval {
        fn new(owned: bool) -> Self {
            Self {
                owned,
                stop_deletes: 0,
                route_deletes: 0,
            }
        }
    }

    #[async_trait]
    impl RouteRemoval for MockRemoval {
        async fn is_owned(&mut self, _user_id: i32, _route_id: i32) -> Result<bool, AppError> {
            Ok(self.owned)
        }

        async fn delete_stops(&mut self, _route_id: i32) -> Result<(), AppError> {
            self.stop_deletes += 1;
            Ok(())
        }

        async fn delete_route(&mut self, _route_id: i32) -> Result<(), AppError> {
            self.route_deletes += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_delete_foreign_route_leaves_rows_intact() {
        // Ruta de otro usuario: no-match, y ningún DELETE emitido
        let mut store = MockRemoval::new(false);

        let deleted = delete_owned_route(&mut store, 1, 42).await.unwrap();

        assert!(!deleted);
        assert_eq!(store.stop_deletes, 0);
        assert_eq!(store.route_deletes, 0);
    }

    #[tokio::test]
    async fn test_delete_owned_route_removes_stops_then_route() {
        let mut store = MockRemoval::new(true);

        let deleted = delete_owned_route(&mut store, 1, 42).await.unwrap();

        assert!(deleted);
        assert_eq!(store.stop_deletes, 1);
        assert_eq!(store.route_deletes, 1);
    }
}
