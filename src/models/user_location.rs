//! Modelo de UserLocation
//!
//! Ubicaciones favoritas de un usuario (tabla `userslocations`),
//! con el nombre que el usuario les dio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de favorito unida con su Location
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserLocationRow {
    pub location_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
