//! Modelo de Location
//!
//! Una Location se crea una vez por waypoint al guardar una ruta y
//! nunca se muta. Puede estar referenciada por cero o más RouteStops.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Location - mapea a la tabla `Location`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: i32,
    pub longitude: f64,
    pub latitude: f64,
}
