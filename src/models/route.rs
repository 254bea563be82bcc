//! Modelo de Route y RouteStops
//!
//! Una Route pertenece a un usuario y tiene siempre al menos una
//! parada. `stop_num` es una secuencia densa con base 1 que conserva
//! el orden original de los waypoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Route - mapea a la tabla `Route`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub route_id: i32,
    pub user_id: i32,
    pub name: String,
}

/// RouteStop - mapea a la tabla `RouteStops` (N:M con Location)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RouteStop {
    pub route_id: i32,
    pub stop_num: i32,
    pub location_id: i32,
}

/// Fila del listado de rutas de un usuario: Route × RouteStops × Location,
/// ordenada por RouteID y StopNum
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RouteWithStopRow {
    pub route_id: i32,
    pub route_name: String,
    pub stop_num: Option<i32>,
    pub location_id: Option<i32>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}
