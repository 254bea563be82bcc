//! DTOs de Route
//!
//! Cubre tanto el POST /routes clásico (el cliente ya tiene los
//! locationId) como el POST /routes/save orquestado (el servidor
//! crea las locations a partir de los waypoints).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::routing_dto::Waypoint;
use crate::models::RouteWithStopRow;

/// Una parada tal como la envía el cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopInput {
    pub stop_num: i32,
    pub location_id: i32,
}

/// Request de POST /routes
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1))]
    pub stops: Vec<StopInput>,
}

/// Request de POST /routes/save: la lista de waypoints de la ruta
/// actual. Con `auto_name` el nombre es la fecha/hora local.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRouteRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub auto_name: bool,
    pub waypoints: Vec<Waypoint>,
}

/// Response de creación de ruta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteResponse {
    pub route_id: i32,
}

/// Response de POST /routes/save cuando no hay sesión: el guardado
/// se omite deliberadamente, no es un error
#[derive(Debug, Serialize)]
pub struct SaveSkippedResponse {
    pub saved: bool,
    pub message: String,
}

/// Fila del listado GET /routes - conserva las claves del schema
#[derive(Debug, Serialize)]
pub struct RouteRowResponse {
    #[serde(rename = "RouteID")]
    pub route_id: i32,
    #[serde(rename = "RouteName")]
    pub route_name: String,
    #[serde(rename = "StopNum")]
    pub stop_num: Option<i32>,
    #[serde(rename = "LocationID")]
    pub location_id: Option<i32>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
}

impl From<RouteWithStopRow> for RouteRowResponse {
    fn from(row: RouteWithStopRow) -> Self {
        Self {
            route_id: row.route_id,
            route_name: row.route_name,
            stop_num: row.stop_num,
            location_id: row.location_id,
            longitude: row.longitude,
            latitude: row.latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    // La validación de longitud serializa el valor rechazado en los
    // params del error, así que tiene que poder fallar sin panic
    #[test]
    fn test_create_route_without_stops_is_invalid() {
        let request = CreateRouteRequest {
            name: "ruta".to_string(),
            stops: Vec::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("stops"));
    }

    #[test]
    fn test_create_route_with_one_stop_is_valid() {
        let request = CreateRouteRequest {
            name: "ruta".to_string(),
            stops: vec![StopInput { stop_num: 1, location_id: 5 }],
        };

        assert!(request.validate().is_ok());
    }
}
