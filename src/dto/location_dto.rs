//! DTOs de Location

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Location;

/// Request para crear una location
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
}

/// Response de creación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationResponse {
    pub location_id: i32,
}

/// Response de location para listados
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            longitude: location.longitude,
            latitude: location.latitude,
        }
    }
}
