//! DTOs de Vehicle
//!
//! Los cuerpos de request llegan en camelCase; las responses de
//! listado conservan las claves PascalCase del schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub height: Option<f64>,

    #[validate(range(min = 0.0))]
    pub weight_t: Option<f64>,

    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
}

/// Request para actualizar un vehículo existente (campos parciales)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 0.0))]
    pub height: Option<f64>,

    #[validate(range(min = 0.0))]
    pub weight_t: Option<f64>,

    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
}

/// Response de creación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleResponse {
    pub vehicle_id: i32,
}

/// Response de vehículo para listados
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Height")]
    pub height: Option<f64>,
    #[serde(rename = "WeightT")]
    pub weight_t: Option<f64>,
    #[serde(rename = "Width")]
    pub width: Option<f64>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id,
            name: vehicle.name,
            height: vehicle.height,
            weight_t: vehicle.weight_t,
            width: vehicle.width,
        }
    }
}
