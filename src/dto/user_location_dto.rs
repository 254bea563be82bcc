//! DTOs de ubicaciones favoritas

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserLocationRow;

/// Request de POST /userlocations
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUserLocationRequest {
    pub location_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request de DELETE /userlocations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserLocationRequest {
    pub location_id: i32,
}

/// Fila del listado GET /userlocations
#[derive(Debug, Serialize)]
pub struct UserLocationResponse {
    #[serde(rename = "LocationID")]
    pub location_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl From<UserLocationRow> for UserLocationResponse {
    fn from(row: UserLocationRow) -> Self {
        Self {
            location_id: row.location_id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
