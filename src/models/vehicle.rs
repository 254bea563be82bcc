//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y mapea a la tabla `Vehicle`.
//! Las dimensiones son metros (altura, anchura) y toneladas (peso);
//! pueden ser NULL cuando el usuario no las declara.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle - mapea a la tabla `Vehicle`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i32,
    pub user_id: i32,
    pub name: String,
    pub height: Option<f64>,
    pub weight_t: Option<f64>,
    pub width: Option<f64>,
}
