//! Modelo de User
//!
//! Este módulo contiene el struct User que mapea a la tabla `User`
//! del schema MySQL (columnas PascalCase, id autoincremental).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User - mapea a la tabla `User`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Hash bcrypt, nunca se serializa hacia la API
    #[serde(skip_serializing)]
    pub password: String,
}
