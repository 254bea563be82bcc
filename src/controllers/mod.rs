//! Controllers
//!
//! Lógica de negocio por recurso: validación, reglas de propiedad
//! y conversión a DTOs.

pub mod auth_controller;
pub mod location_controller;
pub mod route_controller;
pub mod user_location_controller;
pub mod vehicle_controller;
