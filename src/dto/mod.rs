//! DTOs de la API
//!
//! Tipos de request y response de cada recurso.

pub mod auth_dto;
pub mod location_dto;
pub mod route_dto;
pub mod routing_dto;
pub mod user_location_dto;
pub mod vehicle_dto;
