//! Servicios
//!
//! El adaptador del motor de rutas y el orquestador de guardado.

pub mod route_save_service;
pub mod routing_service;

pub use route_save_service::{RoutePersistence, RouteSaveService, SaveOutcome, SaveRouteError};
pub use routing_service::RoutingService;
