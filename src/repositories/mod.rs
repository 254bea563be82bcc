//! Repositorios de acceso a datos
//!
//! Un struct por entidad con queries parametrizadas; nunca SQL
//! construido por concatenación.

pub mod location_repository;
pub mod route_repository;
pub mod user_location_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use location_repository::LocationRepository;
pub use route_repository::{RouteRepository, RouteSaveTransaction};
pub use user_location_repository::UserLocationRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
