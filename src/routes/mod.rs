pub mod auth_routes;
pub mod location_routes;
pub mod route_routes;
pub mod routing_routes;
pub mod user_location_routes;
pub mod vehicle_routes;
