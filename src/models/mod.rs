//! Modelos de datos
//!
//! Structs que mapean a las tablas del schema MySQL.

pub mod location;
pub mod route;
pub mod user;
pub mod user_location;
pub mod vehicle;

pub use location::Location;
pub use route::{Route, RouteStop, RouteWithStopRow};
pub use user::User;
pub use user_location::UserLocationRow;
pub use vehicle::Vehicle;
