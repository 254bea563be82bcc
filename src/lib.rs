//! Backend de planificación de rutas para vehículos con restricciones
//! de altura, peso y anchura.
//!
//! Arquitectura MVC: routes → controllers → repositories, con los
//! servicios de dominio (routing, guardado de rutas) en `services/`.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Ensambla el router completo de la aplicación.
pub fn create_app(state: AppState) -> Router {
    // Sin CORS_ORIGINS configurado se permite cualquier origen (desarrollo)
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest(
            "/vehicles",
            routes::vehicle_routes::create_vehicle_router(state.clone()),
        )
        .nest(
            "/locations",
            routes::location_routes::create_location_router(state.clone()),
        )
        .nest(
            "/routes",
            routes::route_routes::create_route_router(state.clone()),
        )
        .nest(
            "/userlocations",
            routes::user_location_routes::create_user_location_router(state.clone()),
        )
        .nest("/routing", routes::routing_routes::create_routing_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "ClearRoute API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
