//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre requests:
//! solo el pool de conexiones, la configuración y el adaptador de rutas.

use sqlx::MySqlPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::routing_service::RoutingService;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub config: EnvironmentConfig,
    pub routing: RoutingService,
}

impl AppState {
    pub fn new(pool: MySqlPool, config: EnvironmentConfig) -> Self {
        let routing = RoutingService::new(
            config.graphhopper_url.clone(),
            config.graphhopper_profile.clone(),
        );

        Self {
            pool,
            config,
            routing,
        }
    }
}
