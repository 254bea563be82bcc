//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    // Motor de rutas GraphHopper
    pub graphhopper_url: String,
    pub graphhopper_profile: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            // Los tokens expiran a las 2 horas
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "7200".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            graphhopper_url: env::var("GRAPHHOPPER_URL")
                .unwrap_or_else(|_| "http://localhost:8989/route".to_string()),
            graphhopper_profile: env::var("GRAPHHOPPER_PROFILE")
                .unwrap_or_else(|_| "truck1".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
