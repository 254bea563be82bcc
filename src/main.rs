use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use clearroute_backend::config::environment::EnvironmentConfig;
use clearroute_backend::create_app;
use clearroute_backend::database::connection::create_pool;
use clearroute_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 ClearRoute - Backend de rutas para vehículos");
    info!("===============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_addr().parse()?;

    let state = AppState::new(pool, config);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Auth:");
    info!("   POST /auth/register - Registrar usuario");
    info!("   POST /auth/login - Login");
    info!("   GET  /auth/me - Usuario actual");
    info!("🚗 Vehicles:");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   POST /vehicles - Crear vehículo");
    info!("   PUT  /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("📍 Locations:");
    info!("   GET  /locations - Listar ubicaciones");
    info!("   POST /locations - Crear ubicación");
    info!("🗺️ Routes:");
    info!("   GET  /routes - Rutas del usuario (con paradas)");
    info!("   POST /routes - Crear ruta");
    info!("   POST /routes/save - Guardar ruta actual (waypoints)");
    info!("   DELETE /routes/:id - Eliminar ruta");
    info!("⭐ User locations:");
    info!("   GET  /userlocations - Favoritas del usuario");
    info!("   POST /userlocations - Añadir favorita");
    info!("   DELETE /userlocations - Quitar favorita");
    info!("🧭 Routing:");
    info!("   POST /routing/route - Calcular ruta con restricciones");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
