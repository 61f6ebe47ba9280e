use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_registry::config::{DatabaseConfig, EnvironmentConfig};
use fleet_registry::database::DatabaseConnection;
use fleet_registry::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fleet_registry=debug,tower_http=info")),
        )
        .init();

    info!("🚚 Fleet Registry - Drivers & Vehicles API");
    info!("==========================================");

    let config = EnvironmentConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS permisivo: define CORS_ORIGINS fuera de desarrollo");
    }

    let addr = config.server_url();
    let app = create_router(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Drivers:");
    info!("   GET    /drivers/driver - Listar conductores (created_at_gte, created_at_lte)");
    info!("   GET    /drivers/driver/:id - Obtener conductor");
    info!("   POST   /drivers/driver - Crear conductor");
    info!("   PUT    /drivers/driver/:id - Actualizar conductor");
    info!("   DELETE /drivers/driver/:id - Eliminar conductor");
    info!("🚗 Vehicles:");
    info!("   GET    /vehicles/vehicle - Listar vehículos (with_drivers=yes|no)");
    info!("   GET    /vehicles/vehicle/:id - Obtener vehículo");
    info!("   POST   /vehicles/vehicle - Crear vehículo");
    info!("   PUT    /vehicles/vehicle/:id - Actualizar vehículo");
    info!("   POST   /vehicles/set_driver/:vehicle_id - Asignar/liberar conductor");
    info!("   DELETE /vehicles/vehicle/:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
