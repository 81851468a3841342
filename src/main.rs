// --- Tablero SARE - Archivo principal ---

use tablero_sare::config::TableroConfig;
use tablero_sare::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // .env primero: puede traer RUST_LOG y las variables SARE_*
    let _ = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = TableroConfig::from_env();

    log::info!("=== Tablero SARE (API) ===");
    log::info!("reporte: {:?} | robot: {}", config.reporte_path, config.endpoint_actualizacion());
    log::info!("iniciando servidor en http://{}", config.bind);
    run_server(config).await
}
