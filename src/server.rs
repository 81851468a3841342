use actix_web::{web, App, HttpServer};

use crate::config::TableroConfig;
use crate::server_handlers::{actualizar_handler, descargar_resumen_handler, help_handler, productos_handler, tablero_handler};

/// Registra las rutas del tablero. Se separa de `run_server` para poder
/// montarlas en los tests con `actix_web::test`.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/tablero", web::get().to(tablero_handler))
        .route("/productos", web::get().to(productos_handler))
        .route("/resumen/descargar", web::get().to(descargar_resumen_handler))
        .route("/actualizar", web::post().to(actualizar_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: TableroConfig) -> std::io::Result<()> {
    let bind_addr = config.bind.clone();
    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(configurar_rutas)
    })
    .bind(bind_addr)?
    .run()
    .await
}
