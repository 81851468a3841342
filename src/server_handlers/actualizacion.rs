use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::actualizacion::actualizar_reporte;
use crate::config::TableroConfig;
use crate::server_handlers::respuesta_error;

/// POST /actualizar
/// Ejecuta el robot remoto y reemplaza el reporte. La petición queda
/// bloqueada hasta que el robot responde o vence el timeout.
pub async fn actualizar_handler(cfg: web::Data<TableroConfig>) -> impl Responder {
    let cfg = cfg.get_ref().clone();
    let blocking = tokio::task::spawn_blocking(move || actualizar_reporte(&cfg));

    match blocking.await {
        Ok(Ok(bytes)) => HttpResponse::Ok().json(json!({"status": "ok", "bytes": bytes})),
        Ok(Err(e)) => respuesta_error(&e),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    }
}
