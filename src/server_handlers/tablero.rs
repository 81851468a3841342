use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::{construir_tablero, opciones_producto};
use crate::config::TableroConfig;
use crate::error::TableroError;
use crate::excel::{leer_reporte, resumen_a_xlsx};
use crate::server_handlers::{consulta_desde_query, respuesta_error};

/// Corre la lectura del Excel en el pool bloqueante de tokio.
async fn en_bloqueante<T, F>(f: F) -> Result<T, HttpResponse>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, TableroError> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(respuesta_error(&e)),
        Err(e) => Err(HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)}))),
    }
}

/// GET /tablero?umbral=15&umbral_requerimientos=15&productos=a&productos=b
pub async fn tablero_handler(
    cfg: web::Data<TableroConfig>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let consulta = match consulta_desde_query(&query, &cfg) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let path = cfg.reporte_path.clone();
    match en_bloqueante(move || construir_tablero(&path, &consulta)).await {
        Ok(tablero) => HttpResponse::Ok().json(tablero),
        Err(resp) => resp,
    }
}

/// GET /productos
pub async fn productos_handler(cfg: web::Data<TableroConfig>) -> impl Responder {
    let path = cfg.reporte_path.clone();
    match en_bloqueante(move || leer_reporte(&path)).await {
        Ok(reporte) => {
            let mut body = json!({"productos": opciones_producto(&reporte.reclamos)});
            if reporte.reclamos.idx_producto.is_none() {
                body["advertencias"] = json!(reporte.reclamos.advertencias);
            }
            HttpResponse::Ok().json(body)
        }
        Err(resp) => resp,
    }
}

/// GET /resumen/descargar?umbral=15&productos=a&productos=b
/// Devuelve la tabla comparativa de Reclamos como `.xlsx`.
pub async fn descargar_resumen_handler(
    cfg: web::Data<TableroConfig>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let consulta = match consulta_desde_query(&query, &cfg) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let path = cfg.reporte_path.clone();
    let generado = en_bloqueante(move || {
        let tablero = construir_tablero(&path, &consulta)?;
        resumen_a_xlsx(&tablero.reclamos.resumen)
    })
    .await;

    match generado {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((header::CONTENT_DISPOSITION, "attachment; filename=\"Resumen_Reclamos.xlsx\""))
            .body(bytes),
        Err(resp) => resp,
    }
}
