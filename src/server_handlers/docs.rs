use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::{TableroConfig, UMBRAL_MAX, UMBRAL_MIN};

pub async fn help_handler(cfg: web::Data<TableroConfig>) -> impl Responder {
    let help = json!({
        "description": "Tablero de control de gestión SARE. Lee Data_Reclamos y Data_Requerimientos del reporte general y clasifica cada registro como 'Dentro de fecha' o 'Vencido' (>= umbral días).",
        "endpoints": {
            "GET /tablero": "Resumen por responsable, métricas y detalle. Query: umbral, umbral_requerimientos, productos (un parámetro por producto: productos=a&productos=b)",
            "GET /productos": "Opciones del filtro de producto para Reclamos",
            "GET /resumen/descargar": "Tabla comparativa de Reclamos en .xlsx. Query: umbral, productos (repetible)",
            "POST /actualizar": "Ejecuta el robot en la PC local y reemplaza el reporte (bloquea hasta terminar)",
        },
        "get_example_query": "/tablero?umbral=15&productos=Tarjeta%2C%20D%C3%A9bito&productos=Cuenta%20de%20Ahorros",
        "umbral_rango": [UMBRAL_MIN, UMBRAL_MAX],
        "umbral_defecto": {"reclamos": cfg.umbral_reclamos, "requerimientos": cfg.umbral_requerimientos},
        "reporte": cfg.reporte_path.to_string_lossy(),
    });

    HttpResponse::Ok().json(help)
}
