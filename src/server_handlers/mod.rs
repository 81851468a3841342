pub mod tablero;
pub mod actualizacion;
pub mod docs;

pub use tablero::*;
pub use actualizacion::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde_json::json;

use crate::algorithm::{validar_umbral, ConsultaTablero};
use crate::config::TableroConfig;
use crate::error::TableroError;

/// Traduce un `TableroError` a la respuesta HTTP correspondiente.
pub fn respuesta_error(e: &TableroError) -> HttpResponse {
    let body = json!({"error": e.to_string()});
    match e {
        TableroError::ArchivoNoEncontrado(_) => HttpResponse::NotFound().json(body),
        TableroError::UmbralFueraDeRango { .. } => HttpResponse::BadRequest().json(body),
        TableroError::Actualizacion(_) => HttpResponse::BadGateway().json(body),
        _ => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Valor de un parámetro del query string (la última aparición gana).
fn parametro<'a>(params: &'a [(String, String)], clave: &str) -> Option<&'a str> {
    params.iter().rev().find(|(k, _)| k == clave).map(|(_, v)| v.as_str())
}

/// Lee `umbral`, `umbral_requerimientos` y `productos` del query string; lo
/// que falte se toma de la configuración.
///
/// Cada producto va en su propio parámetro (`productos=a&productos=b`) y se
/// toma tal cual, porque los nombres pueden contener comas.
pub fn consulta_desde_query(params: &[(String, String)], cfg: &TableroConfig) -> Result<ConsultaTablero, HttpResponse> {
    let mut consulta = ConsultaTablero::desde_config(cfg);

    let leer_umbral = |clave: &str, defecto: u32| -> Result<u32, HttpResponse> {
        match parametro(params, clave).map(|s| s.trim()).filter(|s| !s.is_empty()) {
            None => Ok(defecto),
            Some(raw) => {
                let n = raw.parse::<i64>().map_err(|_| {
                    HttpResponse::BadRequest().json(json!({"error": format!("{} inválido: '{}'", clave, raw)}))
                })?;
                validar_umbral(n).map_err(|e| respuesta_error(&e))
            }
        }
    };
    consulta.umbral_reclamos = leer_umbral("umbral", cfg.umbral_reclamos)?;
    consulta.umbral_requerimientos = leer_umbral("umbral_requerimientos", cfg.umbral_requerimientos)?;

    if params.iter().any(|(k, _)| k == "productos") {
        consulta.productos = Some(
            params
                .iter()
                .filter(|(k, v)| k == "productos" && !v.trim().is_empty())
                .map(|(_, v)| v.trim().to_string())
                .collect(),
        );
    }
    Ok(consulta)
}
