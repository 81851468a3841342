//! Cliente de actualización remota.
//!
//! Llama a la PC local (expuesta vía ngrok) para que el robot regenere el
//! reporte y lo devuelva como bytes. La llamada es bloqueante durante todo el
//! timeout y no se reintenta: el único reintento es que el usuario vuelva a
//! pedir la actualización.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::TableroConfig;
use crate::error::TableroError;

/// Encabezado que evita la página de advertencia del túnel.
pub const HEADER_TUNEL: &str = "ngrok-skip-browser-warning";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error del servidor: {0}")]
    Estado(u16),

    #[error("Error de conexión: {0}")]
    Conexion(#[from] reqwest::Error),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Estado(code) => Some(*code),
            FetchError::Conexion(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// GET `endpoint` con el encabezado del túnel y el timeout dado.
/// Devuelve el cuerpo sólo si la respuesta es 200.
pub fn descargar_reporte(endpoint: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let client = Client::builder().timeout(timeout).build()?;
    let respuesta = client.get(endpoint).header(HEADER_TUNEL, "true").send()?;

    let status = respuesta.status();
    if status != StatusCode::OK {
        return Err(FetchError::Estado(status.as_u16()));
    }
    Ok(respuesta.bytes()?.to_vec())
}

/// Sobrescribe `destino` con `contenido` (sin renombrado atómico ni respaldo).
pub fn guardar_reporte<P: AsRef<Path>>(destino: P, contenido: &[u8]) -> Result<(), TableroError> {
    let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(destino.as_ref())?;
    f.write_all(contenido)?;
    Ok(())
}

/// Dispara el robot y, si responde bien, reemplaza el reporte local.
/// Ante cualquier fallo el archivo existente queda intacto.
pub fn actualizar_reporte(cfg: &TableroConfig) -> Result<usize, TableroError> {
    let endpoint = cfg.endpoint_actualizacion();
    log::info!("conectando con la PC local: {}", endpoint);

    let contenido = match descargar_reporte(&endpoint, cfg.timeout) {
        Ok(c) => c,
        Err(e) => {
            log::error!("actualización fallida: {}", e);
            return Err(e.into());
        }
    };

    guardar_reporte(&cfg.reporte_path, &contenido)?;
    log::info!("actualización exitosa: {} bytes en {:?}", contenido.len(), cfg.reporte_path);
    Ok(contenido.len())
}
