//! Errores del tablero.
//!
//! Ninguno es fatal: todos se traducen a un mensaje en la respuesta HTTP y el
//! servidor sigue atendiendo.

use std::path::PathBuf;
use thiserror::Error;

use crate::actualizacion::FetchError;

#[derive(Debug, Error)]
pub enum TableroError {
    #[error("Archivo no encontrado: {0}. Ejecuta el Robot desde el panel lateral.")]
    ArchivoNoEncontrado(PathBuf),

    #[error("No se halló la columna '{columna}' en {hoja}")]
    ColumnaFaltante { hoja: String, columna: String },

    #[error(transparent)]
    Actualizacion(#[from] FetchError),

    #[error("Error crítico al procesar: {0}")]
    ExcelMalformado(String),

    #[error("Umbral fuera de rango: {umbral} (permitido {min}-{max})")]
    UmbralFueraDeRango { umbral: i64, min: u32, max: u32 },

    #[error("No se pudo generar el resumen: {0}")]
    Exportacion(String),

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for TableroError {
    fn from(e: calamine::Error) -> Self {
        TableroError::ExcelMalformado(e.to_string())
    }
}
