//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: helpers para convertir celdas de calamine y ubicar columnas
//! - `reporte`: lectura de `Data_Reclamos` y `Data_Requerimientos`
//! - `exportar`: escritura de la tabla comparativa a `.xlsx`

/// Helpers de IO y utilidades para parsing de Excel
pub mod io;

/// Lectura del reporte general: `leer_reporte`
pub mod reporte;

/// Exportación del resumen: `resumen_a_xlsx`
pub mod exportar;

pub use exportar::resumen_a_xlsx;
pub use reporte::{leer_reporte, COL_DIAS_DEMORA, COL_PRODUCTO, COL_RESPONSABLE, HOJA_RECLAMOS, HOJA_REQUERIMIENTOS};

use chrono::{DateTime, Duration, FixedOffset, Utc};
use std::fs;
use std::path::Path;

use crate::error::TableroError;
use crate::models::InfoArchivo;

/// Desfase de la hora de Perú (UTC-5, sin horario de verano).
const OFFSET_PERU_SEGUNDOS: i32 = 5 * 3600;

/// Fecha (`%d/%m/%Y`) y hora (`%H:%M:%S`) de la última modificación del
/// archivo, expresadas en hora de Perú.
pub fn info_archivo<P: AsRef<Path>>(path: P) -> Result<InfoArchivo, TableroError> {
    let path = path.as_ref();
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TableroError::ArchivoNoEncontrado(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let modificado: DateTime<Utc> = meta.modified()?.into();
    Ok(formatear_corte(modificado))
}

/// Formatea un instante UTC como fecha/hora de corte en hora de Perú.
pub fn formatear_corte(instante: DateTime<Utc>) -> InfoArchivo {
    let local = match FixedOffset::west_opt(OFFSET_PERU_SEGUNDOS) {
        Some(peru) => instante.with_timezone(&peru).naive_local(),
        None => instante.naive_utc() - Duration::seconds(OFFSET_PERU_SEGUNDOS as i64),
    };
    InfoArchivo {
        fecha: local.format("%d/%m/%Y").to_string(),
        hora: local.format("%H:%M:%S").to_string(),
    }
}
