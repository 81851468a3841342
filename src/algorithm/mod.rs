// Módulo de alto nivel: un ciclo de cálculo del tablero
// (leer reporte -> filtrar -> clasificar -> resumir)
pub mod estado;
pub mod filters;
pub mod resumen;

pub use estado::{clasificar, contar_estados, recalcular_estados};
pub use filters::{aplicar_filtro_producto, filtrar_por_producto, opciones_producto};
pub use resumen::{agregar, generar_tabla_comparativa};

use std::path::Path;

use crate::config::{TableroConfig, UMBRAL_MAX, UMBRAL_MIN};
use crate::error::TableroError;
use crate::excel::{info_archivo, leer_reporte};
use crate::models::{HojaReporte, SeccionTablero, Tablero};

/// Parámetros de un ciclo de cálculo.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultaTablero {
    pub umbral_reclamos: u32,
    pub umbral_requerimientos: u32,
    /// `None` = todos los productos disponibles.
    pub productos: Option<Vec<String>>,
}

impl ConsultaTablero {
    pub fn desde_config(cfg: &TableroConfig) -> Self {
        ConsultaTablero {
            umbral_reclamos: cfg.umbral_reclamos,
            umbral_requerimientos: cfg.umbral_requerimientos,
            productos: None,
        }
    }
}

/// Verifica que el umbral esté en el rango permitido y lo devuelve como `u32`.
pub fn validar_umbral(umbral: i64) -> Result<u32, TableroError> {
    if umbral < UMBRAL_MIN as i64 || umbral > UMBRAL_MAX as i64 {
        return Err(TableroError::UmbralFueraDeRango { umbral, min: UMBRAL_MIN, max: UMBRAL_MAX });
    }
    Ok(umbral as u32)
}

/// Clasifica y resume una hoja ya filtrada.
pub fn calcular_seccion(hoja: HojaReporte, umbral: u32) -> SeccionTablero {
    let HojaReporte { columnas, registros, advertencias, .. } = hoja;
    let (registros, resumen) = agregar(registros, umbral);
    let (dentro_de_fecha, vencidos) = contar_estados(&registros);
    SeccionTablero {
        umbral,
        total: registros.len(),
        vencidos,
        dentro_de_fecha,
        resumen,
        columnas,
        registros,
        advertencias,
    }
}

/// Ejecuta un ciclo completo sobre el reporte en `path`.
///
/// El filtro de producto sólo afecta a Reclamos; Requerimientos se resume
/// completo con su propio umbral.
pub fn construir_tablero<P: AsRef<Path>>(path: P, consulta: &ConsultaTablero) -> Result<Tablero, TableroError> {
    validar_umbral(consulta.umbral_reclamos as i64)?;
    validar_umbral(consulta.umbral_requerimientos as i64)?;

    let path = path.as_ref();
    let corte = info_archivo(path)?;
    let reporte = leer_reporte(path)?;

    let mut reclamos = reporte.reclamos;
    let productos_disponibles = opciones_producto(&reclamos);
    aplicar_filtro_producto(&mut reclamos, consulta.productos.as_deref());

    Ok(Tablero {
        corte,
        productos_disponibles,
        reclamos: calcular_seccion(reclamos, consulta.umbral_reclamos),
        requerimientos: calcular_seccion(reporte.requerimientos, consulta.umbral_requerimientos),
    })
}
