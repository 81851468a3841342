use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::error::TableroError;
use crate::excel::io::{cell_to_number, cell_to_string, find_column};
use crate::models::{HojaReporte, Registro, ReporteGeneral};

pub const HOJA_RECLAMOS: &str = "Data_Reclamos";
pub const HOJA_REQUERIMIENTOS: &str = "Data_Requerimientos";

pub const COL_RESPONSABLE: &str = "Asignado a:";
pub const COL_DIAS_DEMORA: &str = "Días Demora";
pub const COL_PRODUCTO: &str = "Producto/Servicio - Proced./Admin.";

/// Lee las hojas `Data_Reclamos` y `Data_Requerimientos` del reporte general.
///
/// Una hoja ausente se devuelve vacía; un archivo ausente es
/// `ArchivoNoEncontrado` y un workbook ilegible es `ExcelMalformado`.
pub fn leer_reporte<P: AsRef<Path>>(path: P) -> Result<ReporteGeneral, TableroError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TableroError::ArchivoNoEncontrado(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut leer_hoja = |nombre: &str| -> Result<HojaReporte, TableroError> {
        if !sheet_names.iter().any(|s| s == nombre) {
            log::warn!("hoja '{}' no encontrada en {:?}", nombre, path);
            return Ok(HojaReporte::vacia(nombre));
        }
        let range = workbook.worksheet_range(nombre)?;
        Ok(hoja_desde_range(nombre, &range))
    };

    let reclamos = leer_hoja(HOJA_RECLAMOS)?;
    let requerimientos = leer_hoja(HOJA_REQUERIMIENTOS)?;
    log::info!(
        "reporte {:?}: {} reclamos, {} requerimientos",
        path,
        reclamos.registros.len(),
        requerimientos.registros.len()
    );

    Ok(ReporteGeneral { reclamos, requerimientos })
}

/// Convierte el rango de una hoja en registros. La primera fila es el encabezado.
pub fn hoja_desde_range(nombre: &str, range: &Range<Data>) -> HojaReporte {
    let mut hoja = HojaReporte::vacia(nombre);
    let mut rows_iter = range.rows();

    let header_row = match rows_iter.next() {
        Some(h) => h,
        None => return hoja,
    };
    hoja.columnas = header_row.iter().map(cell_to_string).collect();

    let mut columna = |col: &str| -> Option<usize> {
        let idx = find_column(&hoja.columnas, col);
        if idx.is_none() {
            let aviso = TableroError::ColumnaFaltante { hoja: nombre.to_string(), columna: col.to_string() };
            log::warn!("{}", aviso);
            hoja.advertencias.push(aviso.to_string());
        }
        idx
    };
    let idx_responsable = columna(COL_RESPONSABLE);
    let idx_dias = columna(COL_DIAS_DEMORA);
    let idx_producto = columna(COL_PRODUCTO);
    hoja.idx_producto = idx_producto;

    for row in rows_iter {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let texto = |idx: Option<usize>| -> String {
            idx.and_then(|i| row.get(i)).map(cell_to_string).unwrap_or_default()
        };
        let dias = idx_dias.and_then(|i| row.get(i)).and_then(cell_to_number);

        let mut registro = Registro::new(&texto(idx_responsable), dias, &texto(idx_producto));
        registro.valores = row.iter().map(cell_to_string).collect();
        hoja.registros.push(registro);
    }

    hoja
}
