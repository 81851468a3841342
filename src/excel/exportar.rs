use std::io::Cursor;

use crate::error::TableroError;
use crate::excel::reporte::COL_RESPONSABLE;
use crate::models::{Estado, FilaResumen};

pub const HOJA_RESUMEN: &str = "Resumen";

/// Genera un `.xlsx` con la tabla comparativa por responsable.
pub fn resumen_a_xlsx(resumen: &[FilaResumen]) -> Result<Vec<u8>, TableroError> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book
        .new_sheet(HOJA_RESUMEN)
        .map_err(|e| TableroError::Exportacion(e.to_string()))?;

    let encabezados = [COL_RESPONSABLE, Estado::DentroDeFecha.etiqueta(), Estado::Vencido.etiqueta(), "TOTAL"];
    for (i, h) in encabezados.iter().enumerate() {
        sheet.get_cell_mut((i as u32 + 1, 1)).set_value(*h);
    }

    for (i, fila) in resumen.iter().enumerate() {
        let row = i as u32 + 2;
        sheet.get_cell_mut((1, row)).set_value(fila.responsable.as_str());
        sheet.get_cell_mut((2, row)).set_value_number(fila.dentro_de_fecha as f64);
        sheet.get_cell_mut((3, row)).set_value_number(fila.vencido as f64);
        sheet.get_cell_mut((4, row)).set_value_number(fila.total as f64);
    }

    let mut out = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)
        .map_err(|e| TableroError::Exportacion(e.to_string()))?;
    Ok(out.into_inner())
}
