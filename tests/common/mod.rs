// Helpers compartidos por los tests: construyen reportes de prueba en disco.
#![allow(dead_code)]

use std::path::Path;

pub enum Celda {
    T(&'static str),
    N(f64),
    Vacia,
}

use Celda::{N, T, Vacia};

/// Escribe un workbook con las hojas indicadas (la primera fila es el encabezado).
pub fn escribir_libro(path: &Path, hojas: &[(&str, Vec<Vec<Celda>>)]) {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    for (nombre, filas) in hojas.iter() {
        let sheet = book.new_sheet(*nombre).expect("no se pudo crear la hoja");
        for (r, fila) in filas.iter().enumerate() {
            for (c, celda) in fila.iter().enumerate() {
                let coord = (c as u32 + 1, r as u32 + 1);
                match celda {
                    T(s) => {
                        sheet.get_cell_mut(coord).set_value(*s);
                    }
                    N(n) => {
                        sheet.get_cell_mut(coord).set_value_number(*n);
                    }
                    Vacia => {}
                }
            }
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("no se pudo escribir el xlsx");
}

/// Reporte de referencia:
/// - Reclamos: Ana 20 Tarjeta, Ana 5 Cuenta, Luis 16 Tarjeta, Luis (vacío) Cuenta, Marta 30 (sin producto)
/// - Requerimientos (sin columna de producto): Ana 14, Pedro 15, Pedro 40
pub fn escribir_reporte_base(path: &Path) {
    let reclamos = vec![
        vec![T("N° Reclamo"), T("Asignado a:"), T("Días Demora"), T("Producto/Servicio - Proced./Admin.")],
        vec![T("R1"), T("Ana"), N(20.0), T("Tarjeta")],
        vec![T("R2"), T("Ana"), N(5.0), T("Cuenta")],
        vec![T("R3"), T("Luis"), N(16.0), T("Tarjeta")],
        vec![T("R4"), T("Luis"), Vacia, T("Cuenta")],
        vec![T("R5"), T("Marta"), N(30.0), Vacia],
    ];
    let requerimientos = vec![
        vec![T("Asignado a:"), T("Días Demora")],
        vec![T("Ana"), N(14.0)],
        vec![T("Pedro"), N(15.0)],
        vec![T("Pedro"), N(40.0)],
    ];
    escribir_libro(path, &[("Data_Reclamos", reclamos), ("Data_Requerimientos", requerimientos)]);
}
