//! Filtro por producto/servicio (sólo se aplica a Reclamos).

use std::collections::{BTreeSet, HashSet};

use crate::models::{HojaReporte, Registro};

/// Valores distintos, no vacíos y ordenados de la columna de producto.
/// Devuelve una lista vacía si la hoja no trae la columna.
pub fn opciones_producto(hoja: &HojaReporte) -> Vec<String> {
    if hoja.idx_producto.is_none() {
        return Vec::new();
    }
    let unicos: BTreeSet<&str> = hoja
        .registros
        .iter()
        .map(|r| r.producto.as_str())
        .filter(|p| !p.is_empty())
        .collect();
    unicos.into_iter().map(|p| p.to_string()).collect()
}

/// Conserva los registros cuyo producto está en `seleccion`.
pub fn filtrar_por_producto(registros: Vec<Registro>, seleccion: &[String]) -> Vec<Registro> {
    let permitidos: HashSet<&str> = seleccion.iter().map(|s| s.as_str()).collect();
    registros
        .into_iter()
        .filter(|r| permitidos.contains(r.producto.as_str()))
        .collect()
}

/// Aplica el filtro de producto sobre la hoja. Sin selección explícita se usan
/// todas las opciones. Si falta la columna el filtro se omite.
pub fn aplicar_filtro_producto(hoja: &mut HojaReporte, seleccion: Option<&[String]>) {
    if hoja.idx_producto.is_none() {
        return;
    }
    let opciones;
    let seleccion = match seleccion {
        Some(s) => s,
        None => {
            opciones = opciones_producto(hoja);
            opciones.as_slice()
        }
    };
    let registros = std::mem::take(&mut hoja.registros);
    hoja.registros = filtrar_por_producto(registros, seleccion);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoja(productos: &[&str]) -> HojaReporte {
        let mut h = HojaReporte::vacia("Data_Reclamos");
        h.idx_producto = Some(2);
        h.registros = productos.iter().map(|p| Registro::new("Ana", Some(1.0), p)).collect();
        h
    }

    #[test]
    fn opciones_ordenadas_sin_vacios() {
        let h = hoja(&["Tarjeta", "", "Cuenta", "Tarjeta"]);
        assert_eq!(opciones_producto(&h), vec!["Cuenta".to_string(), "Tarjeta".to_string()]);
    }

    #[test]
    fn seleccion_por_defecto_descarta_productos_vacios() {
        let mut h = hoja(&["Tarjeta", "", "Cuenta"]);
        aplicar_filtro_producto(&mut h, None);
        assert_eq!(h.registros.len(), 2);
    }

    #[test]
    fn seleccion_explicita() {
        let mut h = hoja(&["Tarjeta", "Cuenta", "Cuenta"]);
        let sel = vec!["Cuenta".to_string()];
        aplicar_filtro_producto(&mut h, Some(sel.as_slice()));
        assert_eq!(h.registros.len(), 2);

        let mut h = hoja(&["Tarjeta"]);
        let vacia: Vec<String> = Vec::new();
        aplicar_filtro_producto(&mut h, Some(vacia.as_slice()));
        assert!(h.registros.is_empty());
    }

    #[test]
    fn sin_columna_no_filtra() {
        let mut h = hoja(&["", ""]);
        h.idx_producto = None;
        let sel = vec!["Cuenta".to_string()];
        aplicar_filtro_producto(&mut h, Some(sel.as_slice()));
        assert_eq!(h.registros.len(), 2);
    }
}
