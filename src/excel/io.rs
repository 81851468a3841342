use calamine::Data;

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Interpreta una celda como número de días.
///
/// Celdas numéricas se usan tal cual; textos se parsean tras recortar espacios.
/// Vacíos, errores y NaN devuelven `None`.
pub fn cell_to_number(c: &Data) -> Option<f64> {
    let n = match c {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| !v.is_nan())
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Busca una columna por nombre exacto (recortado) y, si no aparece, por
/// nombre normalizado con `normalize_header`.
pub fn find_column(headers: &[String], nombre: &str) -> Option<usize> {
    let buscado = nombre.trim();
    if let Some(i) = headers.iter().position(|h| h.trim() == buscado) {
        return Some(i);
    }
    let norm = normalize_header(buscado);
    headers.iter().position(|h| normalize_header(h) == norm)
}
