use crate::models::{Estado, Registro};

/// `Vencido` si hay días de demora y son `>= umbral`; en cualquier otro caso
/// (incluido un valor ausente) `DentroDeFecha`.
pub fn clasificar(dias_demora: Option<f64>, umbral: u32) -> Estado {
    match dias_demora {
        Some(d) if !d.is_nan() && d >= umbral as f64 => Estado::Vencido,
        _ => Estado::DentroDeFecha,
    }
}

/// Recalcula el estado de cada registro con el umbral indicado.
pub fn recalcular_estados(registros: &mut [Registro], umbral: u32) {
    for r in registros.iter_mut() {
        r.estado = clasificar(r.dias_demora, umbral);
    }
}

/// Cuenta (dentro_de_fecha, vencido) sobre una lista ya clasificada.
pub fn contar_estados(registros: &[Registro]) -> (usize, usize) {
    let vencidos = registros.iter().filter(|r| r.estado == Estado::Vencido).count();
    (registros.len() - vencidos, vencidos)
}
