use std::collections::HashMap;

use crate::algorithm::estado::recalcular_estados;
use crate::models::{Estado, FilaResumen, Registro};

/// Clasifica los registros con `umbral` y arma la tabla comparativa
/// "Dentro de fecha" vs "Vencido" por responsable.
///
/// Los registros sin responsable se clasifican pero no entran al resumen.
/// El resumen queda ordenado por vencidos y luego total, ambos descendentes;
/// los empates restantes se resuelven por nombre para que el orden sea estable.
pub fn agregar(mut registros: Vec<Registro>, umbral: u32) -> (Vec<Registro>, Vec<FilaResumen>) {
    recalcular_estados(&mut registros, umbral);
    let resumen = generar_tabla_comparativa(&registros);
    (registros, resumen)
}

/// Agrupa registros ya clasificados por responsable.
pub fn generar_tabla_comparativa(registros: &[Registro]) -> Vec<FilaResumen> {
    let mut grupos: HashMap<&str, (usize, usize)> = HashMap::new();
    for r in registros.iter() {
        if r.responsable.trim().is_empty() {
            continue;
        }
        let entry = grupos.entry(r.responsable.as_str()).or_insert((0, 0));
        match r.estado {
            Estado::DentroDeFecha => entry.0 += 1,
            Estado::Vencido => entry.1 += 1,
        }
    }

    let mut resumen: Vec<FilaResumen> = grupos
        .into_iter()
        .map(|(responsable, (dentro, vencido))| FilaResumen {
            responsable: responsable.to_string(),
            dentro_de_fecha: dentro,
            vencido,
            total: dentro + vencido,
        })
        .collect();

    resumen.sort_by(|a, b| {
        b.vencido
            .cmp(&a.vencido)
            .then_with(|| b.total.cmp(&a.total))
            .then_with(|| a.responsable.cmp(&b.responsable))
    });
    resumen
}
