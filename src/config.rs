//! Configuración del tablero leída desde variables de entorno.

use std::path::PathBuf;
use std::time::Duration;

pub const URL_API_DEFECTO: &str = "https://unbased-pallidly-donn.ngrok-free.dev";
pub const REPORTE_DEFECTO: &str = "Reporte_General_Sare.xlsx";
pub const TIMEOUT_DEFECTO_SEGUNDOS: u64 = 300;
pub const UMBRAL_DEFECTO: u32 = 15;
pub const BIND_DEFECTO: &str = "127.0.0.1:8080";

/// Rango aceptado para el umbral de vencimiento (días).
pub const UMBRAL_MIN: u32 = 1;
pub const UMBRAL_MAX: u32 = 60;

#[derive(Debug, Clone)]
pub struct TableroConfig {
    pub url_api: String,
    pub reporte_path: PathBuf,
    pub timeout: Duration,
    pub umbral_reclamos: u32,
    pub umbral_requerimientos: u32,
    pub bind: String,
}

impl Default for TableroConfig {
    fn default() -> Self {
        TableroConfig {
            url_api: URL_API_DEFECTO.to_string(),
            reporte_path: PathBuf::from(REPORTE_DEFECTO),
            timeout: Duration::from_secs(TIMEOUT_DEFECTO_SEGUNDOS),
            umbral_reclamos: UMBRAL_DEFECTO,
            umbral_requerimientos: UMBRAL_DEFECTO,
            bind: BIND_DEFECTO.to_string(),
        }
    }
}

impl TableroConfig {
    /// Lee las variables `SARE_*` del entorno del proceso. `main` carga `.env`
    /// antes de llamar aquí.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda de variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = TableroConfig::default();
        let leer = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = leer("SARE_URL_API") {
            cfg.url_api = url;
        }
        if let Some(p) = leer("SARE_REPORTE_PATH") {
            cfg.reporte_path = PathBuf::from(p);
        }
        if let Some(secs) = leer("SARE_TIMEOUT_SEGUNDOS") {
            match secs.parse::<u64>() {
                Ok(s) => cfg.timeout = Duration::from_secs(s),
                Err(_) => log::warn!("SARE_TIMEOUT_SEGUNDOS inválido ('{}'), usando {}", secs, TIMEOUT_DEFECTO_SEGUNDOS),
            }
        }
        if let Some(u) = leer("SARE_UMBRAL_RECLAMOS") {
            cfg.umbral_reclamos = parse_umbral("SARE_UMBRAL_RECLAMOS", &u);
        }
        if let Some(u) = leer("SARE_UMBRAL_REQUERIMIENTOS") {
            cfg.umbral_requerimientos = parse_umbral("SARE_UMBRAL_REQUERIMIENTOS", &u);
        }
        if let Some(b) = leer("SARE_BIND") {
            cfg.bind = b;
        }
        cfg
    }

    /// URL completa del endpoint que dispara el robot en la PC local.
    pub fn endpoint_actualizacion(&self) -> String {
        format!("{}/actualizar_datos", self.url_api.trim_end_matches('/'))
    }
}

fn parse_umbral(var: &str, raw: &str) -> u32 {
    match raw.parse::<u32>() {
        Ok(u) if (UMBRAL_MIN..=UMBRAL_MAX).contains(&u) => u,
        _ => {
            log::warn!("{} inválido ('{}'), usando {}", var, raw, UMBRAL_DEFECTO);
            UMBRAL_DEFECTO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_sin_variables() {
        let cfg = TableroConfig::from_lookup(|_| None);
        assert_eq!(cfg.reporte_path, PathBuf::from(REPORTE_DEFECTO));
        assert_eq!(cfg.timeout, Duration::from_secs(300));
        assert_eq!(cfg.umbral_reclamos, 15);
        assert_eq!(cfg.endpoint_actualizacion(), format!("{}/actualizar_datos", URL_API_DEFECTO));
    }

    #[test]
    fn variables_sobrescriben_y_valores_invalidos_caen_al_defecto() {
        let vars: HashMap<&str, &str> = [
            ("SARE_URL_API", "http://localhost:9000/"),
            ("SARE_TIMEOUT_SEGUNDOS", "abc"),
            ("SARE_UMBRAL_RECLAMOS", "30"),
            ("SARE_UMBRAL_REQUERIMIENTOS", "99"),
        ]
        .into_iter()
        .collect();
        let cfg = TableroConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.endpoint_actualizacion(), "http://localhost:9000/actualizar_datos");
        assert_eq!(cfg.timeout, Duration::from_secs(300));
        assert_eq!(cfg.umbral_reclamos, 30);
        assert_eq!(cfg.umbral_requerimientos, 15);
    }
}
