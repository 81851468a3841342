// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Estado de un registro respecto del umbral de días.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Estado {
    #[serde(rename = "Dentro de fecha")]
    DentroDeFecha,
    #[serde(rename = "Vencido")]
    Vencido,
}

impl Estado {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Estado::DentroDeFecha => "Dentro de fecha",
            Estado::Vencido => "Vencido",
        }
    }
}

/// Una fila de `Data_Reclamos` o `Data_Requerimientos`.
///
/// `estado` es derivado: se recalcula en cada ciclo a partir de `dias_demora`
/// y del umbral vigente, nunca se lee de la hoja.
#[derive(Debug, Clone, Serialize)]
pub struct Registro {
    pub responsable: String,
    pub dias_demora: Option<f64>,
    pub producto: String,
    pub estado: Estado,
    /// Valores de todas las celdas de la fila, en el orden de `HojaReporte::columnas`.
    pub valores: Vec<String>,
}

impl Registro {
    pub fn new(responsable: &str, dias_demora: Option<f64>, producto: &str) -> Self {
        Registro {
            responsable: responsable.to_string(),
            dias_demora,
            producto: producto.to_string(),
            estado: Estado::DentroDeFecha,
            valores: Vec::new(),
        }
    }
}

/// Fila de la tabla comparativa por responsable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilaResumen {
    pub responsable: String,
    pub dentro_de_fecha: usize,
    pub vencido: usize,
    pub total: usize,
}

/// Hoja leída del reporte general.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HojaReporte {
    pub nombre: String,
    pub columnas: Vec<String>,
    pub registros: Vec<Registro>,
    /// Índice de la columna de producto/servicio, si la hoja la trae.
    #[serde(skip)]
    pub idx_producto: Option<usize>,
    pub advertencias: Vec<String>,
}

impl HojaReporte {
    pub fn vacia(nombre: &str) -> Self {
        HojaReporte { nombre: nombre.to_string(), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }
}

/// Contenido completo de `Reporte_General_Sare.xlsx`.
#[derive(Debug, Clone, Default)]
pub struct ReporteGeneral {
    pub reclamos: HojaReporte,
    pub requerimientos: HojaReporte,
}

/// Fecha y hora de corte del archivo (hora de Perú).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoArchivo {
    pub fecha: String,
    pub hora: String,
}

/// Resultado de un ciclo de cálculo para una de las dos hojas.
#[derive(Debug, Clone, Serialize)]
pub struct SeccionTablero {
    pub umbral: u32,
    pub total: usize,
    pub vencidos: usize,
    pub dentro_de_fecha: usize,
    pub resumen: Vec<FilaResumen>,
    pub columnas: Vec<String>,
    pub registros: Vec<Registro>,
    pub advertencias: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tablero {
    pub corte: InfoArchivo,
    pub productos_disponibles: Vec<String>,
    pub reclamos: SeccionTablero,
    pub requerimientos: SeccionTablero,
}
