// Biblioteca raíz del crate `tablero_sare`.
// Tablero de control de Reclamos / Requerimientos leído desde el reporte
// general en Excel, expuesto como API HTTP.
pub mod actualizacion;
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
