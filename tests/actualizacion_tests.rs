use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tablero_sare::actualizacion::{actualizar_reporte, descargar_reporte, FetchError};
use tablero_sare::config::TableroConfig;
use tablero_sare::error::TableroError;

/// Servidor HTTP de una sola petición: responde `respuesta` y devuelve la
/// petición recibida.
fn servidor_unico(respuesta: Vec<u8>) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut recibido = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            recibido.extend_from_slice(&chunk[..n]);
            if recibido.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(&respuesta).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&recibido).to_lowercase()
    });
    (format!("http://{}", addr), handle)
}

fn respuesta_http(status: &str, body: &[u8]) -> Vec<u8> {
    let mut out = format!("HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n", status, body.len()).into_bytes();
    out.extend_from_slice(body);
    out
}

/// Puerto local en el que no escucha nadie.
fn endpoint_inalcanzable() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn config(url_api: String, reporte_path: PathBuf) -> TableroConfig {
    TableroConfig { url_api, reporte_path, timeout: Duration::from_secs(10), ..TableroConfig::default() }
}

#[test]
fn test_descarga_exitosa_envia_header_del_tunel() {
    let (url, handle) = servidor_unico(respuesta_http("200 OK", b"nuevo reporte"));
    let bytes = descargar_reporte(&format!("{}/actualizar_datos", url), Duration::from_secs(10)).expect("Debe descargar");
    assert_eq!(bytes, b"nuevo reporte".to_vec());

    let peticion = handle.join().unwrap();
    assert!(peticion.starts_with("get /actualizar_datos"));
    assert!(peticion.contains("ngrok-skip-browser-warning: true"));
}

#[test]
fn test_actualizar_reporte_sobrescribe_archivo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Reporte_General_Sare.xlsx");
    std::fs::write(&path, b"contenido anterior mucho mas largo").unwrap();

    let (url, handle) = servidor_unico(respuesta_http("200 OK", b"nuevo"));
    let escritos = actualizar_reporte(&config(url, path.clone())).expect("Debe actualizar");
    handle.join().unwrap();

    assert_eq!(escritos, 5);
    assert_eq!(std::fs::read(&path).unwrap(), b"nuevo".to_vec());
}

#[test]
fn test_estado_distinto_de_200_no_toca_el_archivo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Reporte_General_Sare.xlsx");
    std::fs::write(&path, b"original").unwrap();

    let (url, handle) = servidor_unico(respuesta_http("500 Internal Server Error", b"robot caido"));
    let r = actualizar_reporte(&config(url, path.clone()));
    handle.join().unwrap();

    match r {
        Err(TableroError::Actualizacion(e)) => {
            assert!(matches!(e, FetchError::Estado(500)));
            assert_eq!(e.status_code(), Some(500));
            assert_eq!(e.to_string(), "Error del servidor: 500");
        }
        other => panic!("se esperaba error de actualización, llegó {:?}", other),
    }
    assert_eq!(std::fs::read(&path).unwrap(), b"original".to_vec());
}

#[test]
fn test_endpoint_inalcanzable_no_toca_el_archivo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Reporte_General_Sare.xlsx");
    std::fs::write(&path, b"original").unwrap();

    let r = actualizar_reporte(&config(endpoint_inalcanzable(), path.clone()));
    assert!(matches!(r, Err(TableroError::Actualizacion(FetchError::Conexion(_)))));
    assert_eq!(std::fs::read(&path).unwrap(), b"original".to_vec());
}

#[test]
fn test_endpoint_inalcanzable_sin_archivo_previo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Reporte_General_Sare.xlsx");

    let r = actualizar_reporte(&config(endpoint_inalcanzable(), path.clone()));
    assert!(r.is_err());
    assert!(!path.exists());
}
