//! ProcessSutra
//!
//! Capa de aplicación sobre el motor de proyección:
//! - `config`: configuración desde el entorno (`.env` incluido).
//! - `errors`: errores de aplicación y códigos de salida.
//! - `cli`: parseo de argumentos y ejecución de `project` / `simulate`.

pub mod cli;
pub mod config;
pub mod errors;

pub use config::AppConfig;
pub use errors::AppError;
