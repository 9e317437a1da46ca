//! Errores de la capa de aplicación.

mod app_error;

pub use app_error::AppError;
