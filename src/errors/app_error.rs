use sutra_core::CoreEngineError;
use sutra_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Error del motor: {0}")]
    Engine(#[from] CoreEngineError),
    #[error("Uso: {0}")]
    Usage(String),
    #[error("no starting rule found for system '{0}'")]
    NoStartRule(String),
}

impl AppError {
    /// Código de salida del binario `sutra`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) | AppError::Config(_) => 2,
            AppError::NoStartRule(_) => 4,
            _ => 5,
        }
    }
}
