use thiserror::Error;

/// Errores de validación en la frontera de escritura del Rule Store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("tatType desconocido: {0}")]
    UnknownTatType(String),

    #[error("el sistema '{0}' ya tiene una regla de inicio")]
    DuplicateStartRule(String),

    #[error("horario de oficina inválido: {start}..{end}")]
    InvalidOfficeHours { start: u32, end: u32 },
}
