//! Política de interpretación del TAT (turn-around time) de una regla.
//!
//! En la base de datos el tipo viaja como string (`hourtat`, `daytat`, ...).
//! Aquí lo cerramos en un enum: cualquier otro valor se rechaza al validar la
//! fila, nunca llega al calculador.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TatType {
    /// `tat` horas desde el inicio.
    #[serde(rename = "hourtat")]
    HourTat,
    /// `tat` días laborales de 8 horas.
    #[serde(rename = "daytat")]
    DayTat,
    /// Fecha límite: día siguiente a la hora `inicio de oficina + tat`.
    #[serde(rename = "beforetat")]
    BeforeTat,
    /// Horas expresadas en minutos (conserva fracciones de hora).
    #[serde(rename = "specifytat")]
    SpecifyTat,
}

impl TatType {
    pub const ALL: [TatType; 4] = [TatType::HourTat, TatType::DayTat, TatType::BeforeTat, TatType::SpecifyTat];

    pub fn as_str(&self) -> &'static str {
        match self {
            TatType::HourTat => "hourtat",
            TatType::DayTat => "daytat",
            TatType::BeforeTat => "beforetat",
            TatType::SpecifyTat => "specifytat",
        }
    }

    /// `true` para los tipos que representan una duración (escalable por
    /// throughput). `beforetat` es una fecha límite.
    pub fn is_duration(&self) -> bool {
        !matches!(self, TatType::BeforeTat)
    }
}

impl FromStr for TatType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TatType::ALL.into_iter()
                    .find(|t| t.as_str() == normalized)
                    .ok_or_else(|| DomainError::UnknownTatType(s.to_string()))
    }
}

impl fmt::Display for TatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
