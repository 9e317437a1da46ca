use serde::{Deserialize, Serialize};

/// Estado de una tarea proyectada durante la reproducción simulada.
///
/// Las transiciones válidas son:
/// - `Pending` -> `InProgress`
/// - `InProgress` -> `LunchBreak` -> `InProgress`
/// - `InProgress` -> `Completed`
///
/// No se permiten reversiones ni saltos arbitrarios entre estados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// El reloj simulado aún no llegó al inicio.
    Pending,
    /// La tarea está en ejecución.
    InProgress,
    /// Pausa de almuerzo.
    LunchBreak,
    /// Terminal.
    Completed,
}

impl TaskStatus {
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        use TaskStatus::*;
        matches!((self, next),
                 (Pending, InProgress) | (InProgress, LunchBreak) | (LunchBreak, InProgress) | (InProgress, Completed))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}
