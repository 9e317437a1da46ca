//! Tipos de evento de la reproducción simulada.
//!
//! - Cada transición de estado de una tarea emite un evento a un
//!   `EventStore` append-only.
//! - `ts` es el reloj simulado, nunca el reloj del sistema.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationEventKind {
    /// Primer evento de una sesión. Fija el sistema y la cantidad de tareas.
    SessionStarted { system: String, task_count: usize },
    TaskStarted { step_index: usize, task_name: String },
    /// La tarea entró en la ventana de almuerzo; el fin planificado se corrió una hora.
    LunchStarted { step_index: usize, task_name: String, planned_end_time: NaiveDateTime },
    LunchEnded { step_index: usize, task_name: String },
    TaskCompleted { step_index: usize, task_name: String, processing_minutes: i64 },
    /// Todas las tareas completadas.
    SessionCompleted { completed: usize },
}

impl SimulationEventKind {
    /// Letra corta para inspeccionar secuencias en tests y logs.
    pub fn code(&self) -> &'static str {
        match self {
            SimulationEventKind::SessionStarted { .. } => "I",
            SimulationEventKind::TaskStarted { .. } => "S",
            SimulationEventKind::LunchStarted { .. } => "L",
            SimulationEventKind::LunchEnded { .. } => "R",
            SimulationEventKind::TaskCompleted { .. } => "F",
            SimulationEventKind::SessionCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub session_id: Uuid,
    pub kind: SimulationEventKind,
    pub ts: NaiveDateTime,
}
