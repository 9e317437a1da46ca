use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sutra_domain::TatType;

use super::TaskStatus;

/// Nodo materializado por el Flow Walker. Transitorio: vive lo que dura la
/// proyección (o la sesión de simulación que la reproduce).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedTask {
    pub step_index: usize,
    pub task_name: String,
    pub doer: String,
    pub doer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    pub status: TaskStatus,
    pub start_time: NaiveDateTime,
    pub planned_end_time: NaiveDateTime,
    pub actual_end_time: Option<NaiveDateTime>,
    pub tat: f64,
    pub tat_type: TatType,
    /// Minutos de espera estimados antes de empezar (sólo visualización).
    pub waiting_time: u32,
    /// Minutos efectivos de trabajo; se fija al completar.
    pub processing_time: Option<i64>,
    pub lunch_taken: bool,
}

impl ProjectedTask {
    pub fn planned_minutes(&self) -> i64 {
        (self.planned_end_time - self.start_time).num_minutes()
    }

    pub fn planned_hours(&self) -> f64 {
        (self.planned_end_time - self.start_time).num_seconds() as f64 / 3600.0
    }
}
