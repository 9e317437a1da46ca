use serde::{Deserialize, Serialize};

use crate::task::{ProjectedTask, TaskStatus};

/// Agregados de una proyección / sesión.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total: usize,
    pub completed_count: usize,
    /// `completed / total * 100`; 0 si no hay tareas.
    pub performance_percent: f64,
    /// Suma de `planned_end_time - start_time`, en horas.
    pub total_throughput_hours: f64,
}

impl ProjectionSummary {
    pub fn from_tasks(tasks: &[ProjectedTask]) -> Self {
        let total = tasks.len();
        let completed_count = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
        let performance_percent = if total == 0 { 0.0 } else { completed_count as f64 / total as f64 * 100.0 };
        let total_throughput_hours = tasks.iter().map(ProjectedTask::planned_hours).sum();
        Self { total,
               completed_count,
               performance_percent,
               total_throughput_hours }
    }
}
