//! Fingerprint de una proyección.
//!
//! Sólo entran los campos de planificación (nombre, inicio, fin planificado,
//! TAT). El tiempo de espera es jitter de visualización y queda fuera, de modo
//! que dos proyecciones con la misma entrada producen el mismo fingerprint
//! aunque el `JitterSource` difiera.

use serde_json::json;

use crate::constants::ENGINE_VERSION;
use crate::task::ProjectedTask;

use super::hash_value;

pub fn projection_fingerprint(tasks: &[ProjectedTask]) -> String {
    let steps: Vec<serde_json::Value> = tasks.iter()
                                             .map(|t| {
                                                 json!({
                                                     "step_index": t.step_index,
                                                     "task_name": t.task_name,
                                                     "start": t.start_time.to_string(),
                                                     "planned_end": t.planned_end_time.to_string(),
                                                     "tat": t.tat,
                                                     "tat_type": t.tat_type.as_str(),
                                                 })
                                             })
                                             .collect();
    hash_value(&json!({ "engine_version": ENGINE_VERSION, "steps": steps }))
}
