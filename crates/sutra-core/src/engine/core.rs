//! Core ProjectionEngine implementation

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use rayon::prelude::*;
use sutra_domain::{FlowRule, OfficeHours};

use crate::engine::{JitterSource, NoJitter, ProjectionEngineBuilder, SeededJitter, TransitionSelector};
use crate::repo::RuleIndex;
use crate::tat::{apply_lunch_break, base_duration, compute_end_time};
use crate::task::{ProjectedTask, TaskStatus};
use crate::throughput::{adjust_duration, effective_speed, ThroughputParams};

/// Flow Walker: proyecta la línea de tiempo de un sistema recorriendo su
/// grafo de reglas desde la regla de inicio.
///
/// Es una función pura sobre un snapshot de reglas: no lee el reloj, no
/// persiste nada y termina siempre (tope `max_steps`).
#[derive(Debug)]
pub struct ProjectionEngine {
    office_hours: OfficeHours,
    throughput: ThroughputParams,
    max_steps: usize,
    selector: Box<dyn TransitionSelector>,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        ProjectionEngineBuilder::default().build_unchecked()
    }
}

impl ProjectionEngine {
    /// Crea un nuevo builder para configurar el engine
    #[inline]
    pub fn builder() -> ProjectionEngineBuilder {
        ProjectionEngineBuilder::default()
    }

    pub(crate) fn from_parts(office_hours: OfficeHours,
                             throughput: ThroughputParams,
                             max_steps: usize,
                             selector: Box<dyn TransitionSelector>)
                             -> Self {
        Self { office_hours,
               throughput,
               max_steps,
               selector }
    }

    pub fn office_hours(&self) -> OfficeHours {
        self.office_hours
    }

    pub fn throughput(&self) -> &ThroughputParams {
        &self.throughput
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn selector_id(&self) -> &'static str {
        self.selector.id()
    }

    /// Proyecta la línea de tiempo de `system` a partir de `now`.
    ///
    /// Devuelve una lista vacía si no hay regla de inicio; el caller decide
    /// cómo mostrarlo ("no starting rule found for this system").
    pub fn project(&self,
                   system: &str,
                   rules: &[FlowRule],
                   now: NaiveDateTime,
                   jitter: &mut dyn JitterSource)
                   -> Vec<ProjectedTask> {
        let index = RuleIndex::build(rules);
        self.project_indexed(system, &index, now, jitter)
    }

    /// Igual que `project` pero sobre un índice ya construido (útil cuando se
    /// proyectan varios sistemas del mismo snapshot).
    pub fn project_indexed(&self,
                           system: &str,
                           index: &RuleIndex<'_>,
                           now: NaiveDateTime,
                           jitter: &mut dyn JitterSource)
                           -> Vec<ProjectedTask> {
        if self.max_steps == 0 {
            return Vec::new();
        }
        let Some(start) = index.start_rule(system) else {
            log::debug!("sin regla de inicio para el sistema '{system}'");
            return Vec::new();
        };

        let mut tasks: Vec<ProjectedTask> = Vec::new();
        let mut rule = start;
        let mut cursor = now;
        loop {
            if rule.is_terminal() {
                log::debug!("'{system}': el grafo termina tras {} tareas", tasks.len());
                break;
            }
            let waiting_time = if tasks.is_empty() { 0 } else { jitter.waiting_minutes() };
            let planned_end_time = self.plan_end(rule, cursor);
            tasks.push(ProjectedTask { step_index: tasks.len(),
                                       task_name: rule.next_task().to_string(),
                                       doer: rule.doer().to_string(),
                                       doer_email: rule.email().to_string(),
                                       form_id: rule.form_id().map(str::to_string),
                                       status: TaskStatus::Pending,
                                       start_time: cursor,
                                       planned_end_time,
                                       actual_end_time: None,
                                       tat: rule.tat(),
                                       tat_type: rule.tat_type(),
                                       waiting_time,
                                       processing_time: None,
                                       lunch_taken: false });
            if tasks.len() >= self.max_steps {
                log::debug!("'{system}': tope de {} pasos alcanzado", self.max_steps);
                break;
            }
            let candidates = index.candidates(system, rule.next_task());
            match self.selector.select(rule.next_task(), candidates) {
                Some(next) => rule = next,
                None => {
                    log::debug!("'{system}': sin arista saliente desde '{}'", rule.next_task());
                    break;
                }
            }
            cursor = planned_end_time;
        }
        tasks
    }

    /// Fin planificado de la tarea que introduce `rule`, empezando en `start`.
    ///
    /// Los TAT de duración se escalan por la velocidad efectiva del
    /// responsable; `beforetat` es una fecha límite y no se escala.
    pub fn plan_end(&self, rule: &FlowRule, start: NaiveDateTime) -> NaiveDateTime {
        let tat_type = rule.tat_type();
        match base_duration(rule.tat(), tat_type) {
            Some(base) if tat_type.is_duration() => {
                let speed = effective_speed(rule.actor_id(), start, &self.throughput);
                let adjusted = adjust_duration(base, speed);
                match start.checked_add_signed(adjusted) {
                    Some(end) => apply_lunch_break(start, end),
                    None => compute_end_time(start, rule.tat(), tat_type, self.office_hours),
                }
            }
            _ => compute_end_time(start, rule.tat(), tat_type, self.office_hours),
        }
    }

    /// Proyecta varios sistemas en paralelo sobre un mismo snapshot.
    ///
    /// Cada sistema usa `SeededJitter(seed + posición)`, así el resultado es
    /// reproducible. El orden de salida es el de `systems`.
    pub fn project_systems(&self,
                           systems: &[&str],
                           rules: &[FlowRule],
                           now: NaiveDateTime,
                           seed: u64)
                           -> IndexMap<String, Vec<ProjectedTask>> {
        let index = RuleIndex::build(rules);
        let projected: Vec<(String, Vec<ProjectedTask>)> =
            systems.par_iter()
                   .enumerate()
                   .map(|(i, system)| {
                       let mut jitter = SeededJitter::new(seed.wrapping_add(i as u64));
                       (system.to_string(), self.project_indexed(system, &index, now, &mut jitter))
                   })
                   .collect();
        projected.into_iter().collect()
    }
}

/// `projectTimeline(system, rules, now, maxSteps)` con parámetros por defecto
/// y sin jitter.
pub fn project_timeline(system: &str, rules: &[FlowRule], now: NaiveDateTime, max_steps: usize) -> Vec<ProjectedTask> {
    let engine = ProjectionEngine::builder().max_steps(max_steps).build_unchecked();
    engine.project(system, rules, now, &mut NoJitter)
}
