use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use crate::constants::LUNCH_MINUTES;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, InMemoryEventStore, SimulationEvent, SimulationEventKind};
use crate::tat::in_lunch_window;
use crate::task::{ProjectedTask, TaskStatus};

use super::ProjectionSummary;

/// Sesión de simulación sobre una proyección.
///
/// La sesión es dueña de sus tareas: entre ticks nadie más las toca. Cada
/// transición queda registrada en el `EventStore` con el reloj simulado.
#[derive(Debug)]
pub struct Simulation<E: EventStore = InMemoryEventStore> {
    session_id: Uuid,
    system: String,
    tasks: Vec<ProjectedTask>,
    clock: NaiveDateTime,
    events: E,
    finished: bool,
}

impl Simulation<InMemoryEventStore> {
    /// Sesión con store en memoria e id aleatorio.
    pub fn new(system: &str, tasks: Vec<ProjectedTask>, clock: NaiveDateTime) -> Self {
        Self::with_store(Uuid::new_v4(), system, tasks, clock, InMemoryEventStore::default())
    }
}

impl<E: EventStore> Simulation<E> {
    pub fn with_store(session_id: Uuid, system: &str, tasks: Vec<ProjectedTask>, clock: NaiveDateTime, mut events: E) -> Self {
        events.append_kind(session_id,
                           SimulationEventKind::SessionStarted { system: system.to_string(),
                                                                 task_count: tasks.len() },
                           clock);
        Self { session_id,
               system: system.to_string(),
               tasks,
               clock,
               events,
               finished: false }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn clock(&self) -> NaiveDateTime {
        self.clock
    }

    pub fn tasks(&self) -> &[ProjectedTask] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<ProjectedTask> {
        self.tasks
    }

    pub fn event_store(&self) -> &E {
        &self.events
    }

    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.list(self.session_id)
    }

    /// Códigos de evento concatenados, p.ej. `"ISFSLRFC"`.
    pub fn event_codes(&self) -> String {
        self.events().iter().map(|e| e.kind.code()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(|t| t.status.is_terminal())
    }

    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::from_tasks(&self.tasks)
    }

    /// Mueve el reloj a `to` y evalúa las transiciones. El reloj no retrocede.
    pub fn advance_to(&mut self, to: NaiveDateTime) -> Result<(), CoreEngineError> {
        if to < self.clock {
            return Err(CoreEngineError::ClockRewind { from: self.clock.to_string(),
                                                      to: to.to_string() });
        }
        self.clock = to;
        self.evaluate();
        Ok(())
    }

    pub fn tick(&mut self, step: Duration) -> Result<(), CoreEngineError> {
        if step <= Duration::zero() {
            return Err(CoreEngineError::InvalidTick(format!("{step}")));
        }
        let to = self.clock
                     .checked_add_signed(step)
                     .ok_or_else(|| CoreEngineError::InvalidTick(format!("desborde del reloj en {}", self.clock)))?;
        self.advance_to(to)
    }

    /// Avanza por ticks hasta completar todas las tareas. Devuelve los ticks
    /// usados; falla si no alcanza con `max_ticks`.
    pub fn run_until_complete(&mut self, step: Duration, max_ticks: usize) -> Result<usize, CoreEngineError> {
        let mut ticks = 0;
        self.evaluate();
        while !self.is_complete() {
            if ticks >= max_ticks {
                return Err(CoreEngineError::SimulationIncomplete(max_ticks));
            }
            self.tick(step)?;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Una pasada por tarea, en orden.
    fn evaluate(&mut self) {
        let clock = self.clock;
        let session_id = self.session_id;
        let Simulation { tasks, events, .. } = self;
        for task in tasks.iter_mut() {
            if task.status == TaskStatus::Pending && clock >= task.start_time {
                task.status = TaskStatus::InProgress;
                events.append_kind(session_id,
                                   SimulationEventKind::TaskStarted { step_index: task.step_index,
                                                                      task_name: task.task_name.clone() },
                                   clock);
            }

            if task.status == TaskStatus::InProgress && !task.lunch_taken && in_lunch_window(clock) {
                task.status = TaskStatus::LunchBreak;
                task.lunch_taken = true;
                match task.planned_end_time.checked_add_signed(Duration::minutes(LUNCH_MINUTES)) {
                    Some(end) => task.planned_end_time = end,
                    None => log::warn!("desborde al correr el fin de '{}' por almuerzo; se conserva {}", task.task_name, task.planned_end_time),
                }
                events.append_kind(session_id,
                                   SimulationEventKind::LunchStarted { step_index: task.step_index,
                                                                       task_name: task.task_name.clone(),
                                                                       planned_end_time: task.planned_end_time },
                                   clock);
            } else if task.status == TaskStatus::LunchBreak && !in_lunch_window(clock) {
                task.status = TaskStatus::InProgress;
                events.append_kind(session_id,
                                   SimulationEventKind::LunchEnded { step_index: task.step_index,
                                                                     task_name: task.task_name.clone() },
                                   clock);
            }

            if task.status == TaskStatus::InProgress && clock >= task.planned_end_time {
                // siempre se descuenta la hora de almuerzo, con piso 0
                let elapsed = (clock - task.start_time).num_minutes();
                let processing = (elapsed - LUNCH_MINUTES).max(0);
                task.status = TaskStatus::Completed;
                task.actual_end_time = Some(clock);
                task.processing_time = Some(processing);
                events.append_kind(session_id,
                                   SimulationEventKind::TaskCompleted { step_index: task.step_index,
                                                                        task_name: task.task_name.clone(),
                                                                        processing_minutes: processing },
                                   clock);
            }
        }

        if !self.finished && self.is_complete() {
            self.finished = true;
            let completed = self.tasks.len();
            self.events
                .append_kind(session_id, SimulationEventKind::SessionCompleted { completed }, clock);
            log::debug!("simulación {} de '{}' completada en {}", session_id, self.system, clock);
        }
    }
}
