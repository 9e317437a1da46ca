use chrono::NaiveDateTime;
use std::collections::HashMap;
use uuid::Uuid;

use super::{SimulationEvent, SimulationEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento y devuelve el evento completo (con seq).
    fn append_kind(&mut self, session_id: Uuid, kind: SimulationEventKind, ts: NaiveDateTime) -> SimulationEvent;
    /// Lista eventos de una sesión (orden ascendente por seq).
    fn list(&self, session_id: Uuid) -> Vec<SimulationEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<SimulationEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, session_id: Uuid, kind: SimulationEventKind, ts: NaiveDateTime) -> SimulationEvent {
        let events = self.inner.entry(session_id).or_default();
        let ev = SimulationEvent { seq: events.len() as u64,
                                   session_id,
                                   kind,
                                   ts };
        events.push(ev.clone());
        ev
    }

    fn list(&self, session_id: Uuid) -> Vec<SimulationEvent> {
        self.inner.get(&session_id).cloned().unwrap_or_default()
    }
}
