//! Eventos de una sesión de simulación y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{SimulationEvent, SimulationEventKind};
