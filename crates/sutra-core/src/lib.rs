//! sutra-core: proyección determinista de flujos de trabajo (Flow Walker +
//! TAT Calculator + Throughput Model) y su reproducción simulada.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod repo;
pub mod simulation;
pub mod task;
pub mod tat;
pub mod throughput;

pub use engine::{project_timeline, FirstMatch, FixedJitter, JitterSource, NoJitter, ProjectionEngine, ProjectionEngineBuilder, SeededJitter, TransitionSelector};
pub use errors::CoreEngineError;
pub use event::{EventStore, InMemoryEventStore, SimulationEvent, SimulationEventKind};
pub use hashing::projection_fingerprint;
pub use repo::{InMemoryRuleStore, RuleIndex, RuleStore};
pub use simulation::{ProjectionSummary, Simulation};
pub use task::{ProjectedTask, TaskStatus};
pub use tat::compute_end_time;
pub use throughput::{effective_speed, PeakWindow, ThroughputParams};
