//! Engine module: Flow Walker (ProjectionEngine), builder, transition
//! selection and waiting-time jitter sources.

pub mod builder;
pub mod core;
pub mod jitter;
pub mod selector;

pub use builder::ProjectionEngineBuilder;
pub use self::core::{project_timeline, ProjectionEngine};
pub use jitter::{FixedJitter, JitterSource, NoJitter, SeededJitter};
pub use selector::{FirstMatch, TransitionSelector};
