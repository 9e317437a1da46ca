//! Acceso a reglas: el Rule Store (colaborador externo, aquí como trait con
//! una implementación en memoria) y el índice que el walker construye una
//! vez por proyección.

mod index;
mod store;

pub use index::RuleIndex;
pub use store::{InMemoryRuleStore, RuleStore};
