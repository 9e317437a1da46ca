//! Errores específicos del core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    #[error("invalid engine params: {0}")] InvalidParams(String),
    #[error("simulated clock cannot move backwards ({from} -> {to})")] ClockRewind { from: String, to: String },
    #[error("simulation did not complete within {0} ticks")] SimulationIncomplete(usize),
    #[error("invalid tick: {0}")] InvalidTick(String),
}
