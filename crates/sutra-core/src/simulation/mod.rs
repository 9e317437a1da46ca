//! Reproducción simulada de una proyección: un reloj que avanza por ticks y
//! mueve cada tarea por su máquina de estados.

mod playback;
mod summary;

pub use playback::Simulation;
pub use summary::ProjectionSummary;
