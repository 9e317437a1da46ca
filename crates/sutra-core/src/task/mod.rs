//! Tareas proyectadas y su ciclo de vida.

mod projected;
mod status;

pub use projected::ProjectedTask;
pub use status::TaskStatus;
