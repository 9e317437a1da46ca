//! Builder para `ProjectionEngine`.
//!
//! ```ignore
//! let engine = ProjectionEngine::builder()
//!     .office_hours(OfficeHours::new(8, 17)?)
//!     .throughput(params)
//!     .max_steps(20)
//!     .build()?;
//! ```

use sutra_domain::OfficeHours;

use crate::constants::DEFAULT_MAX_STEPS;
use crate::engine::{FirstMatch, ProjectionEngine, TransitionSelector};
use crate::errors::CoreEngineError;
use crate::throughput::ThroughputParams;

#[derive(Debug)]
pub struct ProjectionEngineBuilder {
    office_hours: OfficeHours,
    throughput: ThroughputParams,
    max_steps: usize,
    selector: Box<dyn TransitionSelector>,
}

impl Default for ProjectionEngineBuilder {
    fn default() -> Self {
        Self { office_hours: OfficeHours::default(),
               throughput: ThroughputParams::default(),
               max_steps: DEFAULT_MAX_STEPS,
               selector: Box::new(FirstMatch) }
    }
}

impl ProjectionEngineBuilder {
    #[inline]
    pub fn office_hours(mut self, office_hours: OfficeHours) -> Self {
        self.office_hours = office_hours;
        self
    }

    #[inline]
    pub fn throughput(mut self, params: ThroughputParams) -> Self {
        self.throughput = params;
        self
    }

    /// Tope duro de tareas por proyección (acota grafos con ciclos).
    #[inline]
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[inline]
    pub fn selector<S>(mut self, selector: S) -> Self
        where S: TransitionSelector + 'static
    {
        self.selector = Box::new(selector);
        self
    }

    /// Valida horario y parámetros y construye el engine.
    pub fn build(self) -> Result<ProjectionEngine, CoreEngineError> {
        self.office_hours
            .validate()
            .map_err(|e| CoreEngineError::InvalidParams(e.to_string()))?;
        self.throughput.validate()?;
        Ok(self.build_unchecked())
    }

    // sólo para configuraciones válidas por construcción (defaults)
    pub(crate) fn build_unchecked(self) -> ProjectionEngine {
        ProjectionEngine::from_parts(self.office_hours, self.throughput, self.max_steps, self.selector)
    }
}
