//! Fuentes del tiempo de espera entre tareas proyectadas.
//!
//! El tiempo de espera es un campo de visualización: no mueve ningún
//! `planned_end_time`. Se inyecta para que los tests puedan fijarlo.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::MAX_WAITING_JITTER_MINUTES;

pub trait JitterSource {
    /// Minutos de espera en `[0, 30]`.
    fn waiting_minutes(&mut self) -> u32;
}

/// Sin espera.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn waiting_minutes(&mut self) -> u32 {
        0
    }
}

/// Siempre el mismo valor (acotado a 30).
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn waiting_minutes(&mut self) -> u32 {
        self.0.min(MAX_WAITING_JITTER_MINUTES)
    }
}

/// Pseudoaleatorio reproducible a partir de una semilla.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl JitterSource for SeededJitter {
    fn waiting_minutes(&mut self) -> u32 {
        self.rng.gen_range(0..=MAX_WAITING_JITTER_MINUTES)
    }
}
