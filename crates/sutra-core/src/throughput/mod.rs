//! Throughput Model: multiplicador de velocidad efectiva para un responsable
//! en un instante dado.
//!
//! `velocidad = base × pico? × actor × (1 + (equipo − 1) × 0.3)`, con piso
//! `0.1`. Una duración se ajusta como `base / velocidad`.

mod params;

pub use params::{PeakWindow, ThroughputParams};

use chrono::{Duration, NaiveDateTime};

use crate::constants::{MIN_EFFECTIVE_SPEED, TEAM_MEMBER_BENEFIT};

pub fn effective_speed(actor_id: &str, at: NaiveDateTime, params: &ThroughputParams) -> f64 {
    let mut speed = params.base_speed_percent / 100.0;
    if params.peak_window.contains(at.time()) {
        speed *= params.peak_speed_percent / 100.0;
    }
    let actor_percent = params.per_actor_speed_percent.get(actor_id).copied().unwrap_or(100.0);
    speed *= actor_percent / 100.0;
    speed *= team_benefit(params.team_count);
    // f64::max descarta NaN
    speed.max(MIN_EFFECTIVE_SPEED)
}

/// Beneficio lineal del equipo; `team_count == 0` se trata como 1.
pub fn team_benefit(team_count: u32) -> f64 {
    1.0 + (team_count.max(1) - 1) as f64 * TEAM_MEMBER_BENEFIT
}

/// `base / speed` con resolución de milisegundos.
pub fn adjust_duration(base: Duration, speed: f64) -> Duration {
    let speed = speed.max(MIN_EFFECTIVE_SPEED);
    let millis = (base.num_milliseconds() as f64 / speed).round();
    Duration::try_milliseconds(millis as i64).unwrap_or(base)
}
