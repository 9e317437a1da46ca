use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CoreEngineError;

/// Ventana horaria de reloj (`HH:MM`), inclusiva en ambos extremos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeakWindowRepr", into = "PeakWindowRepr")]
pub struct PeakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Serialize, Deserialize)]
struct PeakWindowRepr {
    start: String,
    end: String,
}

impl PeakWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Construye la ventana a partir de strings `HH:MM`.
    pub fn parse(start: &str, end: &str) -> Result<Self, CoreEngineError> {
        Ok(Self { start: parse_hhmm(start)?,
                  end: parse_hhmm(end)? })
    }

    /// Una ventana con `start > end` cruza la medianoche.
    pub fn contains(&self, t: NaiveTime) -> bool {
        // la comparación es a nivel de minuto, como en la configuración
        let t = truncate_to_minute(t);
        if self.start <= self.end {
            self.start <= t && t <= self.end
        } else {
            t >= self.start || t <= self.end
        }
    }
}

impl TryFrom<PeakWindowRepr> for PeakWindow {
    type Error = CoreEngineError;

    fn try_from(repr: PeakWindowRepr) -> Result<Self, Self::Error> {
        PeakWindow::parse(&repr.start, &repr.end)
    }
}

impl From<PeakWindow> for PeakWindowRepr {
    fn from(w: PeakWindow) -> Self {
        PeakWindowRepr { start: w.start.format("%H:%M").to_string(),
                         end: w.end.format("%H:%M").to_string() }
    }
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, CoreEngineError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| CoreEngineError::InvalidParams(format!("hora '{s}' inválida: {e}")))
}

fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t)
}

/// Parámetros del modelo de throughput.
///
/// Los porcentajes son relativos a 100 (= velocidad nominal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThroughputParams {
    pub base_speed_percent: f64,
    pub peak_window: PeakWindow,
    pub peak_speed_percent: f64,
    pub team_count: u32,
    pub per_actor_speed_percent: HashMap<String, f64>,
}

impl ThroughputParams {
    pub fn with_actor_speed(mut self, actor_id: &str, percent: f64) -> Self {
        self.per_actor_speed_percent.insert(actor_id.to_string(), percent);
        self
    }

    pub fn validate(&self) -> Result<(), CoreEngineError> {
        let percents = [("baseSpeedPercent", self.base_speed_percent), ("peakSpeedPercent", self.peak_speed_percent)];
        for (name, value) in percents.into_iter()
                                     .chain(self.per_actor_speed_percent.iter().map(|(k, v)| (k.as_str(), *v)))
        {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreEngineError::InvalidParams(format!("{name} = {value}")));
            }
        }
        if self.team_count == 0 {
            return Err(CoreEngineError::InvalidParams("teamCount debe ser >= 1".into()));
        }
        Ok(())
    }
}

impl Default for ThroughputParams {
    fn default() -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        let two_pm = NaiveTime::from_hms_opt(14, 0, 0).unwrap_or(NaiveTime::MIN);
        Self { base_speed_percent: 100.0,
               peak_window: PeakWindow::new(noon, two_pm),
               peak_speed_percent: 100.0,
               team_count: 1,
               per_actor_speed_percent: HashMap::new() }
    }
}
