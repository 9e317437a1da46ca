//! Configuración central de la aplicación.
//! Lee variables de entorno (con soporte `.env`) y arma el `ProjectionEngine`
//! y la fuente de jitter que usa el binario `sutra`.
use once_cell::sync::Lazy;
use std::str::FromStr;

use sutra_core::engine::{FirstMatch, JitterSource, NoJitter, ProjectionEngine, SeededJitter};
use sutra_core::throughput::{PeakWindow, ThroughputParams};
use sutra_domain::OfficeHours;
use sutra_policies::StatusMarkerPolicy;

use crate::errors::AppError;

/// `.env` se carga una sola vez por proceso.
static DOTENV: Lazy<Option<std::path::PathBuf>> = Lazy::new(|| dotenvy::dotenv().ok());

/// Configuración de proyección (extensible para más secciones).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub office_hours: OfficeHours,
    pub max_steps: usize,
    pub throughput: ThroughputParams,
    /// Semilla del jitter de espera; `None` = sin jitter.
    pub jitter_seed: Option<u64>,
    /// Status que deben tener las aristas a seguir; `None` = primera arista.
    pub completion_marker: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { office_hours: OfficeHours::default(),
               max_steps: sutra_core::constants::DEFAULT_MAX_STEPS,
               throughput: ThroughputParams::default(),
               jitter_seed: None,
               completion_marker: None }
    }
}

impl AppConfig {
    /// Lee el entorno del proceso (más `.env` si existe).
    pub fn from_env() -> Result<Self, AppError> {
        if let Some(path) = DOTENV.as_ref() {
            log::debug!(".env cargado desde {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Arma la configuración desde una función de búsqueda arbitraria.
    /// Variables ausentes o vacías toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = AppConfig::default();

        let start = parse_var(&get, "SUTRA_OFFICE_START_HOUR")?.unwrap_or(cfg.office_hours.start_hour);
        let end = parse_var(&get, "SUTRA_OFFICE_END_HOUR")?.unwrap_or(cfg.office_hours.end_hour);
        cfg.office_hours = OfficeHours::new(start, end).map_err(|e| AppError::Config(e.to_string()))?;

        if let Some(max) = parse_var(&get, "SUTRA_MAX_STEPS")? {
            cfg.max_steps = max;
        }
        if let Some(base) = parse_var(&get, "SUTRA_BASE_SPEED_PERCENT")? {
            cfg.throughput.base_speed_percent = base;
        }
        if let Some(peak) = parse_var(&get, "SUTRA_PEAK_SPEED_PERCENT")? {
            cfg.throughput.peak_speed_percent = peak;
        }
        if let Some(team) = parse_var(&get, "SUTRA_TEAM_COUNT")? {
            cfg.throughput.team_count = team;
        }
        let peak_start = get("SUTRA_PEAK_START");
        let peak_end = get("SUTRA_PEAK_END");
        if peak_start.is_some() || peak_end.is_some() {
            let current = cfg.throughput.peak_window;
            let start = peak_start.unwrap_or_else(|| current.start.format("%H:%M").to_string());
            let end = peak_end.unwrap_or_else(|| current.end.format("%H:%M").to_string());
            cfg.throughput.peak_window = PeakWindow::parse(&start, &end).map_err(|e| AppError::Config(e.to_string()))?;
        }
        cfg.throughput.validate().map_err(|e| AppError::Config(e.to_string()))?;

        cfg.jitter_seed = parse_var(&get, "SUTRA_JITTER_SEED")?;
        cfg.completion_marker = get("SUTRA_COMPLETION_MARKER");
        Ok(cfg)
    }

    /// Engine con el horario, throughput, tope y política configurados.
    pub fn engine(&self) -> Result<ProjectionEngine, AppError> {
        let builder = ProjectionEngine::builder().office_hours(self.office_hours)
                                                 .throughput(self.throughput.clone())
                                                 .max_steps(self.max_steps);
        let builder = match &self.completion_marker {
            Some(marker) => {
                let policy = StatusMarkerPolicy::new(marker.as_str()).map_err(|e| AppError::Config(e.to_string()))?;
                builder.selector(policy)
            }
            None => builder.selector(FirstMatch),
        };
        Ok(builder.build()?)
    }

    pub fn jitter(&self) -> Box<dyn JitterSource> {
        match self.jitter_seed {
            Some(seed) => Box::new(SeededJitter::new(seed)),
            None => Box::new(NoJitter),
        }
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>, AppError>
    where T: FromStr,
          T::Err: std::fmt::Display,
          G: Fn(&str) -> Option<String>
{
    match get(key) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>()
                        .map(Some)
                        .map_err(|e| AppError::Config(format!("{key}={raw}: {e}"))),
    }
}
