//! Constantes del motor de proyección.
//!
//! `ENGINE_VERSION` entra en el fingerprint de una proyección: cambiarlo
//! invalida las comparaciones de determinismo entre versiones.

/// Versión lógica del motor.
pub const ENGINE_VERSION: &str = "TAT1.0";

/// Tope de pasos por proyección cuando el caller no indica otro.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Un día laboral en `daytat` son 8 horas, no un día calendario.
pub const WORKING_DAY_HOURS: f64 = 8.0;

/// Ventana de almuerzo `[12:00, 13:00]` del día de inicio.
pub const LUNCH_START_HOUR: u32 = 12;
pub const LUNCH_END_HOUR: u32 = 13;
pub const LUNCH_MINUTES: i64 = 60;

/// Cada miembro adicional del equipo aporta un 30% lineal.
pub const TEAM_MEMBER_BENEFIT: f64 = 0.3;

/// Piso del multiplicador de velocidad (evita divisiones que explotan).
pub const MIN_EFFECTIVE_SPEED: f64 = 0.1;

/// Jitter máximo de espera (minutos) entre tareas proyectadas.
pub const MAX_WAITING_JITTER_MINUTES: u32 = 30;

/// Marcador de estado que suele cerrar una tarea.
pub const DEFAULT_COMPLETION_MARKER: &str = "Done";
