use chrono::{Duration, NaiveDateTime};
use sutra_domain::{OfficeHours, TatType};

use crate::constants::WORKING_DAY_HOURS;

use super::lunch::apply_lunch_break;

/// Duración base de un TAT, antes de ajustes.
///
/// Devuelve `None` para `beforetat` (fecha límite, no duración), para
/// valores de `tat` no finitos o no positivos y ante desborde.
///
/// `hourtat` y `daytat` truncan a horas completas; `specifytat` trabaja en
/// minutos y por eso conserva fracciones de hora.
pub fn base_duration(tat: f64, tat_type: TatType) -> Option<Duration> {
    if !is_valid_tat(tat) {
        return None;
    }
    match tat_type {
        TatType::HourTat => Duration::try_hours(tat.trunc() as i64),
        TatType::DayTat => Duration::try_hours((tat * WORKING_DAY_HOURS).trunc() as i64),
        TatType::SpecifyTat => Duration::try_minutes((tat * 60.0).trunc() as i64),
        TatType::BeforeTat => None,
    }
}

/// Fin base (sin almuerzo).
pub fn base_end_time(start: NaiveDateTime, tat: f64, tat_type: TatType, office: OfficeHours) -> NaiveDateTime {
    if !is_valid_tat(tat) {
        log::warn!("tat inválido ({tat}) para {tat_type}: se trata como duración cero; revisar la regla en el Rule Store");
        return start;
    }
    match tat_type {
        TatType::BeforeTat => before_deadline(start, tat, office),
        _ => match base_duration(tat, tat_type) {
            Some(d) => add_or_saturate(start, d),
            None => {
                log::warn!("tat {tat} ({tat_type}) fuera de rango; se conserva el inicio");
                start
            }
        },
    }
}

/// `computeEndTime`: fin base más el ajuste de almuerzo del día de inicio.
pub fn compute_end_time(start: NaiveDateTime, tat: f64, tat_type: TatType, office: OfficeHours) -> NaiveDateTime {
    if !is_valid_tat(tat) {
        return base_end_time(start, tat, tat_type, office);
    }
    apply_lunch_break(start, base_end_time(start, tat, tat_type, office))
}

/// Día calendario siguiente, a las `office.start_hour + tat` horas (truncado
/// a hora completa). Una hora mayor a 24 pasa al día subsiguiente.
fn before_deadline(start: NaiveDateTime, tat: f64, office: OfficeHours) -> NaiveDateTime {
    let next_midnight = start.date()
                             .succ_opt()
                             .and_then(|d| d.and_hms_opt(0, 0, 0));
    let Some(midnight) = next_midnight else {
        log::warn!("beforetat fuera del rango de fechas soportado (inicio {start})");
        return start;
    };
    // horas completas, igual que hourtat/daytat
    let hours = (office.start_hour as f64 + tat).trunc() as i64;
    match Duration::try_hours(hours) {
        Some(d) => add_or_saturate(midnight, d),
        None => start,
    }
}

fn add_or_saturate(at: NaiveDateTime, d: Duration) -> NaiveDateTime {
    at.checked_add_signed(d).unwrap_or_else(|| {
                                log::warn!("desborde al sumar {d} a {at}; se conserva el inicio");
                                at
                            })
}

fn is_valid_tat(tat: f64) -> bool {
    tat.is_finite() && tat > 0.0
}
