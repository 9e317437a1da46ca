use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::constants::{LUNCH_END_HOUR, LUNCH_MINUTES, LUNCH_START_HOUR};

/// Ventana `[12:00, 13:00]` de un día dado.
pub fn lunch_window(day: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Some((day.and_hms_opt(LUNCH_START_HOUR, 0, 0)?, day.and_hms_opt(LUNCH_END_HOUR, 0, 0)?))
}

/// `true` si la hora de reloj de `at` cae en `[12:00, 13:00)`.
pub fn in_lunch_window(at: NaiveDateTime) -> bool {
    (LUNCH_START_HOUR..LUNCH_END_HOUR).contains(&at.hour())
}

/// Suma una hora a `end` si `[start, end]` se solapa con el almuerzo del día
/// de `start`.
///
/// Sólo se mira la ventana del día de inicio: una tarea de varios días no
/// descuenta los almuerzos siguientes.
pub fn apply_lunch_break(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    match lunch_window(start.date()) {
        Some((lunch_start, lunch_end)) if start < lunch_end && end > lunch_start => {
            end.checked_add_signed(Duration::minutes(LUNCH_MINUTES)).unwrap_or_else(|| {
                                                                         log::warn!("desborde al sumar el almuerzo a {end}; se conserva el fin");
                                                                         end
                                                                     })
        }
        _ => end,
    }
}
