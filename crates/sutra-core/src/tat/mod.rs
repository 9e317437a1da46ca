//! TAT Calculator: fin planificado de una tarea a partir de su inicio, la
//! magnitud del TAT, su tipo y el horario de oficina.
//!
//! Funciones puras: no leen el reloj del sistema.

mod calculator;
mod lunch;

pub use calculator::{base_duration, base_end_time, compute_end_time};
pub use lunch::{apply_lunch_break, in_lunch_window, lunch_window};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use sutra_domain::{OfficeHours, TatType};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    const OFFICE: OfficeHours = OfficeHours { start_hour: 9, end_hour: 18 };

    #[test]
    fn hour_tat_adds_whole_hours() {
        assert_eq!(compute_end_time(at(1, 8, 0), 2.0, TatType::HourTat, OFFICE), at(1, 10, 0));
        // fracción truncada en hourtat
        assert_eq!(compute_end_time(at(1, 7, 0), 1.5, TatType::HourTat, OFFICE), at(1, 8, 0));
    }

    #[test]
    fn specify_tat_keeps_sub_hour_precision() {
        assert_eq!(compute_end_time(at(1, 7, 0), 1.5, TatType::SpecifyTat, OFFICE), at(1, 8, 30));
        assert_eq!(compute_end_time(at(1, 7, 0), 2.0, TatType::SpecifyTat, OFFICE),
                   compute_end_time(at(1, 7, 0), 2.0, TatType::HourTat, OFFICE));
    }

    #[test]
    fn day_tat_is_eight_working_hours() {
        assert_eq!(compute_end_time(at(1, 14, 0), 1.0, TatType::DayTat, OFFICE), at(1, 22, 0));
        // 09:00 + 8h = 17:00, cruza el almuerzo
        assert_eq!(compute_end_time(at(1, 9, 0), 1.0, TatType::DayTat, OFFICE), at(1, 18, 0));
    }

    #[test]
    fn lunch_overlap_adds_one_hour() {
        assert_eq!(compute_end_time(at(1, 11, 30), 1.0, TatType::HourTat, OFFICE), at(1, 13, 30));
        // comenzar dentro de la ventana también cuenta
        assert_eq!(compute_end_time(at(1, 12, 30), 1.0, TatType::HourTat, OFFICE), at(1, 14, 30));
    }

    #[test]
    fn touching_the_window_edges_is_not_overlap() {
        assert_eq!(compute_end_time(at(1, 11, 0), 1.0, TatType::HourTat, OFFICE), at(1, 12, 0));
        assert_eq!(compute_end_time(at(1, 13, 0), 1.0, TatType::HourTat, OFFICE), at(1, 14, 0));
    }

    #[test]
    fn only_start_day_lunch_is_checked() {
        // 14:00 + 24h: cruza el almuerzo del día 2, pero sólo se mira el día 1
        assert_eq!(compute_end_time(at(1, 14, 0), 3.0, TatType::DayTat, OFFICE), at(2, 14, 0));
    }

    #[test]
    fn before_tat_is_next_day_deadline() {
        assert_eq!(compute_end_time(at(1, 15, 0), 2.0, TatType::BeforeTat, OFFICE), at(2, 11, 0));
        // el intervalo arranca antes de las 13:00 del día de inicio
        assert_eq!(compute_end_time(at(1, 10, 0), 2.0, TatType::BeforeTat, OFFICE), at(2, 12, 0));
        // 9 + 1.5 se trunca a las 10:00, como hourtat
        assert_eq!(base_end_time(at(1, 15, 0), 1.5, TatType::BeforeTat, OFFICE), at(2, 10, 0));
        assert_eq!(base_end_time(at(1, 15, 0), 1.99, TatType::BeforeTat, OFFICE), at(2, 10, 0));
    }

    #[test]
    fn before_tat_rolls_over_past_midnight() {
        assert_eq!(compute_end_time(at(1, 15, 0), 20.0, TatType::BeforeTat, OFFICE), at(3, 5, 0));
    }

    #[test]
    fn invalid_tat_degrades_to_zero_duration() {
        assert_eq!(compute_end_time(at(1, 12, 30), 0.0, TatType::HourTat, OFFICE), at(1, 12, 30));
        assert_eq!(compute_end_time(at(1, 9, 0), f64::NAN, TatType::BeforeTat, OFFICE), at(1, 9, 0));
        assert_eq!(base_duration(-2.0, TatType::DayTat), None);
    }

    #[test]
    fn base_duration_per_type() {
        assert_eq!(base_duration(2.0, TatType::HourTat), Some(Duration::hours(2)));
        assert_eq!(base_duration(0.5, TatType::DayTat), Some(Duration::hours(4)));
        assert_eq!(base_duration(0.25, TatType::SpecifyTat), Some(Duration::minutes(15)));
        assert_eq!(base_duration(2.0, TatType::BeforeTat), None);
    }

    #[test]
    fn lunch_adjustment_never_overflows() {
        let last_day = chrono::NaiveDate::MAX;
        let start = last_day.and_hms_opt(12, 30, 0).unwrap();
        let end = compute_end_time(start, 11.0, TatType::HourTat, OFFICE);
        assert!(end >= start);
        let late = last_day.and_hms_opt(23, 30, 0).unwrap();
        assert_eq!(apply_lunch_break(last_day.and_hms_opt(11, 0, 0).unwrap(), late), late);
    }

    #[test]
    fn lunch_window_membership() {
        assert!(in_lunch_window(at(1, 12, 0)));
        assert!(in_lunch_window(at(1, 12, 59)));
        assert!(!in_lunch_window(at(1, 13, 0)));
        assert!(!in_lunch_window(at(1, 11, 59)));
    }
}
