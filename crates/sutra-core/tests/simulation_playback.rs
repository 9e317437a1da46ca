use chrono::{Duration, NaiveDate, NaiveDateTime};
use sutra_core::event::{EventStore, SimulationEvent, SimulationEventKind};
use sutra_core::{project_timeline, Simulation, TaskStatus};
use sutra_domain::{FlowRule, TatType};
use uuid::Uuid;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
}

/// Store que sólo guarda la última sesión; alcanza para comprobar que la
/// simulación no depende de la implementación en memoria.
#[derive(Default)]
struct VecStore {
    events: Vec<SimulationEvent>,
}

impl EventStore for VecStore {
    fn append_kind(&mut self, session_id: Uuid, kind: SimulationEventKind, ts: NaiveDateTime) -> SimulationEvent {
        let ev = SimulationEvent { seq: self.events.len() as u64,
                                   session_id,
                                   kind,
                                   ts };
        self.events.push(ev.clone());
        ev
    }

    fn list(&self, session_id: Uuid) -> Vec<SimulationEvent> {
        self.events.iter().filter(|e| e.session_id == session_id).cloned().collect()
    }
}

#[test]
fn morning_tasks_skip_lunch() {
    let rules = vec![FlowRule::start("Ops", "Check", 1.0, TatType::HourTat).unwrap(),
                     FlowRule::new("Ops", "Check", "Done", "Sign", 1.0, TatType::HourTat).unwrap()];
    let tasks = project_timeline("Ops", &rules, at(9, 0), 10);
    let session = Uuid::new_v4();
    let mut sim = Simulation::with_store(session, "Ops", tasks, at(9, 0), VecStore::default());
    let ticks = sim.run_until_complete(Duration::minutes(15), 50).unwrap();
    assert_eq!(ticks, 8);
    assert_eq!(sim.event_codes(), "ISFSFC");
    // una hora sin almuerzo: el descuento fijo deja 0
    assert!(sim.tasks().iter().all(|t| t.processing_time == Some(0) && !t.lunch_taken));
    assert_eq!(sim.event_store().events.len(), 6);
    assert!(sim.events().iter().all(|e| e.session_id == session));
}

#[test]
fn lunch_transitions_are_recorded_once() {
    let rules = vec![FlowRule::start("Ops", "Audit", 3.0, TatType::HourTat).unwrap()];
    let tasks = project_timeline("Ops", &rules, at(11, 0), 10);
    // la proyección ya suma la hora de almuerzo
    assert_eq!(tasks[0].planned_end_time, at(15, 0));

    let mut sim = Simulation::new("Ops", tasks, at(11, 0));
    sim.advance_to(at(12, 0)).unwrap();
    assert_eq!(sim.tasks()[0].status, TaskStatus::LunchBreak);
    assert_eq!(sim.tasks()[0].planned_end_time, at(16, 0));
    sim.advance_to(at(12, 45)).unwrap();
    sim.advance_to(at(13, 0)).unwrap();
    assert_eq!(sim.tasks()[0].status, TaskStatus::InProgress);
    sim.advance_to(at(16, 0)).unwrap();
    assert!(sim.is_complete());
    assert_eq!(sim.event_codes(), "ISLRFC");
    // 11:00 -> 16:00 = 300 min, menos 60 de almuerzo
    assert_eq!(sim.tasks()[0].processing_time, Some(240));

    let summary = sim.summary();
    assert_eq!(summary.total, 1);
    assert!((summary.performance_percent - 100.0).abs() < 1e-9);
}

#[test]
fn session_completed_is_emitted_once() {
    let rules = vec![FlowRule::start("Ops", "Check", 1.0, TatType::HourTat).unwrap()];
    let mut sim = Simulation::new("Ops", project_timeline("Ops", &rules, at(9, 0), 10), at(9, 0));
    sim.advance_to(at(10, 0)).unwrap();
    sim.advance_to(at(11, 0)).unwrap();
    sim.tick(Duration::minutes(5)).unwrap();
    let completed = sim.events()
                       .iter()
                       .filter(|e| matches!(e.kind, SimulationEventKind::SessionCompleted { .. }))
                       .count();
    assert_eq!(completed, 1);
}
