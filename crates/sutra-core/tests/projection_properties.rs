use chrono::{NaiveDate, NaiveDateTime};
use sutra_core::engine::{FixedJitter, NoJitter, ProjectionEngine, SeededJitter};
use sutra_core::hashing::projection_fingerprint;
use sutra_core::repo::{InMemoryRuleStore, RuleStore};
use sutra_core::task::TaskStatus;
use sutra_core::tat::compute_end_time;
use sutra_core::throughput::{effective_speed, ThroughputParams};
use sutra_core::project_timeline;
use sutra_domain::{FlowRule, FlowRuleRow, OfficeHours, TatType};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn two_step_rules() -> Vec<FlowRule> {
    vec![FlowRule::start("S", "A", 1.0, TatType::HourTat).unwrap(),
         FlowRule::new("S", "A", "Done", "B", 1.0, TatType::DayTat).unwrap()]
}

#[test]
fn same_input_same_projection() {
    let rules = two_step_rules();
    let a = project_timeline("S", &rules, at(9, 0), 10);
    let b = project_timeline("S", &rules, at(9, 0), 10);
    assert_eq!(a, b);
    assert_eq!(projection_fingerprint(&a), projection_fingerprint(&b));

    // el jitter sólo toca waiting_time, que no entra en el fingerprint
    let engine = ProjectionEngine::default();
    let jittered = engine.project("S", &rules, at(9, 0), &mut FixedJitter(25));
    assert_eq!(projection_fingerprint(&a), projection_fingerprint(&jittered));

    let s1 = engine.project("S", &rules, at(9, 0), &mut SeededJitter::new(9));
    let s2 = engine.project("S", &rules, at(9, 0), &mut SeededJitter::new(9));
    assert_eq!(s1, s2);
}

#[test]
fn fingerprint_changes_with_start_time() {
    let rules = two_step_rules();
    let a = project_timeline("S", &rules, at(9, 0), 10);
    let b = project_timeline("S", &rules, at(9, 30), 10);
    assert_ne!(projection_fingerprint(&a), projection_fingerprint(&b));
}

#[test]
fn first_task_comes_from_the_start_rule() {
    // la regla de inicio no es la primera del snapshot
    let rules = vec![FlowRule::new("S", "Intake", "Done", "Review", 1.0, TatType::HourTat).unwrap(),
                     FlowRule::start("S", "Intake", 1.0, TatType::HourTat).unwrap()];
    let tasks = project_timeline("S", &rules, at(8, 0), 10);
    assert_eq!(tasks[0].task_name, "Intake");
    assert_eq!(tasks[0].status, TaskStatus::Pending);
    assert_eq!(tasks[1].task_name, "Review");
}

#[test]
fn unknown_system_projects_nothing() {
    assert!(project_timeline("Nope", &two_step_rules(), at(9, 0), 10).is_empty());
    assert!(project_timeline("S", &[], at(9, 0), 10).is_empty());
}

#[test]
fn hour_and_day_tat() {
    let office = OfficeHours::default();
    assert_eq!(compute_end_time(at(14, 0), 2.0, TatType::HourTat, office), at(16, 0));
    assert_eq!(compute_end_time(at(13, 0), 1.0, TatType::DayTat, office), at(21, 0));
}

#[test]
fn lunch_pushes_end_by_one_hour() {
    let office = OfficeHours::default();
    assert_eq!(compute_end_time(at(11, 30), 1.0, TatType::HourTat, office), at(13, 30));
}

#[test]
fn speed_never_drops_below_minimum() {
    let params = ThroughputParams { base_speed_percent: 1.0,
                                    team_count: 1,
                                    ..ThroughputParams::default() };
    let speed = effective_speed("anyone", at(10, 0), &params);
    assert!(speed >= 0.1);
}

#[test]
fn self_loop_is_bounded_by_max_steps() {
    let rules = vec![FlowRule::start("Loop", "Followup", 1.0, TatType::HourTat).unwrap(),
                     FlowRule::new("Loop", "Followup", "Done", "Followup", 1.0, TatType::HourTat).unwrap()];
    for max in [1, 5, 12] {
        let tasks = project_timeline("Loop", &rules, at(8, 0), max);
        assert_eq!(tasks.len(), max);
        assert!(tasks.iter().all(|t| t.task_name == "Followup"));
    }
}

#[test]
fn team_benefit_is_linear() {
    let one = ThroughputParams::default();
    let three = ThroughputParams { team_count: 3, ..ThroughputParams::default() };
    let s1 = effective_speed("a@acme.test", at(10, 0), &one);
    let s3 = effective_speed("a@acme.test", at(10, 0), &three);
    assert!((s3 - s1 * 1.6).abs() < 1e-9);
}

#[test]
fn end_to_end_hour_then_day() {
    let tasks = project_timeline("S", &two_step_rules(), at(9, 0), 10);
    assert_eq!(tasks.len(), 2);
    assert_eq!((tasks[0].start_time, tasks[0].planned_end_time), (at(9, 0), at(10, 0)));
    // 10:00 + 8h se solapa con el almuerzo
    assert_eq!((tasks[1].start_time, tasks[1].planned_end_time), (at(10, 0), at(19, 0)));
}

#[test]
fn projects_from_store_snapshot_loaded_as_json() {
    let rows: Vec<FlowRuleRow> = serde_json::from_str(r#"[
        {"system":"Hiring","currentTask":"","status":"","nextTask":"Screen","tat":2,"tatType":"hourtat","doer":"Recruiter","email":"rec@acme.test"},
        {"system":"Hiring","currentTask":"Screen","status":"Done","nextTask":"Interview","tat":1,"tatType":"daytat","doer":"Lead","email":"lead@acme.test"},
        {"system":"Hiring","currentTask":"Interview","status":"Done","nextTask":"Offer","tat":0.5,"tatType":"specifytat"}
    ]"#).unwrap();
    let store = InMemoryRuleStore::new();
    for row in rows {
        store.insert("acme", row).unwrap();
    }
    let engine = ProjectionEngine::default();
    let tasks = engine.project("Hiring", &store.snapshot("acme"), at(8, 0), &mut NoJitter);
    let names: Vec<&str> = tasks.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(names, vec!["Screen", "Interview", "Offer"]);
    assert_eq!(tasks[0].planned_end_time, at(10, 0));
    // 10:00 + 8h con almuerzo
    assert_eq!(tasks[1].planned_end_time, at(19, 0));
    assert_eq!(tasks[1].doer_email, "lead@acme.test");
    assert!(engine.project("Hiring", &store.snapshot("globex"), at(8, 0), &mut NoJitter).is_empty());
}
