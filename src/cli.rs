//! CLI mínima del binario `sutra`.
//!
//! ```text
//! sutra project  --rules <file.json> --system <name> [--now <YYYY-MM-DDTHH:MM>] [--max <n>] [--seed <n>] [--status [marker]] [--params <file.json>]
//! sutra simulate --rules <file.json> --system <name> [...] [--tick <minutes>]
//! ```
use std::path::PathBuf;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde_json::json;
use sutra_core::constants::DEFAULT_COMPLETION_MARKER;
use sutra_core::hashing::projection_fingerprint;
use sutra_core::repo::{InMemoryRuleStore, RuleIndex, RuleStore};
use sutra_core::throughput::ThroughputParams;
use sutra_core::{ProjectedTask, ProjectionSummary, Simulation};
use sutra_domain::{FlowRule, FlowRuleRow};

use crate::config::AppConfig;
use crate::errors::AppError;

pub const USAGE: &str = "Uso: sutra <project|simulate> --rules <file.json> --system <name> [--now <YYYY-MM-DDTHH:MM>] [--max <n>] [--seed <n>] [--status [marker]] [--params <file.json>] [--tick <minutes>]";

const LOCAL_TENANT: &str = "local";
const DEFAULT_TICK_MINUTES: i64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Project(RunArgs),
    Simulate { run: RunArgs, tick_minutes: i64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunArgs {
    pub rules: PathBuf,
    pub system: String,
    pub now: Option<NaiveDateTime>,
    pub max_steps: Option<usize>,
    pub seed: Option<u64>,
    pub status: Option<String>,
    pub params: Option<PathBuf>,
}

impl RunArgs {
    /// Sobrescribe la configuración de entorno con las opciones de la línea.
    pub fn apply(&self, cfg: &AppConfig) -> Result<AppConfig, AppError> {
        let mut cfg = cfg.clone();
        if let Some(max) = self.max_steps {
            cfg.max_steps = max;
        }
        if self.seed.is_some() {
            cfg.jitter_seed = self.seed;
        }
        if self.status.is_some() {
            cfg.completion_marker = self.status.clone();
        }
        if let Some(path) = &self.params {
            let params: ThroughputParams = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            params.validate()?;
            cfg.throughput = params;
        }
        Ok(cfg)
    }
}

/// `args` sin el nombre del programa.
pub fn parse_args(args: &[String]) -> Result<Command, AppError> {
    let Some(sub) = args.first() else {
        return Err(AppError::Usage(USAGE.into()));
    };
    let mut run = RunArgs::default();
    let mut rules: Option<PathBuf> = None;
    let mut system: Option<String> = None;
    let mut tick_minutes = DEFAULT_TICK_MINUTES;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" => rules = Some(PathBuf::from(value(args, &mut i, "--rules")?)),
            "--system" => system = Some(value(args, &mut i, "--system")?.to_string()),
            "--now" => run.now = Some(parse_now(value(args, &mut i, "--now")?)?),
            "--max" => run.max_steps = Some(parse_num(value(args, &mut i, "--max")?, "--max")?),
            "--seed" => run.seed = Some(parse_num(value(args, &mut i, "--seed")?, "--seed")?),
            "--params" => run.params = Some(PathBuf::from(value(args, &mut i, "--params")?)),
            "--tick" => tick_minutes = parse_num(value(args, &mut i, "--tick")?, "--tick")?,
            "--status" => {
                // sin valor: el marcador habitual
                let next = args.get(i + 1).filter(|v| !v.starts_with("--"));
                run.status = Some(match next {
                                      Some(marker) => {
                                          i += 1;
                                          marker.clone()
                                      }
                                      None => DEFAULT_COMPLETION_MARKER.to_string(),
                                  });
            }
            other => return Err(AppError::Usage(format!("opción desconocida '{other}'\n{USAGE}"))),
        }
        i += 1;
    }
    let (Some(rules), Some(system)) = (rules, system) else {
        return Err(AppError::Usage(format!("--rules y --system son obligatorios\n{USAGE}")));
    };
    run.rules = rules;
    run.system = system;
    match sub.as_str() {
        "project" => Ok(Command::Project(run)),
        "simulate" if tick_minutes > 0 => Ok(Command::Simulate { run, tick_minutes }),
        "simulate" => Err(AppError::Usage(format!("--tick debe ser > 0 (recibido {tick_minutes})"))),
        other => Err(AppError::Usage(format!("subcomando desconocido '{other}'\n{USAGE}"))),
    }
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, AppError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("falta el valor de {flag}")))
}

fn parse_num<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, AppError> {
    raw.parse().map_err(|_| AppError::Usage(format!("{flag}: '{raw}' no es un número válido")))
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, AppError> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"].iter()
                                                            .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                                                            .ok_or_else(|| AppError::Usage(format!("--now: fecha '{raw}' inválida")))
}

/// Carga filas JSON pasando por la frontera de validación del store.
pub fn load_rules(json: &str) -> Result<Vec<FlowRule>, AppError> {
    let rows: Vec<FlowRuleRow> = serde_json::from_str(json)?;
    let store = InMemoryRuleStore::new();
    for row in rows {
        store.insert(LOCAL_TENANT, row)?;
    }
    Ok(store.snapshot(LOCAL_TENANT))
}

pub fn run(cmd: &Command, env_cfg: &AppConfig) -> Result<serde_json::Value, AppError> {
    let (run, tick) = match cmd {
        Command::Project(run) => (run, None),
        Command::Simulate { run, tick_minutes } => (run, Some(*tick_minutes)),
    };
    let cfg = run.apply(env_cfg)?;
    let rules = load_rules(&std::fs::read_to_string(&run.rules)?)?;
    let now = run.now.unwrap_or_else(local_now);
    match tick {
        None => project(run, &cfg, &rules, now),
        Some(tick) => simulate(run, &cfg, &rules, now, tick),
    }
}

fn project_tasks(run: &RunArgs, cfg: &AppConfig, rules: &[FlowRule], now: NaiveDateTime) -> Result<(Vec<ProjectedTask>, &'static str), AppError> {
    let index = RuleIndex::build(rules);
    if index.start_rule(&run.system).is_none() {
        return Err(AppError::NoStartRule(run.system.clone()));
    }
    let engine = cfg.engine()?;
    let mut jitter = cfg.jitter();
    let tasks = engine.project_indexed(&run.system, &index, now, jitter.as_mut());
    log::info!("'{}': {} tareas proyectadas desde {} (política {})", run.system, tasks.len(), now, engine.selector_id());
    Ok((tasks, engine.selector_id()))
}

fn project(run: &RunArgs, cfg: &AppConfig, rules: &[FlowRule], now: NaiveDateTime) -> Result<serde_json::Value, AppError> {
    let (tasks, policy) = project_tasks(run, cfg, rules, now)?;
    Ok(json!({
        "system": run.system,
        "now": now,
        "policy": policy,
        "fingerprint": projection_fingerprint(&tasks),
        "summary": ProjectionSummary::from_tasks(&tasks),
        "tasks": tasks,
    }))
}

fn simulate(run: &RunArgs, cfg: &AppConfig, rules: &[FlowRule], now: NaiveDateTime, tick: i64) -> Result<serde_json::Value, AppError> {
    let (tasks, policy) = project_tasks(run, cfg, rules, now)?;
    let limit = tick_limit(&tasks, now, tick);
    let fingerprint = projection_fingerprint(&tasks);
    let mut sim = Simulation::new(&run.system, tasks, now);
    let ticks = sim.run_until_complete(Duration::minutes(tick), limit)?;
    log::info!("simulación {} completada en {} ticks de {} min", sim.session_id(), ticks, tick);
    Ok(json!({
        "system": run.system,
        "sessionId": sim.session_id(),
        "policy": policy,
        "fingerprint": fingerprint,
        "ticks": ticks,
        "finishedAt": sim.clock(),
        "summary": sim.summary(),
        "events": sim.events(),
        "tasks": sim.tasks(),
    }))
}

/// Ticks suficientes para cubrir el último fin planificado más una hora de
/// almuerzo por tarea.
fn tick_limit(tasks: &[ProjectedTask], now: NaiveDateTime, tick: i64) -> usize {
    let last_end = tasks.iter().map(|t| t.planned_end_time).max().unwrap_or(now);
    let span = (last_end - now).num_minutes().max(0) + 60 * tasks.len() as i64;
    (span / tick.max(1)) as usize + 2
}

fn local_now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now)
}
