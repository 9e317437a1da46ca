//! `FlowRule`: una arista del grafo de un sistema.
//!
//! `(system, current_task, status) -> (next_task, tat, tat_type, doer)`.
//!
//! - `current_task` vacío marca la regla de inicio del sistema.
//! - `next_task` vacío termina el grafo.
//!
//! La fila cruda (`FlowRuleRow`) es lo que guarda el Rule Store; la conversión
//! a `FlowRule` es la frontera de validación: un `tatType` desconocido o un
//! `tat` no positivo nunca pasa de aquí.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{DomainError, TatType};

/// Fila tal como viene del almacenamiento (strings sin tipar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRuleRow {
    pub system: String,
    #[serde(default)]
    pub current_task: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub next_task: String,
    pub tat: f64,
    pub tat_type: String,
    #[serde(default)]
    pub doer: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FlowRuleRow", into = "FlowRuleRow")]
pub struct FlowRule {
    system: String,
    current_task: String,
    status: String,
    next_task: String,
    tat: f64,
    tat_type: TatType,
    doer: String,
    email: String,
    form_id: Option<String>,
}

impl FlowRule {
    pub fn new(system: &str,
               current_task: &str,
               status: &str,
               next_task: &str,
               tat: f64,
               tat_type: TatType)
               -> Result<Self, DomainError> {
        if system.trim().is_empty() {
            return Err(DomainError::Validation("system no puede ser vacío".to_string()));
        }
        if !tat.is_finite() || tat <= 0.0 {
            return Err(DomainError::Validation(format!("tat debe ser positivo (recibido {tat})")));
        }
        if status.is_empty() && !current_task.is_empty() {
            return Err(DomainError::Validation(format!("status vacío sólo se permite en la regla de inicio ({system}/{current_task})")));
        }
        Ok(FlowRule { system: system.to_string(),
                      current_task: current_task.to_string(),
                      status: status.to_string(),
                      next_task: next_task.to_string(),
                      tat,
                      tat_type,
                      doer: String::new(),
                      email: String::new(),
                      form_id: None })
    }

    /// Regla de inicio del sistema (`current_task` vacío).
    pub fn start(system: &str, next_task: &str, tat: f64, tat_type: TatType) -> Result<Self, DomainError> {
        Self::new(system, "", "", next_task, tat, tat_type)
    }

    pub fn with_doer(mut self, doer: &str, email: &str) -> Self {
        self.doer = doer.to_string();
        self.email = email.to_string();
        self
    }

    pub fn with_form(mut self, form_id: &str) -> Self {
        self.form_id = Some(form_id.to_string());
        self
    }

    pub fn system(&self) -> &str { &self.system }
    pub fn current_task(&self) -> &str { &self.current_task }
    pub fn status(&self) -> &str { &self.status }
    pub fn next_task(&self) -> &str { &self.next_task }
    pub fn tat(&self) -> f64 { self.tat }
    pub fn tat_type(&self) -> TatType { self.tat_type }
    pub fn doer(&self) -> &str { &self.doer }
    pub fn email(&self) -> &str { &self.email }
    pub fn form_id(&self) -> Option<&str> { self.form_id.as_deref() }

    pub fn is_start(&self) -> bool {
        self.current_task.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.next_task.is_empty()
    }

    /// Identificador del responsable para el modelo de throughput: el email si
    /// existe, si no el rol (`doer`).
    pub fn actor_id(&self) -> &str {
        if self.email.is_empty() {
            &self.doer
        } else {
            &self.email
        }
    }
}

impl TryFrom<FlowRuleRow> for FlowRule {
    type Error = DomainError;

    fn try_from(row: FlowRuleRow) -> Result<Self, Self::Error> {
        let tat_type: TatType = row.tat_type.parse()?;
        let mut rule = FlowRule::new(&row.system, &row.current_task, &row.status, &row.next_task, row.tat, tat_type)?
            .with_doer(&row.doer, &row.email);
        rule.form_id = row.form_id.filter(|f| !f.is_empty());
        Ok(rule)
    }
}

impl From<FlowRule> for FlowRuleRow {
    fn from(rule: FlowRule) -> Self {
        FlowRuleRow { system: rule.system,
                      current_task: rule.current_task,
                      status: rule.status,
                      next_task: rule.next_task,
                      tat: rule.tat,
                      tat_type: rule.tat_type.as_str().to_string(),
                      doer: rule.doer,
                      email: rule.email,
                      form_id: rule.form_id }
    }
}

/// Valida invariantes que abarcan varias reglas: a lo sumo una regla de
/// inicio por sistema.
pub fn validate_rule_set(rules: &[FlowRule]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for rule in rules.iter().filter(|r| r.is_start()) {
        if !seen.insert(rule.system()) {
            log::warn!("regla de inicio duplicada para el sistema '{}'", rule.system());
            return Err(DomainError::DuplicateStartRule(rule.system().to_string()));
        }
    }
    Ok(())
}
