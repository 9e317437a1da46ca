//! sutra-policies: políticas de transición para el Flow Walker
//!
//! El walker delega en un `TransitionSelector` la elección de la arista a
//! seguir. Aquí viven las políticas basadas en el `status` de la regla y la
//! explicación auditable de cada decisión.

use serde::{Deserialize, Serialize};
use sutra_core::engine::TransitionSelector;
use sutra_core::hashing::hash_value;
use sutra_domain::FlowRule;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("el marcador de estado no puede estar vacío")]
    EmptyMarker,
    #[error("la lista de estados preferidos está vacía")]
    NoPreferences,
}

/// Parámetros de las políticas soportadas.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "policy", content = "params")]
pub enum PolicyParams {
    StatusMarker { marker: String },
    PreferredStatus { preferences: Vec<String> },
    FirstMatch,
}

/// Selector con parámetros serializables, para poder explicar la decisión.
pub trait TransitionPolicy: TransitionSelector {
    fn params(&self) -> PolicyParams;
}

/// Sólo sigue aristas cuyo status es exactamente `marker` (p.ej. `"Done"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMarkerPolicy {
    marker: String,
}

impl StatusMarkerPolicy {
    pub fn new(marker: impl Into<String>) -> Result<Self, PolicyError> {
        let marker = marker.into();
        if marker.trim().is_empty() {
            return Err(PolicyError::EmptyMarker);
        }
        Ok(Self { marker })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl TransitionSelector for StatusMarkerPolicy {
    fn id(&self) -> &'static str {
        "status_marker"
    }

    fn select<'r>(&self, current_task: &str, candidates: &[&'r FlowRule]) -> Option<&'r FlowRule> {
        let chosen = candidates.iter().copied().find(|r| r.status() == self.marker);
        if chosen.is_none() && !candidates.is_empty() {
            log::debug!("'{current_task}': {} aristas, ninguna con status '{}'", candidates.len(), self.marker);
        }
        chosen
    }
}

impl TransitionPolicy for StatusMarkerPolicy {
    fn params(&self) -> PolicyParams {
        PolicyParams::StatusMarker { marker: self.marker.clone() }
    }
}

/// Recorre `preferences` en orden y toma la primera arista con ese status.
/// Si ninguna coincide, cae en la primera candidata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredStatusPolicy {
    preferences: Vec<String>,
}

impl PreferredStatusPolicy {
    pub fn new<I, S>(preferences: I) -> Result<Self, PolicyError>
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let preferences: Vec<String> = preferences.into_iter().map(Into::into).collect();
        if preferences.is_empty() {
            return Err(PolicyError::NoPreferences);
        }
        Ok(Self { preferences })
    }
}

impl TransitionSelector for PreferredStatusPolicy {
    fn id(&self) -> &'static str {
        "preferred_status"
    }

    fn select<'r>(&self, _current_task: &str, candidates: &[&'r FlowRule]) -> Option<&'r FlowRule> {
        self.preferences
            .iter()
            .find_map(|p| candidates.iter().copied().find(|r| r.status() == p))
            .or_else(|| candidates.first().copied())
    }
}

impl TransitionPolicy for PreferredStatusPolicy {
    fn params(&self) -> PolicyParams {
        PolicyParams::PreferredStatus { preferences: self.preferences.clone() }
    }
}

impl TransitionPolicy for sutra_core::engine::FirstMatch {
    fn params(&self) -> PolicyParams {
        PolicyParams::FirstMatch
    }
}

/// Explicación tipada de una elección.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rationale {
    pub policy_id: String,
    pub params: PolicyParams,
    pub current_task: String,
    pub considered_n: usize,
    pub chosen_status: Option<String>,
    pub chosen_next_task: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TransitionDecision {
    pub policy_id: String,
    /// Hash canónico de `params`.
    pub params_hash: String,
    pub rationale: Rationale,
}

impl TransitionDecision {
    pub fn chose_any(&self) -> bool {
        self.rationale.chosen_next_task.is_some()
    }
}

/// Aplica `policy` y devuelve la decisión junto con su rationale.
pub fn explain<P: TransitionPolicy + ?Sized>(policy: &P, current_task: &str, candidates: &[&FlowRule]) -> TransitionDecision {
    let chosen = policy.select(current_task, candidates);
    let params = policy.params();
    let rationale = Rationale { policy_id: policy.id().to_string(),
                                params: params.clone(),
                                current_task: current_task.to_string(),
                                considered_n: candidates.len(),
                                chosen_status: chosen.map(|r| r.status().to_string()),
                                chosen_next_task: chosen.map(|r| r.next_task().to_string()) };
    TransitionDecision { policy_id: policy.id().to_string(),
                         params_hash: params_hash(&params),
                         rationale }
}

pub fn params_hash(params: &PolicyParams) -> String {
    match serde_json::to_value(params) {
        Ok(v) => hash_value(&v),
        Err(e) => {
            log::warn!("no se pudieron serializar los parámetros de la política: {e}");
            String::new()
        }
    }
}
