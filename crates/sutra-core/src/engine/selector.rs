use sutra_domain::FlowRule;

/// Elige la arista a seguir entre las candidatas que salen de una tarea.
///
/// Implementaciones deben ser deterministas: mismo input, misma elección.
pub trait TransitionSelector: Send + Sync + std::fmt::Debug {
    /// Identificador estable (aparece en logs y rationales).
    fn id(&self) -> &'static str;

    fn select<'r>(&self, current_task: &str, candidates: &[&'r FlowRule]) -> Option<&'r FlowRule>;
}

/// Cualquier status es elegible; gana la primera regla en orden original.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMatch;

impl TransitionSelector for FirstMatch {
    fn id(&self) -> &'static str {
        "first_match"
    }

    fn select<'r>(&self, _current_task: &str, candidates: &[&'r FlowRule]) -> Option<&'r FlowRule> {
        candidates.first().copied()
    }
}
