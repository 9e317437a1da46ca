use indexmap::IndexSet;
use std::collections::HashMap;
use sutra_domain::FlowRule;

/// Índice `(system, current_task) -> [regla]` sobre un snapshot de reglas.
///
/// Conserva el orden original dentro de cada grupo: cuando varias reglas son
/// elegibles gana la primera.
#[derive(Debug, Default)]
pub struct RuleIndex<'r> {
    by_node: HashMap<&'r str, HashMap<&'r str, Vec<&'r FlowRule>>>,
    systems: IndexSet<&'r str>,
}

impl<'r> RuleIndex<'r> {
    pub fn build(rules: &'r [FlowRule]) -> Self {
        let mut index = RuleIndex::default();
        for rule in rules {
            index.systems.insert(rule.system());
            index.by_node
                 .entry(rule.system())
                 .or_default()
                 .entry(rule.current_task())
                 .or_default()
                 .push(rule);
        }
        index
    }

    /// Regla de inicio del sistema. Si hay más de una gana la primera y se
    /// registra un warning (el Rule Store debería haberlo rechazado).
    pub fn start_rule(&self, system: &str) -> Option<&'r FlowRule> {
        let starts = self.by_node.get(system)?.get("")?;
        if starts.len() > 1 {
            log::warn!("{} reglas de inicio para el sistema '{}'; se usa la primera", starts.len(), system);
        }
        starts.first().copied()
    }

    /// Aristas salientes de `current_task` dentro de `system`, en orden original.
    pub fn candidates(&self, system: &str, current_task: &str) -> &[&'r FlowRule] {
        self.by_node
            .get(system)
            .and_then(|tasks| tasks.get(current_task))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Sistemas presentes, en orden de primera aparición.
    pub fn systems(&self) -> impl Iterator<Item = &'r str> + '_ {
        self.systems.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.by_node.values().flat_map(|tasks| tasks.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}
